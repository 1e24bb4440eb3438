/*
 * Hytale Pack Tools - Manifest generator for Hytale server packs
 * Copyright (C) 2026 Josh Kropf <josh@slashdev.ca>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::env;

/// Environment variable holding the fallback pack version
pub const PROJECT_VERSION_VAR: &str = "HPACK_PROJECT_VERSION";

/// Name of the pack config file in a project directory
pub const CONFIG_FILE: &str = "hytale-pack.json";

/// Name of the generated manifest file
pub const MANIFEST_FILE: &str = "manifest.json";

pub fn get_project_version() -> Option<String> {
    env::var(PROJECT_VERSION_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
}
