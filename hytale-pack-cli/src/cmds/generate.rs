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

use anyhow::{bail, Result};
use console::style;
use std::path::Path;

use hytale_pack::{env, Error, PackProject};

use super::{print_errors, print_warnings};

pub fn generate_manifest(project_dir: &Path, project_version: Option<String>) -> Result<()> {
    let project = PackProject::load(project_dir)?;
    let project_version = project_version.or_else(env::get_project_version);

    let config = project.manifest_config(project_version.as_deref())?;
    print_warnings(&config.warnings());

    match project.generate(&config) {
        Ok(manifest_path) => {
            println!("{} {}", style("Generated").green(), manifest_path.display());
            Ok(())
        },
        Err(Error::InvalidManifest(errors)) => {
            print_errors(&errors);
            bail!("Manifest for '{}' is invalid", project.dir.display())
        },
        Err(e) => Err(e.into())
    }
}
