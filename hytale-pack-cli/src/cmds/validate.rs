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

use hytale_pack::{env, ManifestConfig, PackManifest, PackProject};

use super::{print_errors, print_warnings};

pub fn validate_project(project_dir: &Path, project_version: Option<String>) -> Result<()> {
    let project = PackProject::load(project_dir)?;
    let project_version = project_version.or_else(env::get_project_version);

    let config = project.manifest_config(project_version.as_deref())?;

    report(&config, &project.config_path())
}

pub fn check_manifest(manifest_path: &Path) -> Result<()> {
    let manifest = PackManifest::load(manifest_path)?;
    let config = ManifestConfig::try_from(manifest)?;

    report(&config, manifest_path)
}

fn report(config: &ManifestConfig, path: &Path) -> Result<()> {
    print_warnings(&config.warnings());

    let errors = config.validate();
    if !errors.is_empty() {
        print_errors(&errors);
        bail!("'{}' is invalid", path.display());
    }

    println!("{} {}", style("Valid").green(), path.display());

    Ok(())
}
