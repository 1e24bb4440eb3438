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

use anyhow::Result;
use console::style;
use dialoguer::Input;
use std::path::Path;

use hytale_pack::{Author, ConfigAuthor, PackConfig, PackProject};

pub fn init_project(
    project_dir: &Path,
    group: Option<String>,
    name: Option<String>,
    description: Option<String>,
    author: Option<String>
) -> Result<()> {
    let group = value_or_prompt(group, "Group")?;
    let name = value_or_prompt(name, "Name")?;
    let description = value_or_prompt(description, "Description")?;

    // fail before writing anything when the author name is blank
    let author = Author::new(value_or_prompt(author, "Author")?, None, None)?;

    let config = PackConfig {
        group,
        name,
        description,
        authors: vec![ConfigAuthor {
            name: author.name().to_string(),
            ..Default::default()
        }],
        ..Default::default()
    };

    let project = PackProject::create(project_dir, config)?;

    println!("{} {}", style("Created").green(), project.config_path().display());

    Ok(())
}

fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    Ok(Input::<String>::with_theme(&super::console_theme())
        .with_prompt(prompt)
        .interact_text()?)
}
