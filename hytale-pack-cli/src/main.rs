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

mod cli;
mod cmds;

use std::{io, path::{Path, PathBuf}};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands, Parser};
use cmds::{check_manifest, generate_manifest, init_project, validate_project};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let project_dir = absolute_path(cli.project_dir.as_deref().unwrap_or(Path::new(".")))?;
    debug!("Using project directory {}", project_dir.display());

    match cli.command {
        Commands::Init { group, name, description, author } => {
            init_project(&project_dir, group, name, description, author)
        },
        Commands::Generate { project_version } => {
            generate_manifest(&project_dir, project_version)
        },
        Commands::Validate { project_version } => {
            validate_project(&project_dir, project_version)
        },
        Commands::Check { manifest } => {
            check_manifest(&absolute_path(&manifest)?)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "hpack=debug,hytale_pack=debug"
    } else {
        "hpack=warn,hytale_pack=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    Ok(if !path.is_absolute() {
        std::env::current_dir()?.join(path)
    } else {
        path.to_owned()
    })
}
