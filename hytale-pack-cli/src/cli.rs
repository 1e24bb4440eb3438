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

pub use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Generate and validate Hytale pack manifests", long_about = None)]
pub struct Cli {
    /// Project directory containing hytale-pack.json, defaults to "."
    #[arg(short, long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Enable debug logging, RUST_LOG takes precedence when set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create pack config file, prompting for values not given
    Init {
        /// Pack group
        #[arg(long)]
        group: Option<String>,

        /// Pack name
        #[arg(long)]
        name: Option<String>,

        /// Pack description
        #[arg(long)]
        description: Option<String>,

        /// Name of the first author
        #[arg(long)]
        author: Option<String>
    },

    /// Validate pack config and write manifest.json
    Generate {
        /// Version used when the pack config has none
        /// [default: $HPACK_PROJECT_VERSION]
        #[arg(long, verbatim_doc_comment)]
        project_version: Option<String>
    },

    /// Validate pack config without writing anything
    Validate {
        /// Version used when the pack config has none
        /// [default: $HPACK_PROJECT_VERSION]
        #[arg(long, verbatim_doc_comment)]
        project_version: Option<String>
    },

    /// Validate an existing manifest.json
    Check {
        /// Path to manifest file
        manifest: PathBuf
    }
}
