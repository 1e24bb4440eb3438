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

mod author;
pub mod env;
mod fs;
pub mod json;
mod manifest;
mod project;

pub use {
    author::{Author, AuthorBuilder},
    json::{ConfigAuthor, PackAuthor, PackConfig, PackManifest},
    manifest::{ManifestConfig, ANY_VERSION},
    project::PackProject
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Author name must not be blank")]
    BlankAuthorName,

    #[error("Manifest is invalid:\n - {}", .0.join("\n - "))]
    InvalidManifest(Vec<String>),

    #[error("Pack config not found in '{0}'")]
    ProjectNotFound(String),

    #[error("Pack config already exists in '{0}'")]
    ProjectExists(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error)
}

/// True when `value` is missing, empty, or only whitespace
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
