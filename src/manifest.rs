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

use semver::VersionReq;
use serde_json::{Map, Value};
use std::{collections::BTreeMap, path::Path};
use tracing::debug;
use url::Url;

use crate::{
    is_blank,
    json::{PackAuthor, PackManifest},
    Author, AuthorBuilder, Error, Result
};

/// Version constraint matching any version
pub const ANY_VERSION: &str = "*";

/// Fields of a pack manifest under construction.
///
/// Required fields read back as a default when unset, `""` for most and
/// [`ANY_VERSION`] for the server version. Blank and unset values are both
/// reported as missing by [`ManifestConfig::validate`].
#[derive(Debug, Default, Clone)]
pub struct ManifestConfig {
    group: Option<String>,
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    authors: Vec<Author>,
    website: Option<String>,
    server_version: Option<String>,
    dependencies: BTreeMap<String, String>,
    optional_dependencies: BTreeMap<String, String>,
    disabled_by_default: bool,
    main: Option<String>,
    includes_asset_pack: bool
}

impl ManifestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self) -> &str {
        self.group.as_deref().unwrap_or_default()
    }

    pub fn set_group<S: Into<String>>(&mut self, group: S) -> &mut Self {
        self.group = Some(group.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Pack version, empty until set or resolved from the project version
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or_default()
    }

    pub fn set_version<S: Into<String>>(&mut self, version: S) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn set_description<S: Into<String>>(&mut self, description: S) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn set_website<S: Into<String>>(&mut self, website: S) -> &mut Self {
        self.website = Some(website.into());
        self
    }

    pub fn server_version(&self) -> &str {
        self.server_version.as_deref().unwrap_or(ANY_VERSION)
    }

    pub fn set_server_version<S: Into<String>>(&mut self, server_version: S) -> &mut Self {
        self.server_version = Some(server_version.into());
        self
    }

    pub fn dependencies(&self) -> &BTreeMap<String, String> {
        &self.dependencies
    }

    pub fn optional_dependencies(&self) -> &BTreeMap<String, String> {
        &self.optional_dependencies
    }

    pub fn disabled_by_default(&self) -> bool {
        self.disabled_by_default
    }

    pub fn set_disabled_by_default(&mut self, disabled: bool) -> &mut Self {
        self.disabled_by_default = disabled;
        self
    }

    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    pub fn set_main<S: Into<String>>(&mut self, main: S) -> &mut Self {
        self.main = Some(main.into());
        self
    }

    pub fn includes_asset_pack(&self) -> bool {
        self.includes_asset_pack
    }

    pub fn set_includes_asset_pack(&mut self, includes: bool) -> &mut Self {
        self.includes_asset_pack = includes;
        self
    }

    /// Use `project_version` when the pack version is blank or unset
    pub fn resolve_defaults(&mut self, project_version: &str) -> &mut Self {
        if is_blank(self.version.as_deref()) {
            debug!("Using project version '{project_version}' for pack version");
            self.version = Some(project_version.to_string());
        }

        self
    }

    pub fn with_project_version(mut self, project_version: &str) -> Self {
        self.resolve_defaults(project_version);
        self
    }

    pub fn add_author<S: Into<String>>(
        &mut self,
        name: S,
        email: Option<String>,
        url: Option<String>
    ) -> Result<&Author> {
        let author = Author::new(name, email, url)?;
        Ok(self.push_author(author))
    }

    /// Configure a new author in `configure`, appended only when the name is not blank
    pub fn author<F>(&mut self, configure: F) -> Result<&Author>
        where F: FnOnce(&mut AuthorBuilder)
    {
        let mut builder = AuthorBuilder::new();
        configure(&mut builder);

        let author = builder.build()?;
        Ok(self.push_author(author))
    }

    pub fn push_author(&mut self, author: Author) -> &Author {
        self.authors.push(author);
        &self.authors[self.authors.len() - 1]
    }

    /// Insert or replace the constraint for `pack`
    pub fn add_dependency<K, V>(&mut self, pack: K, constraint: V) -> &mut Self
        where K: Into<String>, V: Into<String>
    {
        self.dependencies.insert(pack.into(), constraint.into());
        self
    }

    pub fn add_dependency_any<K: Into<String>>(&mut self, pack: K) -> &mut Self {
        self.add_dependency(pack, ANY_VERSION)
    }

    pub fn add_optional_dependency<K, V>(&mut self, pack: K, constraint: V) -> &mut Self
        where K: Into<String>, V: Into<String>
    {
        self.optional_dependencies.insert(pack.into(), constraint.into());
        self
    }

    pub fn add_optional_dependency_any<K: Into<String>>(&mut self, pack: K) -> &mut Self {
        self.add_optional_dependency(pack, ANY_VERSION)
    }

    /// Messages for each missing required field, empty when valid
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if is_blank(self.group.as_deref()) {
            errors.push("group is required".to_string());
        }

        if is_blank(self.name.as_deref()) {
            errors.push("name is required".to_string());
        }

        if is_blank(self.version.as_deref()) {
            errors.push("version is required".to_string());
        }

        if is_blank(self.description.as_deref()) {
            errors.push("description is required".to_string());
        }

        if self.authors.is_empty() {
            errors.push("at least one author is required".to_string());
        }

        if is_blank(Some(self.server_version())) {
            errors.push("server version is required".to_string());
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Advisory notes about values the server may not understand, never fatal
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(website) = self.website() {
            if Url::parse(website).is_err() {
                warnings.push(format!("website '{website}' is not an absolute URL"));
            }
        }

        for author in &self.authors {
            if let Some(url) = author.url() {
                if Url::parse(url).is_err() {
                    warnings.push(format!("author '{}' url '{url}' is not an absolute URL", author.name()));
                }
            }
        }

        if VersionReq::parse(self.server_version()).is_err() {
            warnings.push(format!("server version '{}' is not a version range", self.server_version()));
        }

        let constraints = self.dependencies.iter()
            .chain(self.optional_dependencies.iter());

        for (pack, constraint) in constraints {
            if VersionReq::parse(constraint).is_err() {
                warnings.push(format!("dependency '{pack}' constraint '{constraint}' is not a version range"));
            }
        }

        warnings
    }

    pub fn to_manifest(&self) -> PackManifest {
        PackManifest::from(self)
    }

    /// Manifest fields keyed by label, in file order
    pub fn to_document(&self) -> Result<Map<String, Value>> {
        let value = serde_json::to_value(self.to_manifest())?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_text(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&self.to_manifest())?;
        json.push('\n');
        Ok(json)
    }

    /// Write manifest json to `manifest_path`, creating parent directories
    pub fn write_to(&self, manifest_path: &Path) -> Result<()> {
        let json = self.to_text()?;

        debug!("Writing manifest to {}", manifest_path.display());
        crate::fs::write_file(manifest_path, json)?;

        Ok(())
    }
}

impl From<&ManifestConfig> for PackManifest {
    fn from(config: &ManifestConfig) -> Self {
        PackManifest {
            group: config.group().to_string(),
            name: config.name().to_string(),
            version: config.version().to_string(),
            description: config.description().to_string(),
            authors: config.authors.iter().map(PackAuthor::from).collect(),
            server_version: config.server_version().to_string(),
            website: config.website.clone(),
            dependencies: config.dependencies.clone(),
            optional_dependencies: config.optional_dependencies.clone(),
            disabled_by_default: config.disabled_by_default,
            main: config.main.clone(),
            includes_asset_pack: config.includes_asset_pack
        }
    }
}

impl From<&Author> for PackAuthor {
    fn from(author: &Author) -> Self {
        PackAuthor {
            name: author.name().to_string(),
            email: author.email().map(String::from),
            url: author.url().map(String::from)
        }
    }
}

impl TryFrom<PackManifest> for ManifestConfig {
    type Error = Error;

    fn try_from(manifest: PackManifest) -> Result<Self> {
        let authors = manifest.authors.into_iter()
            .map(|a| Author::new(a.name, a.email, a.url))
            .collect::<Result<Vec<_>>>()?;

        Ok(ManifestConfig {
            group: Some(manifest.group),
            name: Some(manifest.name),
            version: Some(manifest.version),
            description: Some(manifest.description),
            authors,
            website: manifest.website,
            server_version: Some(manifest.server_version),
            dependencies: manifest.dependencies,
            optional_dependencies: manifest.optional_dependencies,
            disabled_by_default: manifest.disabled_by_default,
            main: manifest.main,
            includes_asset_pack: manifest.includes_asset_pack
        })
    }
}
