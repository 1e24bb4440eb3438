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

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{ManifestConfig, Result};

pub const DEFAULT_OUTPUT_DIR: &str = "build/resources/main";

/// Pack config file kept in the project directory
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PackConfig {
    #[serde(default)]
    pub group: String,

    #[serde(default)]
    pub name: String,

    /// Optional pack version, falls back to the project version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub authors: Vec<ConfigAuthor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Optional server version range, defaults to "*"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_dependencies: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_by_default: Option<bool>,

    /// Optional plugin entry point class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes_asset_pack: Option<bool>,

    /// Optional manifest output directory, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfigAuthor {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>
}

impl PackConfig {
    /// Output directory with `~` and environment variables expanded
    pub fn output_dir(&self) -> String {
        let dir = self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR);
        shellexpand::full(dir)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| dir.to_string())
    }

    /// Build manifest config from this file, fails when an author name is blank
    pub fn to_manifest_config(&self) -> Result<ManifestConfig> {
        let mut config = ManifestConfig::new();

        config
            .set_group(&self.group)
            .set_name(&self.name)
            .set_description(&self.description)
            .set_disabled_by_default(self.disabled_by_default.unwrap_or(false))
            .set_includes_asset_pack(self.includes_asset_pack.unwrap_or(false));

        if let Some(version) = &self.version {
            config.set_version(version);
        }

        if let Some(server_version) = &self.server_version {
            config.set_server_version(server_version);
        }

        if let Some(website) = &self.website {
            config.set_website(website);
        }

        if let Some(main) = &self.main {
            config.set_main(main);
        }

        for author in &self.authors {
            config.author(|a| {
                a.name(&author.name);
                if let Some(email) = &author.email {
                    a.email(email);
                }
                if let Some(url) = &author.url {
                    a.url(url);
                }
            })?;
        }

        for (pack, constraint) in self.dependencies.iter().flatten() {
            config.add_dependency(pack, constraint);
        }

        for (pack, constraint) in self.optional_dependencies.iter().flatten() {
            config.add_optional_dependency(pack, constraint);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn parse(json: &str) -> PackConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn minimal_config_defaults() {
        let config = parse(r#"{
            "group": "Acme",
            "name": "Tools",
            "description": "x",
            "authors": [{"name": "Dev"}]
        }"#);

        let manifest = config.to_manifest_config().unwrap();
        assert_eq!(manifest.server_version(), "*");
        assert_eq!(manifest.version(), "");
        assert_eq!(manifest.website(), None);
        assert_eq!(manifest.authors().len(), 1);
        assert_eq!(config.output_dir(), DEFAULT_OUTPUT_DIR);
    }

    #[test]
    fn full_config() {
        let config = parse(r#"{
            "group": "Acme",
            "name": "Tools",
            "version": "2.0.0",
            "description": "x",
            "authors": [{"name": "Dev", "email": "dev@example.com", "url": "https://example.com"}],
            "website": "https://acme.example",
            "server_version": ">=1.0",
            "dependencies": {"Core": "1.2.0"},
            "optional_dependencies": {"Extras": "*"},
            "disabled_by_default": true,
            "main": "com.acme.ToolsPlugin",
            "includes_asset_pack": true,
            "output_dir": "out"
        }"#);

        let manifest = config.to_manifest_config().unwrap();
        assert_eq!(manifest.version(), "2.0.0");
        assert_eq!(manifest.server_version(), ">=1.0");
        assert_eq!(manifest.website(), Some("https://acme.example"));
        assert_eq!(manifest.main(), Some("com.acme.ToolsPlugin"));
        assert_eq!(manifest.dependencies().get("Core").map(String::as_str), Some("1.2.0"));
        assert_eq!(manifest.optional_dependencies().get("Extras").map(String::as_str), Some("*"));
        assert!(manifest.disabled_by_default());
        assert!(manifest.includes_asset_pack());
        assert_eq!(manifest.authors()[0].email(), Some("dev@example.com"));
        assert_eq!(config.output_dir(), "out");
    }

    #[test]
    fn blank_author_fails() {
        let config = parse(r#"{
            "group": "Acme",
            "name": "Tools",
            "description": "x",
            "authors": [{"name": "Dev"}, {"name": " "}]
        }"#);

        assert!(matches!(config.to_manifest_config(), Err(Error::BlankAuthorName)));
    }

    #[test]
    fn missing_required_keys_are_reported() {
        let config = parse(r#"{
            "name": "Tools",
            "authors": [{"name": "Dev"}]
        }"#);

        let manifest = config.to_manifest_config()
            .unwrap()
            .with_project_version("1.0.0");

        assert_eq!(manifest.validate(), vec!["group is required", "description is required"]);
    }

    #[test]
    fn author_without_name() {
        let config = parse(r#"{"authors": [{"email": "dev@example.com"}]}"#);
        assert!(matches!(config.to_manifest_config(), Err(Error::BlankAuthorName)));
    }
}
