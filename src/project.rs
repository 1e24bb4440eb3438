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

use std::{fs, path::{Path, PathBuf}};
use tracing::info;

use crate::{
    env::{CONFIG_FILE, MANIFEST_FILE},
    json::PackConfig,
    Error, ManifestConfig, Result
};

pub struct PackProject {
    pub config: PackConfig,

    /// Absolute path of the project directory
    pub dir: PathBuf
}

impl PackProject {
    fn write_config(&self) -> Result<()> {
        let config_json = serde_json::to_string_pretty(&self.config)?;
        Ok(fs::write(self.config_path(), config_json)?)
    }

    fn new(project_dir: &Path, config: PackConfig) -> Result<Self> {
        Ok(Self {
            dir: fs::canonicalize(project_dir)?,
            config
        })
    }

    pub fn exists(project_dir: &Path) -> bool {
        if !project_dir.exists() || !project_dir.is_dir() {
            return false;
        }

        project_dir.join(CONFIG_FILE).exists()
    }

    pub fn create(project_dir: &Path, config: PackConfig) -> Result<Self> {
        if Self::exists(project_dir) {
            return Err(Error::ProjectExists(project_dir.display().to_string()));
        }

        // create directory to contain project
        fs::create_dir_all(project_dir)?;

        let project = Self::new(project_dir, config)?;
        project.write_config()?;

        info!("Created pack config {}", project.config_path().display());

        Ok(project)
    }

    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Err(Error::ProjectNotFound(project_dir.display().to_string()));
        }

        let json = fs::read_to_string(config_path)?;
        let config = serde_json::from_str::<PackConfig>(json.as_str())?;

        Self::new(project_dir, config)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(self.config.output_dir()).join(MANIFEST_FILE)
    }

    /// Manifest config with the pack version falling back to `project_version`
    pub fn manifest_config(&self, project_version: Option<&str>) -> Result<ManifestConfig> {
        let config = self.config.to_manifest_config()?;

        Ok(match project_version {
            Some(version) => config.with_project_version(version),
            None => config
        })
    }

    /// Validate and write `config` as the project manifest, returns the path of the written file
    pub fn generate(&self, config: &ManifestConfig) -> Result<PathBuf> {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(Error::InvalidManifest(errors));
        }

        let manifest_path = self.manifest_path();
        config.write_to(&manifest_path)?;

        info!(
            "Generated manifest for {group}:{name} {version}",
            group = config.group(),
            name = config.name(),
            version = config.version()
        );

        Ok(manifest_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{ConfigAuthor, PackManifest};

    fn pack_config() -> PackConfig {
        PackConfig {
            group: "Acme".to_string(),
            name: "Tools".to_string(),
            description: "x".to_string(),
            authors: vec![ConfigAuthor { name: "Dev".to_string(), ..Default::default() }],
            ..Default::default()
        }
    }

    #[test]
    fn create_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let project_dir = dir.path().join("pack");

        assert!(!PackProject::exists(&project_dir));
        PackProject::create(&project_dir, pack_config()).unwrap();
        assert!(PackProject::exists(&project_dir));

        let project = PackProject::load(&project_dir).unwrap();
        assert_eq!(project.config.group, "Acme");
        assert_eq!(project.config.authors.len(), 1);
    }

    #[test]
    fn create_twice() {
        let dir = tempfile::tempdir().unwrap();

        PackProject::create(dir.path(), pack_config()).unwrap();
        let result = PackProject::create(dir.path(), pack_config());

        assert!(matches!(result, Err(Error::ProjectExists(_))));
    }

    #[test]
    fn load_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(PackProject::load(dir.path()), Err(Error::ProjectNotFound(_))));
    }

    #[test]
    fn generate_with_project_version() {
        let dir = tempfile::tempdir().unwrap();
        let project = PackProject::create(dir.path(), pack_config()).unwrap();

        let config = project.manifest_config(Some("0.3.0")).unwrap();
        let manifest_path = project.generate(&config).unwrap();
        assert_eq!(manifest_path, project.dir.join("build/resources/main/manifest.json"));

        let manifest = PackManifest::load(&manifest_path).unwrap();
        assert_eq!(manifest.version, "0.3.0");
        assert_eq!(manifest.server_version, "*");
    }

    #[test]
    fn generate_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let project = PackProject::create(dir.path(), pack_config()).unwrap();

        let config = project.manifest_config(None).unwrap();

        match project.generate(&config) {
            Err(Error::InvalidManifest(errors)) => assert_eq!(errors, vec!["version is required"]),
            _ => panic!("expected invalid manifest")
        }

        assert!(!project.manifest_path().exists());
    }

    #[test]
    fn config_version_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = pack_config();
        config.version = Some("1.0.0".to_string());
        config.output_dir = Some("out".to_string());

        let project = PackProject::create(dir.path(), config).unwrap();
        let config = project.manifest_config(Some("0.3.0")).unwrap();
        let manifest_path = project.generate(&config).unwrap();

        assert_eq!(manifest_path, project.dir.join("out").join("manifest.json"));
        assert_eq!(PackManifest::load(&manifest_path).unwrap().version, "1.0.0");
    }
}
