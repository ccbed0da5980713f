use crate::ports::outbound::ProjectStore;
use crate::shared::error::SourcingError;
use crate::shared::Result;
use crate::sourcing::domain::Project;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonProjectStore adapter persisting a project as a JSON file.
///
/// This adapter implements the ProjectStore port. The store is a plain
/// pretty-printed JSON document so project files stay reviewable and
/// diffable in version control.
pub struct JsonProjectStore {
    path: PathBuf,
}

impl JsonProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ProjectStore for JsonProjectStore {
    fn load(&self) -> Result<Project> {
        if !self.path.exists() {
            return Err(SourcingError::ProjectFileNotFound {
                path: self.path.clone(),
                suggestion: "Create one with 'bomsource init --name <project>'".to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            anyhow::anyhow!("Failed to read project file {}: {}", self.path.display(), e)
        })?;

        let project = serde_json::from_str(&content).map_err(|e| SourcingError::ProjectParseError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        Ok(project)
    }

    fn save(&self, project: &Project) -> Result<()> {
        let content = serde_json::to_string_pretty(project)?;
        fs::write(&self.path, content).map_err(|e| SourcingError::ProjectWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
