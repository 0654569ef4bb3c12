use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Directories helper.
pub struct Dirs {
    project_dirs: ProjectDirs,
}

impl Dirs {
    /// Open directories for this project.
    pub fn open() -> Result<Dirs> {
        Ok(Dirs {
            project_dirs: ProjectDirs::from("", "", "conjugue")
                .context("Could not figure out base directories")?,
        })
    }

    /// Get the path of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.project_dirs.config_dir().join("config.toml")
    }
}
