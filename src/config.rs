//! Configuration of the command line tool.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::tense::Tense;
use crate::Dirs;

/// A configuration used for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Text shown in place of a form which doesn't exist.
    pub placeholder: String,
    /// Tenses to render, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tenses: Vec<Tense>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: String::from("-"),
            tenses: Tense::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Otherwise the file in the configuration
    /// directory of the current user is used if present, and defaults if not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }

        let dirs = match Dirs::open() {
            Ok(dirs) => dirs,
            Err(error) => {
                tracing::debug!(%error, "Using default configuration");
                return Ok(Self::default());
            }
        };

        let config_path = dirs.config_path();

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No configuration file");
            return Ok(Self::default());
        }

        Self::from_path(&config_path)
    }

    /// Read configuration from the given file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).with_context(|| anyhow!("{}", path.display()))?;
        let config = toml::from_str(&data).with_context(|| anyhow!("{}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// The tenses to render. An empty list means every tense.
    pub fn tenses(&self) -> &[Tense] {
        if self.tenses.is_empty() {
            &Tense::ALL
        } else {
            &self.tenses
        }
    }
}

#[test]
fn parse_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.placeholder, "-");
    assert_eq!(config.tenses(), Tense::ALL);

    let config: Config = toml::from_str(
        r#"
        placeholder = "…"
        tenses = ["simple-past", "present"]
        "#,
    )
    .unwrap();

    assert_eq!(config.placeholder, "…");
    assert_eq!(config.tenses(), [Tense::SimplePast, Tense::Present]);

    let config: Config = toml::from_str("tenses = []").unwrap();
    assert_eq!(config.tenses(), Tense::ALL);

    assert!(toml::from_str::<Config>(r#"tenses = ["pluperfect"]"#).is_err());
}

#[test]
fn explicit_path_must_exist() {
    let path = Path::new("this/path/does/not/exist/config.toml");
    assert!(Config::load(Some(path)).is_err());
}
