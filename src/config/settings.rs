use crate::utils::error::{NotifierError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "review.openstack.org";
pub const DEFAULT_PORT: u16 = 29418;
pub const DEFAULT_SSH_PROGRAM: &str = "ssh";
pub const DEFAULT_LIAISONS_FILE: &str = "doc/source/liaisons.json";

/// Layout of an optional settings file:
///
/// ```toml
/// [gerrit]
/// host = "review.openstack.org"
/// port = 29418
/// ssh_program = "ssh"
/// liaisons_file = "doc/source/liaisons.json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub gerrit: GerritSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GerritSettings {
    pub host: String,
    pub port: u16,
    pub ssh_program: String,
    pub liaisons_file: PathBuf,
}

impl Default for GerritSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ssh_program: DEFAULT_SSH_PROGRAM.to_string(),
            liaisons_file: PathBuf::from(DEFAULT_LIAISONS_FILE),
        }
    }
}

/// Command line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub liaisons_file: Option<PathBuf>,
}

impl GerritSettings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| NotifierError::SettingsFileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content).map_err(|source| NotifierError::SettingsFileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let file: SettingsFile = toml::from_str(content)?;
        Ok(file.gerrit)
    }

    /// Defaults, then the settings file if one is given, then CLI overrides.
    pub fn resolve(config_file: Option<&Path>, overrides: SettingsOverrides) -> Result<Self> {
        let base = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.apply_overrides(overrides))
    }

    pub fn apply_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(liaisons_file) = overrides.liaisons_file {
            self.liaisons_file = liaisons_file;
        }
        self
    }

    pub fn destination(&self, username: &str) -> String {
        format!("{}@{}", username, self.host)
    }
}

impl Validate for GerritSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_non_empty_string("ssh_program", &self.ssh_program)?;
        validate_path("liaisons_file", &self.liaisons_file.to_string_lossy())?;
        Ok(())
    }
}
