use crate::config::settings::{GerritSettings, SettingsOverrides};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "add-reviewers")]
#[command(
    about = "Add the cross-project liaisons as reviewers on an API Special Interest Group review."
)]
pub struct CliConfig {
    /// Your Gerrit username
    pub username: String,

    /// An API-SIG Gerrit review
    pub review: String,

    #[arg(long, help = "Print debugging information")]
    pub debug: bool,

    /// Path to the liaisons JSON document [default: doc/source/liaisons.json]
    #[arg(long)]
    pub liaisons_file: Option<PathBuf>,

    /// Optional TOML settings file with a [gerrit] table
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Gerrit host [default: review.openstack.org]
    #[arg(long)]
    pub host: Option<String>,

    /// Gerrit ssh port [default: 29418]
    #[arg(long)]
    pub port: Option<u16>,

    /// Show the command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Exit non-zero when the remote call fails
    #[arg(long)]
    pub strict: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            host: self.host.clone(),
            port: self.port,
            liaisons_file: self.liaisons_file.clone(),
        }
    }

    pub fn settings(&self) -> Result<GerritSettings> {
        let settings = GerritSettings::resolve(self.config.as_deref(), self.overrides())?;
        settings.validate()?;
        Ok(settings)
    }
}
