pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonFileLiaisonSource, ProcessCommandRunner, TracingDiagnostics};
pub use config::{GerritSettings, SettingsOverrides};
pub use crate::core::notifier::{NotifyOptions, ReviewerNotifier};
pub use utils::error::{NotifierError, Result};
