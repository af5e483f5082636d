use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Failed to read liaisons file {}: {source}", .path.display())]
    LiaisonsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse liaisons file {}: {source}", .path.display())]
    LiaisonsFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read settings file {}: {source}", .path.display())]
    SettingsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {}: {source}", .path.display())]
    SettingsFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Remote command exited with {}: {command}", describe_code(.code))]
    RemoteFailed { command: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Local input or settings are missing, malformed, or rejected.
    Configuration,
    /// The remote shell could not be started or reported failure.
    RemoteInvocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl NotifierError {
    pub fn invalid_value(field: &str, value: &str, reason: impl Into<String>) -> Self {
        NotifierError::InvalidConfigValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            NotifierError::LiaisonsFileRead { .. }
            | NotifierError::LiaisonsFileParse { .. }
            | NotifierError::SettingsFileRead { .. }
            | NotifierError::SettingsFileParse { .. }
            | NotifierError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            NotifierError::Spawn { .. } | NotifierError::RemoteFailed { .. } => {
                ErrorCategory::RemoteInvocation
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::RemoteInvocation => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::RemoteInvocation => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NotifierError::LiaisonsFileRead { path, .. } => {
                format!("Could not open the liaisons list at {}", path.display())
            }
            NotifierError::LiaisonsFileParse { path, source } => format!(
                "The liaisons list at {} is not valid: {}",
                path.display(),
                source
            ),
            NotifierError::SettingsFileRead { path, .. } => {
                format!("Could not open the settings file at {}", path.display())
            }
            NotifierError::SettingsFileParse { path, source } => format!(
                "The settings file at {} is not valid TOML: {}",
                path.display(),
                source
            ),
            NotifierError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            NotifierError::Spawn { program, .. } => {
                format!("Could not run '{}'", program)
            }
            NotifierError::RemoteFailed { code, .. } => {
                format!("Gerrit did not accept the reviewers ({})", describe_code(code))
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NotifierError::LiaisonsFileRead { .. } => {
                "Run from the repository root or pass --liaisons-file"
            }
            NotifierError::LiaisonsFileParse { .. } => {
                "Check that the file is JSON of the form {\"liaisons\": [{\"name\": ...}]}"
            }
            NotifierError::SettingsFileRead { .. } => "Check the path given to --config",
            NotifierError::SettingsFileParse { .. } => {
                "Check the [gerrit] table in the settings file"
            }
            NotifierError::InvalidConfigValue { .. } => "Check the command line arguments",
            NotifierError::Spawn { .. } => "Make sure an ssh client is installed and on PATH",
            NotifierError::RemoteFailed { .. } => {
                "Check your Gerrit username, ssh key, and the review number"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifierError>;
