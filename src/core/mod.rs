pub mod command;
pub mod notifier;

pub use crate::domain::model::{LiaisonList, NotifySummary, RemoteCommand, RemoteOutcome};
pub use crate::domain::ports::{CommandRunner, DiagnosticSink, LiaisonSource};
pub use crate::utils::error::Result;
