use crate::domain::model::{LiaisonsDocument, RemoteCommand, RemoteOutcome};
use crate::utils::error::Result;

/// Supplies the liaisons document.
pub trait LiaisonSource {
    fn load(&self) -> Result<LiaisonsDocument>;
}

/// Runs an external command to completion.
///
/// A spawn failure is returned as an error; a non-zero exit is not, it is
/// reported through [`RemoteOutcome`] and left to the caller to judge.
pub trait CommandRunner {
    fn run(&self, command: &RemoteCommand) -> Result<RemoteOutcome>;
}

/// Receives diagnostic lines such as the assembled command.
pub trait DiagnosticSink {
    fn debug(&self, message: &str);
}
