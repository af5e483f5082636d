use crate::domain::model::{RemoteCommand, RemoteOutcome};
use crate::domain::ports::CommandRunner;
use crate::utils::error::{NotifierError, Result};
use std::process::Command;

/// Spawns the command as a child process and waits for it.
///
/// stdin, stdout and stderr are inherited so ssh can prompt for a passphrase
/// and Gerrit's own messages reach the terminal. No timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, command: &RemoteCommand) -> Result<RemoteOutcome> {
        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|source| NotifierError::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        Ok(RemoteOutcome::Exited {
            code: status.code(),
        })
    }
}
