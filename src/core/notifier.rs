use crate::config::settings::GerritSettings;
use crate::core::command::build_set_reviewers;
use crate::domain::model::{LiaisonList, NotifySummary, RemoteOutcome};
use crate::domain::ports::{CommandRunner, DiagnosticSink, LiaisonSource};
use crate::utils::error::{NotifierError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyOptions {
    /// Send the assembled command line to the diagnostic sink.
    pub debug: bool,
    /// Build and show the command, but do not run it.
    pub dry_run: bool,
    /// Treat a failed or unstartable remote call as an error.
    pub strict: bool,
}

pub struct ReviewerNotifier<S: LiaisonSource, R: CommandRunner, D: DiagnosticSink> {
    source: S,
    runner: R,
    diagnostics: D,
    settings: GerritSettings,
    options: NotifyOptions,
}

impl<S: LiaisonSource, R: CommandRunner, D: DiagnosticSink> ReviewerNotifier<S, R, D> {
    pub fn new(
        source: S,
        runner: R,
        diagnostics: D,
        settings: GerritSettings,
        options: NotifyOptions,
    ) -> Self {
        Self {
            source,
            runner,
            diagnostics,
            settings,
            options,
        }
    }

    /// Adds every named liaison as a reviewer on `review`.
    ///
    /// Unless `strict` is set, the remote exit status does not affect the
    /// result: the summary is returned whether or not Gerrit accepted the
    /// reviewers. Only a bad liaisons document fails the run.
    pub fn run(&self, username: &str, review: &str) -> Result<NotifySummary> {
        let document = self.source.load()?;
        let liaisons = LiaisonList::from_document(&document);
        tracing::debug!(
            "Loaded {} named liaisons out of {} entries",
            liaisons.len(),
            document.liaisons.len()
        );

        let command = build_set_reviewers(&self.settings, username, &liaisons, review);
        let command_line = command.to_string();

        if self.options.debug {
            self.diagnostics.debug(&command_line);
        }

        // a dry run always shows the command, with or without debug
        let outcome = if self.options.dry_run {
            tracing::info!("Dry run, not running: {}", command_line);
            RemoteOutcome::Skipped
        } else {
            match self.runner.run(&command) {
                Ok(outcome) => outcome,
                Err(e) if !self.options.strict => {
                    tracing::warn!("{}", e);
                    RemoteOutcome::NotStarted
                }
                Err(e) => return Err(e),
            }
        };

        match outcome {
            RemoteOutcome::Exited { code } if self.options.strict && !outcome.succeeded() => {
                return Err(NotifierError::RemoteFailed {
                    command: command_line,
                    code,
                });
            }
            RemoteOutcome::Exited { code } => {
                tracing::debug!("Remote command finished with exit code {:?}", code);
            }
            RemoteOutcome::NotStarted | RemoteOutcome::Skipped => {}
        }

        Ok(NotifySummary {
            added: liaisons.len(),
            review: review.to_string(),
            outcome,
        })
    }
}
