// Adapters layer: concrete implementations of the domain ports (file, process, logging).

pub mod json_file;
pub mod process;

use crate::domain::ports::DiagnosticSink;

pub use json_file::JsonFileLiaisonSource;
pub use process::ProcessCommandRunner;

/// Forwards diagnostics to the `tracing` subscriber at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}
