use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level shape of the liaisons JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiaisonsDocument {
    pub liaisons: Vec<Liaison>,
}

/// One entry of the `liaisons` array. Fields other than `name` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Liaison {
    #[serde(default)]
    pub name: Option<String>,
}

impl Liaison {
    /// The name to add as a reviewer. A missing key, `null` and `""` all yield `None`.
    pub fn reviewer_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some("") | None => None,
            Some(name) => Some(name),
        }
    }
}

/// Reviewer names in document order, with unnamed entries dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiaisonList {
    names: Vec<String>,
}

impl LiaisonList {
    pub fn from_document(document: &LiaisonsDocument) -> Self {
        let names = document
            .liaisons
            .iter()
            .filter_map(Liaison::reviewer_name)
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<String>> for LiaisonList {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

/// A fully assembled external command: program plus argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    program: String,
    args: Vec<String>,
}

impl RemoteCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What happened to the remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// The process ran and exited; `None` when it was killed by a signal.
    Exited { code: Option<i32> },
    /// The process could not be started.
    NotStarted,
    /// Dry run, nothing was spawned.
    Skipped,
}

impl RemoteOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, RemoteOutcome::Exited { code: Some(0) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifySummary {
    pub added: usize,
    pub review: String,
    pub outcome: RemoteOutcome,
}

impl fmt::Display for NotifySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added {} reviewers to {}", self.added, self.review)
    }
}
