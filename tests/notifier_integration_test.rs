use add_reviewers::core::{CommandRunner, DiagnosticSink, RemoteCommand, RemoteOutcome};
use add_reviewers::{
    GerritSettings, JsonFileLiaisonSource, NotifierError, NotifyOptions, ReviewerNotifier,
};
use anyhow::Result;
use std::cell::RefCell;
use std::path::Path;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingRunner {
    commands: RefCell<Vec<String>>,
}

impl CommandRunner for &RecordingRunner {
    fn run(&self, command: &RemoteCommand) -> add_reviewers::Result<RemoteOutcome> {
        self.commands.borrow_mut().push(command.to_string());
        Ok(RemoteOutcome::Exited { code: Some(0) })
    }
}

#[derive(Default)]
struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl DiagnosticSink for &RecordingSink {
    fn debug(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

fn write_liaisons(dir: &Path, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.join("liaisons.json");
    std::fs::write(&path, content)?;
    Ok(path)
}

const SAMPLE: &str = r#"{
    "liaisons": [
        {"project": "Nova", "name": "alice", "email": "alice@example.org"},
        {"project": "Glance", "name": null},
        {"project": "Cinder", "name": ""},
        {"project": "Neutron", "name": "bob"}
    ]
}"#;

#[test]
fn test_named_liaisons_are_added_in_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_liaisons(temp_dir.path(), SAMPLE)?;

    let runner = RecordingRunner::default();
    let sink = RecordingSink::default();
    let notifier = ReviewerNotifier::new(
        JsonFileLiaisonSource::new(path),
        &runner,
        &sink,
        GerritSettings::default(),
        NotifyOptions::default(),
    );

    let summary = notifier.run("operator", "567890")?;
    assert_eq!(summary.to_string(), "Added 2 reviewers to 567890");

    let commands = runner.commands.borrow();
    assert_eq!(commands.len(), 1);
    assert_eq!(
        commands[0],
        "ssh -p 29418 operator@review.openstack.org gerrit set-reviewers --add \"alice\" --add \"bob\" 567890"
    );
    assert!(sink.lines.borrow().is_empty());
    Ok(())
}

#[test]
fn test_debug_line_matches_executed_command() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_liaisons(temp_dir.path(), SAMPLE)?;

    let runner = RecordingRunner::default();
    let sink = RecordingSink::default();
    let options = NotifyOptions {
        debug: true,
        ..NotifyOptions::default()
    };
    let notifier = ReviewerNotifier::new(
        JsonFileLiaisonSource::new(path),
        &runner,
        &sink,
        GerritSettings::default(),
        options,
    );

    notifier.run("operator", "567890")?;
    assert_eq!(*sink.lines.borrow(), *runner.commands.borrow());
    Ok(())
}

#[test]
fn test_repeated_runs_build_identical_commands() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_liaisons(temp_dir.path(), SAMPLE)?;

    let runner = RecordingRunner::default();
    let sink = RecordingSink::default();
    let notifier = ReviewerNotifier::new(
        JsonFileLiaisonSource::new(path),
        &runner,
        &sink,
        GerritSettings::default(),
        NotifyOptions::default(),
    );

    notifier.run("operator", "567890")?;
    notifier.run("operator", "567890")?;

    let commands = runner.commands.borrow();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].as_bytes(), commands[1].as_bytes());
    Ok(())
}

#[test]
fn test_custom_host_and_port() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_liaisons(temp_dir.path(), r#"{"liaisons": [{"name": "Carol Jones"}]}"#)?;

    let settings = GerritSettings::from_toml_str(
        r#"
[gerrit]
host = "review.example.org"
port = 2222
"#,
    )?;

    let runner = RecordingRunner::default();
    let sink = RecordingSink::default();
    let notifier = ReviewerNotifier::new(
        JsonFileLiaisonSource::new(path),
        &runner,
        &sink,
        settings,
        NotifyOptions::default(),
    );

    notifier.run("operator", "1")?;
    assert_eq!(
        runner.commands.borrow()[0],
        "ssh -p 2222 operator@review.example.org gerrit set-reviewers --add \"Carol Jones\" 1"
    );
    Ok(())
}

#[test]
fn test_malformed_file_skips_remote_call() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_liaisons(temp_dir.path(), "not json")?;

    let runner = RecordingRunner::default();
    let sink = RecordingSink::default();
    let notifier = ReviewerNotifier::new(
        JsonFileLiaisonSource::new(path),
        &runner,
        &sink,
        GerritSettings::default(),
        NotifyOptions::default(),
    );

    let err = notifier.run("operator", "1").unwrap_err();
    assert!(matches!(err, NotifierError::LiaisonsFileParse { .. }));
    assert!(runner.commands.borrow().is_empty());
    Ok(())
}

#[test]
fn test_empty_list_adds_nobody() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_liaisons(temp_dir.path(), r#"{"liaisons": []}"#)?;

    let runner = RecordingRunner::default();
    let sink = RecordingSink::default();
    let notifier = ReviewerNotifier::new(
        JsonFileLiaisonSource::new(path),
        &runner,
        &sink,
        GerritSettings::default(),
        NotifyOptions::default(),
    );

    let summary = notifier.run("operator", "1")?;
    assert_eq!(summary.added, 0);
    assert_eq!(
        runner.commands.borrow()[0],
        "ssh -p 29418 operator@review.openstack.org gerrit set-reviewers 1"
    );
    Ok(())
}
