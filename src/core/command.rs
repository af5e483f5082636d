use crate::config::settings::GerritSettings;
use crate::domain::model::{LiaisonList, RemoteCommand};

const GERRIT_SUBCOMMAND: [&str; 2] = ["gerrit", "set-reviewers"];

/// Builds `ssh -p <port> <user>@<host> gerrit set-reviewers --add "<name>"... <review>`.
///
/// Each `--add "<name>"` is a single token. ssh joins the tokens into one
/// command line and the Gerrit shell splits it again, so the quotes keep
/// names with spaces together on the remote side.
pub fn build_set_reviewers(
    settings: &GerritSettings,
    username: &str,
    liaisons: &LiaisonList,
    review: &str,
) -> RemoteCommand {
    let mut args = Vec::with_capacity(liaisons.len() + 6);
    args.push("-p".to_string());
    args.push(settings.port.to_string());
    args.push(settings.destination(username));
    args.extend(GERRIT_SUBCOMMAND.iter().map(|s| s.to_string()));

    for name in liaisons.names() {
        args.push(format!("--add \"{}\"", name));
    }

    args.push(review.to_string());

    RemoteCommand::new(settings.ssh_program.clone(), args)
}
