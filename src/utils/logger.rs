use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` replaces the default filter, but `--debug` always enables
/// debug output for this crate on top of it.
pub fn cli_filter(env_filter: Option<EnvFilter>, debug: bool) -> EnvFilter {
    let filter = env_filter.unwrap_or_else(|| {
        if debug {
            EnvFilter::new("add_reviewers=debug,info")
        } else {
            EnvFilter::new("add_reviewers=info")
        }
    });

    if !debug {
        return filter;
    }
    match "add_reviewers=debug".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

pub fn init_cli_logger(debug: bool) {
    let filter = cli_filter(EnvFilter::try_from_default_env().ok(), debug);

    // stdout carries the summary line only
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .without_time()
                .compact(),
        )
        .init();
}
