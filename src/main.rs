use add_reviewers::utils::logger;
use add_reviewers::{
    CliConfig, JsonFileLiaisonSource, NotifierError, NotifyOptions, ProcessCommandRunner,
    ReviewerNotifier, TracingDiagnostics,
};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.debug);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "{} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), NotifierError> {
    let settings = config.settings()?;

    let source = JsonFileLiaisonSource::new(settings.liaisons_file.clone());
    let options = NotifyOptions {
        debug: config.debug,
        dry_run: config.dry_run,
        strict: config.strict,
    };
    let notifier = ReviewerNotifier::new(
        source,
        ProcessCommandRunner,
        TracingDiagnostics,
        settings,
        options,
    );

    let summary = notifier.run(&config.username, &config.review)?;
    println!("{}", summary);
    Ok(())
}
