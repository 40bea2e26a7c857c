use std::{
    io::{stdin, stdout},
    process::ExitCode,
};

use debt_ledger::{app, config::Config};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    tracing::info!(data_dir = %config.data_dir.display(), "debt ledger starting");

    match app::run(config, stdin().lock(), stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "debt ledger stopped");
            ExitCode::FAILURE
        }
    }
}
