use std::io::{BufRead, Write};

use tracing::{error, info, warn};

use crate::{
    common::error::AppError,
    config::Config,
    io::journal::TransactionLog,
    worker::{processor::Processor, tracker::DebtTracker},
};

/// Runs the command shell: replays this month's segment (unless disabled),
/// then answers one command per input line until EOF.
pub fn run<R, W>(config: Config, input: R, output: W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let tracker = DebtTracker::new(TransactionLog::new(&config.data_dir));
    run_with(tracker, config.replay, input, output)
}

pub fn run_with<R, W>(
    mut tracker: DebtTracker,
    replay: bool,
    input: R,
    mut output: W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    if replay {
        match tracker.replay_current_month() {
            Ok(records) => info!(records, "ledger restored"),
            Err(e) => error!(error = %e, "replay aborted, continuing with partial ledger"),
        }
    }

    let processor = Processor::with_default_commands();

    for line in input.lines() {
        let line = line?;
        let reply = match processor.process(&mut tracker, &line) {
            Ok(Some(reply)) => reply,
            Ok(None) => continue,
            Err(e) if e.is_user_error() => {
                warn!(command = line.trim(), error = %e, "command rejected");
                e.to_string()
            }
            Err(e) => format!("could not record that: {e}"),
        };
        writeln!(output, "{reply}")?;
        output.flush()?;
    }

    Ok(())
}
