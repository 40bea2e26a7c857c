use std::collections::HashMap;

use crate::{
    common::error::AppError,
    worker::{
        handlers::{add, clear, help, summary},
        tracker::DebtTracker,
    },
};

/// A command handler: receives the arguments after the command name and
/// returns the reply text.
pub type Handler = fn(&mut DebtTracker, &[&str]) -> Result<String, AppError>;

/// Command-name to handler table; the `/debt` command group.
#[derive(Debug, Default)]
pub struct Processor {
    commands: HashMap<&'static str, Handler>,
}

impl Processor {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn with_default_commands() -> Self {
        let mut processor = Self::new();
        processor.register("add", add::handle);
        processor.register("summary", summary::handle);
        processor.register("clear", clear::handle);
        processor.register("help", help::handle);
        processor
    }

    pub fn register(&mut self, name: &'static str, handler: Handler) {
        self.commands.insert(name, handler);
    }

    /// Dispatches one input line. Blank lines yield `Ok(None)`. A leading
    /// `debt` or `/debt` group prefix is accepted and ignored.
    pub fn process(
        &self,
        tracker: &mut DebtTracker,
        line: &str,
    ) -> Result<Option<String>, AppError> {
        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        if matches!(tokens.first(), Some(&"debt") | Some(&"/debt")) {
            tokens.remove(0);
        }
        let Some((name, argv)) = tokens.split_first() else {
            return Ok(None);
        };

        let handler = self
            .commands
            .get(name.to_ascii_lowercase().as_str())
            .ok_or_else(|| AppError::UnknownCommand(name.to_string()))?;

        handler(tracker, argv).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::io::journal::TransactionLog;

    fn april() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn dispatches_by_name_with_optional_group_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = DebtTracker::with_clock(TransactionLog::new(dir.path()), april);
        let processor = Processor::with_default_commands();

        processor.process(&mut tracker, "add 1 2 30").unwrap();
        processor.process(&mut tracker, "/debt ADD 2 1 10").unwrap();

        let reply = processor.process(&mut tracker, "debt summary").unwrap();
        assert_eq!(reply.as_deref(), Some("<@1> owes <@2> **20**"));
    }

    #[test]
    fn blank_lines_produce_no_reply() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = DebtTracker::with_clock(TransactionLog::new(dir.path()), april);
        let processor = Processor::with_default_commands();

        assert!(processor.process(&mut tracker, "   ").unwrap().is_none());
        assert!(processor.process(&mut tracker, "/debt").unwrap().is_none());
    }

    #[test]
    fn unknown_commands_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = DebtTracker::with_clock(TransactionLog::new(dir.path()), april);
        let processor = Processor::with_default_commands();

        let err = processor.process(&mut tracker, "forgive 1 2").unwrap_err();
        assert!(matches!(err, AppError::UnknownCommand(ref name) if name == "forgive"));
        assert!(err.is_user_error());
    }

    #[test]
    fn custom_handlers_can_be_registered() {
        fn ping(_: &mut DebtTracker, _: &[&str]) -> Result<String, AppError> {
            Ok("pong".to_string())
        }

        let dir = tempfile::tempdir().unwrap();
        let mut tracker = DebtTracker::with_clock(TransactionLog::new(dir.path()), april);
        let mut processor = Processor::new();
        processor.register("ping", ping);

        assert_eq!(
            processor.process(&mut tracker, "ping").unwrap().as_deref(),
            Some("pong")
        );
        assert!(processor.process(&mut tracker, "help").is_err());
    }
}
