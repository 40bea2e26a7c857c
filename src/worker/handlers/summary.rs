use crate::{
    common::error::AppError,
    worker::{handlers::args, tracker::DebtTracker},
};

pub const USAGE: &str = "summary [user]";

pub fn handle(tracker: &mut DebtTracker, argv: &[&str]) -> Result<String, AppError> {
    args::expect_count(argv, 0, 1, USAGE)?;
    let user = argv.first().map(|arg| args::user(arg)).transpose()?;

    let lines: Vec<String> = tracker
        .summary(user)
        .into_iter()
        .map(|edge| edge.to_string())
        .collect();

    if lines.is_empty() {
        return Ok("No debts recorded.".to_string());
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::handle;
    use crate::{
        common::{money::Amount, user::UserId},
        io::journal::TransactionLog,
        worker::tracker::DebtTracker,
    };

    fn april() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn lists_all_or_one_users_debts() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = DebtTracker::with_clock(TransactionLog::new(dir.path()), april);
        tracker
            .add(UserId::new(1), UserId::new(2), Amount::new(5))
            .unwrap();
        tracker
            .add(UserId::new(3), UserId::new(4), Amount::new(8))
            .unwrap();

        assert_eq!(
            handle(&mut tracker, &[]).unwrap(),
            "<@1> owes <@2> **5**\n<@3> owes <@4> **8**"
        );
        assert_eq!(handle(&mut tracker, &["<@4>"]).unwrap(), "<@3> owes <@4> **8**");
        assert_eq!(handle(&mut tracker, &["9"]).unwrap(), "No debts recorded.");
    }

    #[test]
    fn empty_ledger_says_so() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = DebtTracker::with_clock(TransactionLog::new(dir.path()), april);
        assert_eq!(handle(&mut tracker, &[]).unwrap(), "No debts recorded.");
    }
}
