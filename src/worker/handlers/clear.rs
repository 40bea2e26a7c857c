use crate::{
    common::error::AppError,
    worker::{handlers::args, tracker::DebtTracker},
};

pub const USAGE: &str = "clear <debtor> <creditor>";

pub fn handle(tracker: &mut DebtTracker, argv: &[&str]) -> Result<String, AppError> {
    args::expect_count(argv, 2, 2, USAGE)?;
    let debtor = args::user(argv[0])?;
    let creditor = args::user(argv[1])?;

    Ok(match tracker.clear(debtor, creditor) {
        Some(amount) => format!(
            "Cleared {}'s debt of **{amount}** to {}.",
            debtor.mention(),
            creditor.mention()
        ),
        None => "No outstanding debt to clear.".to_string(),
    })
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
    fn clears_only_the_named_direction() {
        let dir = tempfile::tempdir().unwrap();
        let mut tracker = DebtTracker::with_clock(TransactionLog::new(dir.path()), april);
        tracker
            .add(UserId::new(1), UserId::new(2), Amount::new(6))
            .unwrap();

        // wrong direction: nothing owed that way
        assert_eq!(
            handle(&mut tracker, &["2", "1"]).unwrap(),
            "No outstanding debt to clear."
        );
        assert_eq!(
            handle(&mut tracker, &["1", "2"]).unwrap(),
            "Cleared <@1>'s debt of **6** to <@2>."
        );
        assert!(tracker.ledger().is_empty());
    }
}
