use crate::{
    common::error::AppError,
    worker::{
        handlers::{add, clear, summary},
        tracker::DebtTracker,
    },
};

pub fn handle(_tracker: &mut DebtTracker, _argv: &[&str]) -> Result<String, AppError> {
    Ok([
        "Commands (users are ids or <@id> mentions):".to_string(),
        format!("  {}  record that debtor owes creditor", add::USAGE),
        format!("  {}  list outstanding debts", summary::USAGE),
        format!("  {}  reset one debt without logging it", clear::USAGE),
        "  help  show this message".to_string(),
    ]
    .join("\n"))
}
