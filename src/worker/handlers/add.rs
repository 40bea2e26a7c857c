use crate::{
    common::error::AppError,
    worker::{handlers::args, tracker::DebtTracker},
};

pub const USAGE: &str = "add <debtor> <creditor> <amount>";

pub fn handle(tracker: &mut DebtTracker, argv: &[&str]) -> Result<String, AppError> {
    args::expect_count(argv, 3, 3, USAGE)?;
    let debtor = args::user(argv[0])?;
    let creditor = args::user(argv[1])?;
    let amount = args::amount(argv[2])?;

    tracker.add(debtor, creditor, amount)?;

    let mut lines = vec![
        format!(
            "Recorded: {} owes {} {amount}.",
            debtor.mention(),
            creditor.mention()
        ),
        String::new(),
        "**Updated balances:**".to_string(),
    ];
    let affected: Vec<String> = tracker
        .summary(None)
        .into_iter()
        .filter(|edge| edge.involves(debtor) || edge.involves(creditor))
        .map(|edge| edge.to_string())
        .collect();
    if affected.is_empty() {
        lines.push(format!(
            "{} and {} are all square.",
            debtor.mention(),
            creditor.mention()
        ));
    } else {
        lines.extend(affected);
    }

    Ok(lines.join("\n"))
}
