use std::io::Write;

use crate::{
    common::{money::Amount, user::UserId},
    domain::transaction::TransactionRecord,
};

/// ISO-8601 local timestamp with microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(serde::Serialize)]
/// Internal CSV row representation of one log record.
///
/// Headers written (in this order): `timestamp,debtor_id,creditor_id,amount`.
struct LogRow {
    timestamp: String,
    debtor_id: UserId,
    creditor_id: UserId,
    amount: Amount,
}

/// Writes one transaction record as a CSV row.
///
/// Pass `with_header = true` for the first record of a fresh segment; the
/// header row is then written before it.
///
/// # Errors
///
/// Returns a `csv::Error` if serializing or flushing the row fails.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use debt_ledger::common::{money::Amount, user::UserId};
/// use debt_ledger::domain::transaction::TransactionRecord;
/// use debt_ledger::io::writer::write_record;
///
/// let at = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// let record = TransactionRecord::new(at, UserId::new(1), UserId::new(2), Amount::new(100));
///
/// let mut out = Vec::new();
/// write_record(&mut out, &record, true).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "timestamp,debtor_id,creditor_id,amount\n2024-04-05T09:30:00.000000,1,2,100\n");
/// ```
pub fn write_record<W: Write>(
    writer: W,
    record: &TransactionRecord,
    with_header: bool,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(writer);

    wtr.serialize(LogRow {
        timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        debtor_id: record.debtor,
        creditor_id: record.creditor,
        amount: record.amount,
    })?;

    wtr.flush()?;
    Ok(())
}
