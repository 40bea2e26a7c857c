use std::io::Read;

use chrono::NaiveDateTime;

use crate::{
    common::{money::Amount, user::UserId},
    domain::transaction::TransactionRecord,
};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the segment headers.
struct LogRow {
    timestamp: String,
    debtor_id: u64,
    creditor_id: u64,
    amount: i64,
}

/// Reads and validates transaction records from a segment.
///
/// Expected headers: `timestamp,debtor_id,creditor_id,amount`.
/// A row is rejected when its timestamp is not ISO-8601, its amount is not
/// positive, or debtor and creditor are the same user; the error names the
/// offending row.
///
/// # Examples
///
/// ```
/// use debt_ledger::io::reader::read_records;
/// use csv::ReaderBuilder;
///
/// let data = "timestamp,debtor_id,creditor_id,amount\n\
/// 2024-04-05T09:30:00.000000,1,2,100\n\
/// 2024-04-06T10:00:00,2,1,40\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let records: Vec<_> = read_records(&mut rdr).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].amount.as_i64(), 40);
/// ```
pub fn read_records<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<TransactionRecord, String>> + '_ {
    rdr.deserialize::<LogRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;

        let timestamp = row
            .timestamp
            .trim()
            .parse::<NaiveDateTime>()
            .map_err(|e| format!("invalid timestamp {:?}: {e}", row.timestamp))?;

        if row.amount <= 0 {
            return Err(format!(
                "non-positive amount {} for debtor {} creditor {}",
                row.amount, row.debtor_id, row.creditor_id
            ));
        }
        if row.debtor_id == row.creditor_id {
            return Err(format!(
                "debtor and creditor are both {} at {}",
                row.debtor_id, row.timestamp
            ));
        }

        Ok(TransactionRecord::new(
            timestamp,
            UserId::new(row.debtor_id),
            UserId::new(row.creditor_id),
            Amount::new(row.amount),
        ))
    })
}
