use chrono::NaiveDateTime;

use crate::common::{money::Amount, user::UserId};

/// A raw debt transaction as written to the monthly log.
///
/// Records are immutable once written. The timestamp is local wall-clock
/// time and also decides which monthly segment the record lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub timestamp: NaiveDateTime,
    pub debtor: UserId,
    pub creditor: UserId,
    pub amount: Amount,
}

impl TransactionRecord {
    pub fn new(timestamp: NaiveDateTime, debtor: UserId, creditor: UserId, amount: Amount) -> Self {
        Self {
            timestamp,
            debtor,
            creditor,
            amount,
        }
    }
}
