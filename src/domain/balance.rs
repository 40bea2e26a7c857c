use std::fmt;

use crate::common::{money::Amount, user::UserId};

/// One outstanding net debt: `debtor` owes `creditor` `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceEdge {
    pub debtor: UserId,
    pub creditor: UserId,
    pub amount: Amount,
}

impl BalanceEdge {
    pub fn new(debtor: UserId, creditor: UserId, amount: Amount) -> Self {
        Self {
            debtor,
            creditor,
            amount,
        }
    }

    pub fn involves(&self, user: UserId) -> bool {
        self.debtor == user || self.creditor == user
    }
}

impl fmt::Display for BalanceEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} owes {} **{}**",
            self.debtor.mention(),
            self.creditor.mention(),
            self.amount
        )
    }
}
