use chrono::NaiveDateTime;
use tracing::{error, info};

use crate::{
    common::{error::AppError, money::Amount, user::UserId},
    domain::{balance::BalanceEdge, ledger::Ledger, transaction::TransactionRecord},
    io::{journal::TransactionLog, segment},
    worker::netting::{self, Netting},
};

/// Source of "now" for timestamps and segment addressing.
pub type Clock = fn() -> NaiveDateTime;

pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// One debt ledger: the net balance store plus its transaction log.
///
/// All mutations go through `&mut self`, so sharing a tracker between
/// threads means wrapping the whole thing in a single lock; store and log
/// are then always updated together.
#[derive(Debug)]
pub struct DebtTracker {
    ledger: Ledger,
    log: TransactionLog,
    clock: Clock,
    // month label the in-memory ledger belongs to
    month: String,
}

impl DebtTracker {
    pub fn new(log: TransactionLog) -> Self {
        Self::with_clock(log, local_now)
    }

    pub fn with_clock(log: TransactionLog, clock: Clock) -> Self {
        Self {
            ledger: Ledger::new(),
            log,
            month: segment::month_label(&clock()),
            clock,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    /// Discards in-memory state and rebuilds it from this month's segment.
    ///
    /// On a malformed segment the error is returned and the records read
    /// before it stay applied.
    pub fn replay_current_month(&mut self) -> Result<usize, AppError> {
        let now = (self.clock)();
        self.replay_month(&now)
    }

    fn replay_month(&mut self, now: &NaiveDateTime) -> Result<usize, AppError> {
        self.ledger = Ledger::new();
        self.month = segment::month_label(now);
        self.log.replay(&mut self.ledger, now)
    }

    /// Switches to the segment of the current month if the calendar moved on
    /// since the last replay. Returns the time used for the check.
    fn roll_over(&mut self) -> NaiveDateTime {
        let now = (self.clock)();
        let month = segment::month_label(&now);
        if month != self.month {
            info!(from = %self.month, to = %month, "month changed, replaying new segment");
            if let Err(e) = self.replay_month(&now) {
                error!(error = %e, "replay aborted, continuing with partial ledger");
            }
        }
        now
    }

    /// Records "`debtor` owes `creditor` `amount`".
    ///
    /// The transaction is checked against the ledger, then written to the
    /// log, and only netted into the ledger once the write succeeded. The
    /// ledger never holds anything a replay would not reproduce, and the log
    /// never holds a record the ledger would refuse.
    pub fn add(
        &mut self,
        debtor: UserId,
        creditor: UserId,
        amount: Amount,
    ) -> Result<Netting, AppError> {
        validate(debtor, creditor, amount)?;
        let now = self.roll_over();
        netting::check(&self.ledger, debtor, creditor, amount)?;

        let record = TransactionRecord::new(now, debtor, creditor, amount);
        if let Err(e) = self.log.append(&record) {
            error!(%debtor, %creditor, %amount, error = %e, "failed to log transaction");
            return Err(e);
        }

        let netting = netting::apply(&mut self.ledger, debtor, creditor, amount)?;
        info!(%debtor, %creditor, %amount, ?netting, "debt recorded");
        Ok(netting)
    }

    /// Outstanding balances, optionally only those involving `user`.
    pub fn summary(&mut self, user: Option<UserId>) -> Vec<BalanceEdge> {
        self.roll_over();
        match user {
            Some(user) => self.ledger.list_for_user(user).collect(),
            None => self.ledger.list_all().collect(),
        }
    }

    /// Administrative reset of one edge. Not netted and not logged, so the
    /// next replay of this month brings the debt back.
    pub fn clear(&mut self, debtor: UserId, creditor: UserId) -> Option<Amount> {
        self.roll_over();
        let cleared = self.ledger.clear_edge(debtor, creditor);
        if let Some(amount) = cleared {
            info!(%debtor, %creditor, %amount, "debt cleared");
        }
        cleared
    }
}

pub fn validate(debtor: UserId, creditor: UserId, amount: Amount) -> Result<(), AppError> {
    if !amount.is_positive() {
        return Err(AppError::Validation(
            "amount must be greater than 0".to_string(),
        ));
    }
    if debtor == creditor {
        return Err(AppError::Validation(
            "debtor and creditor must be different users".to_string(),
        ));
    }
    Ok(())
}
