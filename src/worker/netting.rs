use crate::{
    common::{error::AppError, money::Amount, user::UserId},
    domain::ledger::Ledger,
};

/// How a transaction resolved against the existing balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Netting {
    /// No opposite debt; added onto `debtor -> creditor`.
    Accumulated,
    /// Opposite debt was larger and shrank.
    Reduced,
    /// Opposite debt was exactly offset.
    Cancelled,
    /// Opposite debt was smaller; the remainder now runs `debtor -> creditor`.
    Flipped,
}

/// Fails if applying the transaction would overflow the accumulated
/// balance. Never mutates the ledger.
pub fn check(
    ledger: &Ledger,
    debtor: UserId,
    creditor: UserId,
    amount: Amount,
) -> Result<(), AppError> {
    // netting against an opposite debt only ever shrinks magnitudes
    if ledger.balance(creditor, debtor).is_positive() {
        return Ok(());
    }
    accumulated(ledger, debtor, creditor, amount).map(|_| ())
}

/// Applies "`debtor` owes `creditor` `amount`" to the ledger, netting it
/// against any debt running the other way.
///
/// Callers guarantee `amount > 0` and `debtor != creditor`. After every call
/// at most one direction of the pair holds a positive balance. An
/// accumulation that would overflow is rejected and leaves the ledger
/// unchanged.
pub fn apply(
    ledger: &mut Ledger,
    debtor: UserId,
    creditor: UserId,
    amount: Amount,
) -> Result<Netting, AppError> {
    let reverse = ledger.balance(creditor, debtor);

    if !reverse.is_positive() {
        let total = accumulated(ledger, debtor, creditor, amount)?;
        ledger.set_balance(debtor, creditor, total);
        return Ok(Netting::Accumulated);
    }

    let result = reverse - amount;
    let netting = if result.is_positive() {
        ledger.set_balance(creditor, debtor, result);
        Netting::Reduced
    } else if result == Amount::zero() {
        ledger.set_balance(creditor, debtor, Amount::zero());
        Netting::Cancelled
    } else {
        ledger.set_balance(creditor, debtor, Amount::zero());
        ledger.set_balance(debtor, creditor, result.abs());
        Netting::Flipped
    };
    Ok(netting)
}

fn accumulated(
    ledger: &Ledger,
    debtor: UserId,
    creditor: UserId,
    amount: Amount,
) -> Result<Amount, AppError> {
    ledger
        .balance(debtor, creditor)
        .checked_add(amount)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "{} already owes {} too much to add {amount}",
                debtor.mention(),
                creditor.mention()
            ))
        })
}
