use std::str::FromStr;

use crate::common::{error::AppError, money::Amount, user::UserId};

/// Fails with the command's usage line unless `args` has a length in
/// `min..=max`.
pub fn expect_count(args: &[&str], min: usize, max: usize, usage: &str) -> Result<(), AppError> {
    if args.len() < min || args.len() > max {
        return Err(AppError::Parse(format!("usage: {usage}")));
    }
    Ok(())
}

pub fn user(arg: &str) -> Result<UserId, AppError> {
    UserId::from_str(arg).map_err(AppError::Parse)
}

pub fn amount(arg: &str) -> Result<Amount, AppError> {
    Amount::from_str(arg).map_err(|e| AppError::Parse(format!("invalid amount {arg:?}: {e}")))
}
