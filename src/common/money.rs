use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;
use std::ops::Sub;

#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// An amount owed, in whole currency-agnostic units.
///
/// Balances stored in the ledger are never negative; the signed
/// representation only shows up transiently while netting two opposite
/// debts against each other.
///
/// # Examples
/// ```
/// use debt_ledger::common::money::Amount;
///
/// let owed: Amount = "120".parse().unwrap();
/// assert_eq!(owed.as_i64(), 120);
/// assert!(owed.is_positive());
/// ```
pub struct Amount(i64);

impl Amount {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Amount(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Sum of two amounts, `None` if it does not fit.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn abs(self) -> Amount {
        Amount(self.0.abs())
    }
}

impl std::str::FromStr for Amount {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Amount {}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Sub for Amount {
    type Output = Amount;
    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}
