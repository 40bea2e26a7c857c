use std::collections::HashMap;

use crate::{
    common::{money::Amount, user::UserId},
    domain::balance::BalanceEdge,
};

/// Ordered pair `(debtor, creditor)`.
pub type EdgeKey = (UserId, UserId);

/// In-memory store of pairwise net balances.
///
/// Missing keys read as zero. Zeroed edges are kept in place (so listing
/// order stays stable) but never show up in listings.
#[derive(Debug, Default)]
pub struct Ledger {
    balances: HashMap<EdgeKey, Amount>,
    // first-insertion order of keys
    order: Vec<EdgeKey>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Amount `debtor` owes `creditor`, zero when the pair has no entry.
    pub fn balance(&self, debtor: UserId, creditor: UserId) -> Amount {
        self.balances
            .get(&(debtor, creditor))
            .copied()
            .unwrap_or_else(Amount::zero)
    }

    pub fn set_balance(&mut self, debtor: UserId, creditor: UserId, amount: Amount) {
        let key = (debtor, creditor);
        if self.balances.insert(key, amount).is_none() {
            self.order.push(key);
        }
    }

    /// Every edge with a positive amount, in insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = BalanceEdge> + '_ {
        self.order.iter().filter_map(|key| {
            let amount = self.balances.get(key).copied()?;
            amount
                .is_positive()
                .then(|| BalanceEdge::new(key.0, key.1, amount))
        })
    }

    pub fn list_for_user(&self, user: UserId) -> impl Iterator<Item = BalanceEdge> + '_ {
        self.list_all().filter(move |edge| edge.involves(user))
    }

    /// Resets one edge to zero without netting. Returns the amount that was
    /// outstanding, or `None` if there was nothing to clear.
    pub fn clear_edge(&mut self, debtor: UserId, creditor: UserId) -> Option<Amount> {
        let old = self.balance(debtor, creditor);
        if !old.is_positive() {
            return None;
        }
        self.set_balance(debtor, creditor, Amount::zero());
        Some(old)
    }

    pub fn is_empty(&self) -> bool {
        self.list_all().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(id: u64) -> UserId {
        UserId::new(id)
    }

    #[test]
    fn missing_pairs_read_as_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance(uid(1), uid(2)), Amount::zero());
        assert!(ledger.is_empty());
    }

    #[test]
    fn lists_positive_edges_in_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.set_balance(uid(3), uid(1), Amount::new(7));
        ledger.set_balance(uid(1), uid(2), Amount::new(5));
        ledger.set_balance(uid(2), uid(4), Amount::zero());
        // updating an existing key keeps its original position
        ledger.set_balance(uid(3), uid(1), Amount::new(9));

        let edges: Vec<_> = ledger.list_all().collect();
        assert_eq!(
            edges,
            vec![
                BalanceEdge::new(uid(3), uid(1), Amount::new(9)),
                BalanceEdge::new(uid(1), uid(2), Amount::new(5)),
            ]
        );
    }

    #[test]
    fn list_for_user_matches_either_side() {
        let mut ledger = Ledger::new();
        ledger.set_balance(uid(1), uid(2), Amount::new(5));
        ledger.set_balance(uid(3), uid(1), Amount::new(4));
        ledger.set_balance(uid(3), uid(4), Amount::new(2));

        let for_one: Vec<_> = ledger.list_for_user(uid(1)).collect();
        assert_eq!(for_one.len(), 2);
        assert!(for_one.iter().all(|e| e.involves(uid(1))));

        assert_eq!(ledger.list_for_user(uid(9)).count(), 0);
    }

    #[test]
    fn clear_edge_only_touches_the_given_direction() {
        let mut ledger = Ledger::new();
        // the store itself does not net, so both directions can be seeded
        ledger.set_balance(uid(1), uid(2), Amount::new(6));
        ledger.set_balance(uid(2), uid(1), Amount::new(3));
        ledger.set_balance(uid(1), uid(3), Amount::new(9));

        assert_eq!(ledger.clear_edge(uid(1), uid(2)), Some(Amount::new(6)));
        assert_eq!(ledger.balance(uid(1), uid(2)), Amount::zero());
        assert_eq!(ledger.balance(uid(2), uid(1)), Amount::new(3));
        assert_eq!(ledger.balance(uid(1), uid(3)), Amount::new(9));

        // second clear has nothing left to reset
        assert_eq!(ledger.clear_edge(uid(1), uid(2)), None);
        assert_eq!(
            ledger.list_all().collect::<Vec<_>>(),
            vec![
                BalanceEdge::new(uid(2), uid(1), Amount::new(3)),
                BalanceEdge::new(uid(1), uid(3), Amount::new(9)),
            ]
        );
    }
}
