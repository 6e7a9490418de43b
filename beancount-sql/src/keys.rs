//! Surrogate key allocation.

use std::collections::HashMap;

use log::debug;

use crate::ImportError;

/// Postings are numbered `transaction_id * POSTING_ID_STRIDE + local_index`, the local index
/// starting at 1. A transaction may therefore hold at most `POSTING_ID_STRIDE - 1` postings;
/// one more would take the id of the next transaction's first posting.
pub const POSTING_ID_STRIDE: i64 = 1000;

/// Entry kinds whose id is their 0-based position among the entries of the same kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Positional {
    Assertion,
    Price,
    Commodity,
    Document,
}

impl Positional {
    fn index(self) -> usize {
        match self {
            Positional::Assertion => 0,
            Positional::Price => 1,
            Positional::Commodity => 2,
            Positional::Document => 3,
        }
    }
}

/// Outcome of resolving a key that is created on first use.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Allocation {
    Existing(i64),
    Created(i64),
}

impl Allocation {
    pub fn id(self) -> i64 {
        match self {
            Allocation::Existing(id) | Allocation::Created(id) => id,
        }
    }
}

/// Hands out ids and remembers the ones later entries refer to.
///
/// Account and category keys are write-once: the first assignment wins and is never replaced.
#[derive(Debug, Default)]
pub struct KeyAllocator {
    accounts: HashMap<String, i64>,
    categories: HashMap<(String, String), i64>,
    transactions: i64,
    positions: [i64; 4],
}

impl KeyAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next account id, starting at 1. Returns `None` if `name` already has one.
    pub fn open_account(&mut self, name: &str) -> Option<i64> {
        if self.accounts.contains_key(name) {
            return None;
        }
        let id = self.accounts.len() as i64 + 1;
        self.accounts.insert(name.to_string(), id);
        debug!("account {} -> {}", name, id);
        Some(id)
    }

    pub fn contains_account(&self, name: &str) -> bool {
        self.accounts.contains_key(name)
    }

    /// Id of an opened account. Referencing an account that was never opened is fatal.
    pub fn account_id(&self, name: &str) -> Result<i64, ImportError> {
        self.accounts
            .get(name)
            .copied()
            .ok_or_else(|| ImportError::UnknownAccount(name.to_string()))
    }

    /// Id of the `(account_type, category)` pair, numbered from 1 in first-seen order.
    pub fn category(&mut self, account_type: &str, category: &str) -> Allocation {
        let key = (account_type.to_string(), category.to_string());
        if let Some(id) = self.categories.get(&key) {
            return Allocation::Existing(*id);
        }
        let id = self.categories.len() as i64 + 1;
        debug!("category {}:{} -> {}", account_type, category, id);
        self.categories.insert(key, id);
        Allocation::Created(id)
    }

    /// Assigns the next transaction id, starting at 1.
    pub fn next_transaction(&mut self) -> i64 {
        self.transactions += 1;
        self.transactions
    }

    /// Fails if a transaction with `count` postings cannot be numbered without collisions.
    pub fn check_posting_count(transaction_id: i64, count: usize) -> Result<(), ImportError> {
        if count as i64 >= POSTING_ID_STRIDE {
            return Err(ImportError::TooManyPostings {
                transaction_id,
                count,
                max: POSTING_ID_STRIDE - 1,
            });
        }
        Ok(())
    }

    /// Id of the posting at the 0-based `index` within its transaction.
    pub fn posting_id(transaction_id: i64, index: usize) -> i64 {
        transaction_id * POSTING_ID_STRIDE + index as i64 + 1
    }

    /// Next 0-based position for `kind`.
    pub fn next_position(&mut self, kind: Positional) -> i64 {
        let slot = &mut self.positions[kind.index()];
        let id = *slot;
        *slot += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_ids_follow_open_order() {
        let mut keys = KeyAllocator::new();
        assert_eq!(keys.open_account("Assets:Cash"), Some(1));
        assert_eq!(keys.open_account("Expenses:Food"), Some(2));
        assert_eq!(keys.account_id("Assets:Cash").unwrap(), 1);
        assert_eq!(keys.account_id("Expenses:Food").unwrap(), 2);
    }

    #[test]
    fn first_account_assignment_wins() {
        let mut keys = KeyAllocator::new();
        assert_eq!(keys.open_account("Assets:Cash"), Some(1));
        assert_eq!(keys.open_account("Assets:Cash"), None);
        assert_eq!(keys.account_id("Assets:Cash").unwrap(), 1);
        assert_eq!(keys.open_account("Assets:Bank"), Some(2));
    }

    #[test]
    fn unknown_account_is_an_error() {
        let keys = KeyAllocator::new();
        match keys.account_id("Assets:Nowhere") {
            Err(ImportError::UnknownAccount(name)) => assert_eq!(name, "Assets:Nowhere"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn categories_are_deduplicated() {
        let mut keys = KeyAllocator::new();
        assert_eq!(keys.category("Assets", "Bank"), Allocation::Created(1));
        assert_eq!(keys.category("Expenses", "Food"), Allocation::Created(2));
        assert_eq!(keys.category("Assets", "Bank"), Allocation::Existing(1));
        // Same category name under another type is a different category.
        assert_eq!(keys.category("Liabilities", "Bank"), Allocation::Created(3));
    }

    #[test]
    fn posting_ids_at_the_stride_boundary() {
        assert_eq!(KeyAllocator::posting_id(1, 0), 1001);
        assert_eq!(KeyAllocator::posting_id(1, 998), 1999);
        assert_eq!(KeyAllocator::posting_id(2, 0), 2001);
        assert!(KeyAllocator::check_posting_count(1, 999).is_ok());
        match KeyAllocator::check_posting_count(1, 1000) {
            Err(ImportError::TooManyPostings { count, max, .. }) => {
                assert_eq!(count, 1000);
                assert_eq!(max, 999);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn positions_are_zero_based_per_kind() {
        let mut keys = KeyAllocator::new();
        assert_eq!(keys.next_position(Positional::Price), 0);
        assert_eq!(keys.next_position(Positional::Price), 1);
        assert_eq!(keys.next_position(Positional::Assertion), 0);
        assert_eq!(keys.next_transaction(), 1);
        assert_eq!(keys.next_transaction(), 2);
    }
}
