//! Strongly-typed account identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a customer account.
///
/// Accounts are issued as positive integers; zero and negative values
/// never identify a real account and fail purchase validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Create an account identifier from a raw value.
    ///
    /// No validation happens here; purchase validation rejects
    /// non-positive identifiers with a domain error.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Returns true if this identifies a real account (positive).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_new_and_display() {
        let id = AccountId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn account_id_validity() {
        assert!(AccountId::new(1).is_valid());
        assert!(AccountId::new(i64::MAX).is_valid());
        assert!(!AccountId::new(0).is_valid());
        assert!(!AccountId::new(-1).is_valid());
    }

    #[test]
    fn account_id_equality() {
        assert_eq!(AccountId::new(7), AccountId::new(7));
        assert_ne!(AccountId::new(7), AccountId::new(8));
    }

    #[test]
    fn account_id_from_i64() {
        let id: AccountId = 99.into();
        assert_eq!(id.get(), 99);
    }

    #[test]
    fn account_id_serde_roundtrip() {
        let id = AccountId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn account_id_hash_works_for_collections() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(AccountId::new(1));
        set.insert(AccountId::new(2));
        set.insert(AccountId::new(1)); // duplicate

        assert_eq!(set.len(), 2);
    }
}
