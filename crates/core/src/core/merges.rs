//! Merge rule management for BPE.
//!
//! Merge rules are stored using token IDs rather than byte strings for
//! fast comparison. The table is append-only: a pair maps to exactly one
//! new ID for the lifetime of the table, and the creation order is kept
//! alongside the lookup map so the full merge history can be replayed.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A pair of adjacent token IDs.
pub type Pair = (u32, u32);

/// Lookup map: pair -> new token ID.
pub type MergeMap = AHashMap<Pair, u32>;

/// A single recorded merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRule {
    /// The pair that was replaced
    pub pair: Pair,
    /// The ID minted for the merged token
    pub new_id: u32,
}

/// Append-only collection of BPE merge rules with efficient lookup.
///
/// Serialized as the ordered rule list alone; the rules plus their
/// creation order fully determine the table, and pair-keyed maps do not
/// survive formats with string-only keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<MergeRule>", into = "Vec<MergeRule>")]
pub struct MergeRules {
    /// Lookup map: pair -> new token ID
    by_pair: MergeMap,
    /// Rules in the order they were recorded
    order: Vec<MergeRule>,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a merge rule.
    ///
    /// Fails if the pair already has a rule, so no two IDs can ever
    /// share a pair key.
    pub fn insert(&mut self, pair: Pair, new_id: u32) -> Result<()> {
        if self.by_pair.contains_key(&pair) {
            return Err(TokenizerError::InvalidMerge(format!(
                "pair ({}, {}) already has a rule",
                pair.0, pair.1
            )));
        }
        self.by_pair.insert(pair, new_id);
        self.order.push(MergeRule { pair, new_id });
        Ok(())
    }

    /// Get the ID this pair merges into, if a rule exists.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<u32> {
        self.by_pair.get(&pair).copied()
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Rules in the order they were recorded.
    pub fn in_order(&self) -> &[MergeRule] {
        &self.order
    }

    /// Remove all rules.
    pub fn clear(&mut self) {
        self.by_pair.clear();
        self.order.clear();
    }
}

impl From<Vec<MergeRule>> for MergeRules {
    fn from(order: Vec<MergeRule>) -> Self {
        let mut rules = Self::new();
        for rule in order {
            // The list came from an append-only table, so pairs are unique
            let _ = rules.insert(rule.pair, rule.new_id);
        }
        rules
    }
}

impl From<MergeRules> for Vec<MergeRule> {
    fn from(rules: MergeRules) -> Self {
        rules.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut rules = MergeRules::new();
        rules.insert((97, 98), 256).unwrap();
        rules.insert((256, 99), 257).unwrap();

        assert_eq!(rules.get((97, 98)), Some(256));
        assert_eq!(rules.get((256, 99)), Some(257));
        assert_eq!(rules.get((98, 99)), None);
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let mut rules = MergeRules::new();
        rules.insert((97, 98), 256).unwrap();

        let err = rules.insert((97, 98), 257).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));

        // The original rule is untouched
        assert_eq!(rules.get((97, 98)), Some(256));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let mut rules = MergeRules::new();
        rules.insert((10, 20), 256).unwrap();
        rules.insert((0, 1), 257).unwrap();

        let order: Vec<_> = rules.in_order().iter().map(|r| r.new_id).collect();
        assert_eq!(order, vec![256, 257]);
    }

    #[test]
    fn test_rebuild_from_order() {
        let mut rules = MergeRules::new();
        rules.insert((97, 98), 256).unwrap();
        rules.insert((256, 99), 257).unwrap();

        let order: Vec<MergeRule> = rules.clone().into();
        let rebuilt = MergeRules::from(order);

        assert_eq!(rebuilt.get((97, 98)), Some(256));
        assert_eq!(rebuilt.get((256, 99)), Some(257));
        assert_eq!(rebuilt.in_order(), rules.in_order());
    }

    #[test]
    fn test_clear() {
        let mut rules = MergeRules::new();
        rules.insert((97, 98), 256).unwrap();
        rules.clear();

        assert!(rules.is_empty());
        assert_eq!(rules.get((97, 98)), None);
    }
}
