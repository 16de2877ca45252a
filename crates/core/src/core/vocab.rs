//! Vocabulary storage and lookup.
//!
//! The vocabulary owns three tables: ID -> token bytes for byte
//! identities and learned merges, the pair -> new-ID merge table, and
//! the special-token tables. IDs 0-255 are byte identities, fixed for
//! the vocabulary's lifetime; every ID from 256 upward comes from one
//! monotonically increasing counter shared by merge tokens and special
//! tokens, whichever is registered first.

use crate::core::merges::{MergeRules, Pair};
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Number of reserved byte-identity entries.
pub const BYTE_TOKENS: u32 = 256;

/// Vocabulary with byte identities, learned merges and special tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// ID -> token bytes (byte identities and merge results)
    id_to_token: AHashMap<u32, Vec<u8>>,
    /// Learned merge rules
    merges: MergeRules,
    /// Special token literal -> ID
    special_to_id: AHashMap<CompactString, u32>,
    /// ID -> special token literal
    id_to_special: AHashMap<u32, CompactString>,
    /// Next unused ID
    next_id: u32,
    /// Upper bound on `size()` reachable through training
    max_vocab_size: u32,
}

impl Vocabulary {
    /// Create a vocabulary with the 256 byte identities seeded and the
    /// ID counter at 256.
    ///
    /// `max_vocab_size` must leave room for at least one learned token.
    pub fn new(max_vocab_size: u32) -> Result<Self> {
        if max_vocab_size <= BYTE_TOKENS {
            return Err(TokenizerError::InvalidConfig(format!(
                "max_vocab_size must be greater than {}, got {}",
                BYTE_TOKENS, max_vocab_size
            )));
        }

        // Pre-allocate for the byte identities only; the table grows as
        // merges are learned, so a huge limit costs nothing up front.
        let mut vocab = Self {
            id_to_token: AHashMap::with_capacity(BYTE_TOKENS as usize),
            merges: MergeRules::new(),
            special_to_id: AHashMap::new(),
            id_to_special: AHashMap::new(),
            next_id: 0,
            max_vocab_size,
        };
        vocab.seed_bytes();
        Ok(vocab)
    }

    fn seed_bytes(&mut self) {
        for b in 0..BYTE_TOKENS {
            self.id_to_token.insert(b, vec![b as u8]);
        }
        self.next_id = BYTE_TOKENS;
    }

    /// Drop all learned and special state and reseed the byte
    /// identities. There is no partial rollback.
    pub fn reset(&mut self) {
        self.id_to_token.clear();
        self.merges.clear();
        self.special_to_id.clear();
        self.id_to_special.clear();
        self.seed_bytes();
    }

    /// Token bytes for an ID.
    ///
    /// The special-token table takes precedence, though by construction
    /// an ID lives in exactly one table.
    pub fn token_bytes(&self, id: u32) -> Result<&[u8]> {
        if let Some(literal) = self.id_to_special.get(&id) {
            return Ok(literal.as_bytes());
        }
        self.id_to_token
            .get(&id)
            .map(|bytes| bytes.as_slice())
            .ok_or(TokenizerError::UnknownTokenId(id))
    }

    /// The ID this pair merges into, if a rule exists.
    #[inline]
    pub fn id_of_pair(&self, pair: Pair) -> Option<u32> {
        self.merges.get(pair)
    }

    /// Record a merge rule for `pair`, minting the next ID.
    ///
    /// The new token's bytes are the concatenation of the parents'
    /// bytes. Returns the minted ID and the token bytes.
    pub fn add_merge(&mut self, pair: Pair) -> Result<(u32, Vec<u8>)> {
        let mut bytes = self.token_bytes(pair.0)?.to_vec();
        bytes.extend_from_slice(self.token_bytes(pair.1)?);

        let new_id = self.next_id;
        self.merges.insert(pair, new_id)?;
        self.id_to_token.insert(new_id, bytes.clone());
        self.next_id += 1;

        Ok((new_id, bytes))
    }

    /// Register a special token literal.
    ///
    /// Idempotent: a literal that is already registered keeps its ID and
    /// no new ID is consumed.
    pub fn register_special(&mut self, literal: &str) -> u32 {
        if let Some(&id) = self.special_to_id.get(literal) {
            return id;
        }

        let id = self.next_id;
        self.special_to_id.insert(CompactString::new(literal), id);
        self.id_to_special.insert(id, CompactString::new(literal));
        self.next_id += 1;
        id
    }

    /// Current counter value (= next unused ID): the number of distinct
    /// symbols definable so far, special tokens included.
    #[inline]
    pub fn size(&self) -> u32 {
        self.next_id
    }

    /// Upper bound on `size()` reachable through training.
    #[inline]
    pub fn max_vocab_size(&self) -> u32 {
        self.max_vocab_size
    }

    /// Number of learned merge rules.
    #[inline]
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }

    /// The learned merge rules.
    pub fn merge_rules(&self) -> &MergeRules {
        &self.merges
    }

    /// Whether any special token has been registered.
    pub fn has_specials(&self) -> bool {
        !self.special_to_id.is_empty()
    }

    /// Whether `id` names a special token.
    pub fn is_special(&self, id: u32) -> bool {
        self.id_to_special.contains_key(&id)
    }

    /// Registered special tokens as (literal, ID).
    pub fn special_literals(&self) -> impl Iterator<Item = (&str, u32)> {
        self.special_to_id
            .iter()
            .map(|(literal, &id)| (literal.as_str(), id))
    }
}
