//! Special-token splitting.
//!
//! Registered special tokens are matched as literal substrings, never as
//! patterns. The scan runs left to right and takes the match at the
//! earliest position; when several literals match at the same position,
//! the longest one wins. A byte trie over the literals keeps the scan
//! independent of registration order.

use ahash::AHashMap;
use bytemerge_core::Vocabulary;

/// Trie node keyed on literal bytes.
#[derive(Debug, Default)]
struct TrieNode {
    /// Child nodes indexed by byte
    children: AHashMap<u8, TrieNode>,
    /// Token ID if this node completes a registered literal
    token_id: Option<u32>,
}

/// A span of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// A registered special token, replaced by its ID directly
    Special(u32),
    /// Plain text, to be byte-encoded and merged
    Text(&'a str),
}

/// Longest-match literal scanner over the registered special tokens.
#[derive(Debug, Default)]
pub struct SpecialSplitter {
    root: TrieNode,
}

impl SpecialSplitter {
    /// Build a splitter from the vocabulary's registered literals.
    pub fn from_vocab(vocab: &Vocabulary) -> Self {
        let mut splitter = Self::default();
        for (literal, id) in vocab.special_literals() {
            splitter.insert(literal.as_bytes(), id);
        }
        splitter
    }

    fn insert(&mut self, literal: &[u8], id: u32) {
        let mut node = &mut self.root;
        for &b in literal {
            node = node.children.entry(b).or_default();
        }
        node.token_id = Some(id);
    }

    /// Check if no literal is registered.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Find the longest literal match starting exactly at `pos`.
    ///
    /// Returns the token ID and the match length in bytes.
    fn match_at(&self, bytes: &[u8], pos: usize) -> Option<(u32, usize)> {
        let mut node = &self.root;
        let mut best = None;

        for (offset, b) in bytes[pos..].iter().enumerate() {
            match node.children.get(b) {
                Some(child) => {
                    node = child;
                    if let Some(id) = node.token_id {
                        best = Some((id, offset + 1));
                    }
                }
                None => break,
            }
        }

        best
    }

    /// Partition `text` into alternating plain and special spans.
    ///
    /// Matches always fall on character boundaries: a valid UTF-8
    /// literal cannot begin or end inside a multi-byte character of
    /// valid UTF-8 text.
    pub fn split<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        let bytes = text.as_bytes();
        let mut spans = Vec::new();
        let mut plain_start = 0;
        let mut pos = 0;

        while pos < bytes.len() {
            match self.match_at(bytes, pos) {
                Some((id, len)) => {
                    if plain_start < pos {
                        spans.push(Span::Text(&text[plain_start..pos]));
                    }
                    spans.push(Span::Special(id));
                    pos += len;
                    plain_start = pos;
                }
                None => pos += 1,
            }
        }

        if plain_start < bytes.len() {
            spans.push(Span::Text(&text[plain_start..]));
        }

        spans
    }
}
