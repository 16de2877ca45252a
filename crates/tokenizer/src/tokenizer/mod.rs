//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that
//! integrates the vocabulary, the trainer and the special-token
//! splitter into a single interface.

use crate::pre_tokenizer::{Span, SpecialSplitter};
use bytemerge_core::encoding::encode_bytes;
use bytemerge_core::{Result, Vocabulary};
use bytemerge_training::{BpeTrainer, MergeEvent, TrainingReport};

/// Configuration for building a tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Upper bound on the vocabulary size reachable through training
    pub vocab_size: u32,
    /// Special tokens registered at construction
    pub special_tokens: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_size: 1_000,
            special_tokens: Vec::new(),
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vocabulary size limit.
    pub fn vocab_size(mut self, size: u32) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Register a special token at construction.
    pub fn special_token(mut self, literal: impl Into<String>) -> Self {
        self.config.special_tokens.push(literal.into());
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::new(self.config)
    }
}

/// Byte-level BPE tokenizer.
///
/// Training populates the vocabulary once; encode and decode read it
/// afterward. The vocabulary can still grow through special-token
/// registration after training.
pub struct Tokenizer {
    /// Vocabulary: byte identities, learned merges, special tokens
    vocab: Vocabulary,
    /// Longest-match scanner over the registered special tokens
    splitter: SpecialSplitter,
}

impl Tokenizer {
    /// Create a new tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let mut vocab = Vocabulary::new(config.vocab_size)?;
        for literal in &config.special_tokens {
            vocab.register_special(literal);
        }
        let splitter = SpecialSplitter::from_vocab(&vocab);

        Ok(Self { vocab, splitter })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Create a tokenizer with only a vocabulary size limit.
    pub fn with_vocab_size(vocab_size: u32) -> Result<Self> {
        Self::new(TokenizerConfig {
            vocab_size,
            ..Default::default()
        })
    }

    /// Train on a byte corpus.
    ///
    /// Repeated calls keep merging: the corpus is taken up under the
    /// merges learned so far and training continues toward the size
    /// limit. With `stop_early`, training stops once the best pair
    /// occurs only once.
    pub fn train(&mut self, corpus: &[u8], stop_early: bool) -> Result<TrainingReport> {
        let mut trainer = BpeTrainer::new(&self.vocab, corpus);
        trainer.train(&mut self.vocab, stop_early)
    }

    /// Train with a streaming merge-event sink.
    ///
    /// Returns the number of merges performed. The sink only observes;
    /// its absence does not change the outcome.
    pub fn train_with_observer(
        &mut self,
        corpus: &[u8],
        stop_early: bool,
        on_merge: impl FnMut(&MergeEvent),
    ) -> Result<usize> {
        let mut trainer = BpeTrainer::new(&self.vocab, corpus);
        trainer.train_with_observer(&mut self.vocab, stop_early, on_merge)
    }

    /// Register a special token literal. Idempotent.
    pub fn register_special(&mut self, literal: &str) -> u32 {
        let id = self.vocab.register_special(literal);
        self.splitter = SpecialSplitter::from_vocab(&self.vocab);
        id
    }

    /// Encode text to token IDs.
    ///
    /// Special tokens are matched as literals and replaced by their IDs
    /// directly; everything between them is byte-encoded and merged to
    /// the fixpoint of the learned rules.
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        if self.splitter.is_empty() {
            return Ok(encode_bytes(&self.vocab, text.as_bytes()));
        }

        let mut ids = Vec::new();
        for span in self.splitter.split(text) {
            match span {
                Span::Special(id) => ids.push(id),
                Span::Text(plain) => ids.extend(encode_bytes(&self.vocab, plain.as_bytes())),
            }
        }
        Ok(ids)
    }

    /// Encode a batch of texts (parallelized).
    pub fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<u32>>> {
        use rayon::prelude::*;

        texts.par_iter().map(|text| self.encode(text)).collect()
    }

    /// Decode token IDs to raw bytes.
    ///
    /// Fails with an unknown-token error on any ID absent from both the
    /// byte/merge table and the special-token table.
    pub fn decode_bytes(&self, ids: &[u32]) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        for &id in ids {
            bytes.extend_from_slice(self.vocab.token_bytes(id)?);
        }
        Ok(bytes)
    }

    /// Decode token IDs back to text.
    ///
    /// Any full `encode` output decodes to the original text; an ID
    /// subsequence that splits a multi-byte character is reported as an
    /// invalid-UTF-8 error.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        Ok(String::from_utf8(self.decode_bytes(ids)?)?)
    }

    /// Current vocabulary size (= next unused ID).
    pub fn vocab_size(&self) -> u32 {
        self.vocab.size()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Reinitialize to the untrained 256-identity state, dropping all
    /// learned merges and special tokens.
    pub fn reset(&mut self) {
        self.vocab.reset();
        self.splitter = SpecialSplitter::from_vocab(&self.vocab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemerge_core::TokenizerError;

    #[test]
    fn test_construct_limits() {
        assert!(Tokenizer::with_vocab_size(256).is_err());
        assert!(Tokenizer::with_vocab_size(257).is_ok());
    }

    #[test]
    fn test_single_merge_scenario() {
        let mut tokenizer = Tokenizer::with_vocab_size(257).unwrap();
        let report = tokenizer.train(b"aaaa", false).unwrap();

        assert_eq!(report.merge_count(), 1);
        assert_eq!(report.events[0].pair, (97, 97));
        assert_eq!(report.events[0].new_id, 256);
        assert_eq!(report.events[0].token_bytes, b"aa");

        let ids = tokenizer.encode("aaaa").unwrap();
        assert_eq!(ids, vec![256, 256]);
        assert_eq!(tokenizer.decode(&ids).unwrap(), "aaaa");
    }

    #[test]
    fn test_special_token_after_training() {
        let mut tokenizer = Tokenizer::with_vocab_size(257).unwrap();
        tokenizer.train(b"aaaa", false).unwrap();

        let id = tokenizer.register_special("<END>");
        assert_eq!(id, 257);

        // The plain spans are too short to trigger the learned merge
        let ids = tokenizer.encode("a<END>a").unwrap();
        assert_eq!(ids, vec![97, 257, 97]);
        assert_eq!(tokenizer.decode(&ids).unwrap(), "a<END>a");
    }

    #[test]
    fn test_empty_corpus() {
        let mut tokenizer = Tokenizer::with_vocab_size(300).unwrap();
        let before = tokenizer.vocab_size();

        let report = tokenizer.train(b"", false).unwrap();

        assert_eq!(report.merge_count(), 0);
        assert_eq!(report.final_vocab_size, before);
    }

    #[test]
    fn test_stop_early_with_unique_pairs() {
        let mut tokenizer = Tokenizer::with_vocab_size(300).unwrap();
        let report = tokenizer.train(b"abcdef", true).unwrap();

        assert_eq!(report.merge_count(), 0);
        assert_eq!(tokenizer.vocab_size(), 256);
    }

    #[test]
    fn test_round_trip_untrained() {
        let tokenizer = Tokenizer::with_vocab_size(300).unwrap();
        let text = "hello, world! \u{00e9}\u{4e16}\u{754c}";

        let ids = tokenizer.encode(text).unwrap();
        assert_eq!(tokenizer.decode(&ids).unwrap(), text);
    }

    #[test]
    fn test_round_trip_trained() {
        let mut tokenizer = Tokenizer::with_vocab_size(300).unwrap();
        tokenizer.train(b"the quick brown fox jumps over the lazy dog", false)
            .unwrap();

        for text in ["the dog", "fox over fox", "unrelated input", ""] {
            let ids = tokenizer.encode(text).unwrap();
            assert_eq!(tokenizer.decode(&ids).unwrap(), text, "text: {:?}", text);
        }
    }

    #[test]
    fn test_round_trip_with_specials() {
        let mut tokenizer = Tokenizer::builder()
            .vocab_size(300)
            .special_token("<|endoftext|>")
            .special_token("<|user|>")
            .build()
            .unwrap();
        tokenizer.train(b"some training text some training", false).unwrap();

        let text = "<|user|>some text<|endoftext|>more<|endoftext|>";
        let ids = tokenizer.encode(text).unwrap();
        assert_eq!(tokenizer.decode(&ids).unwrap(), text);
    }

    #[test]
    fn test_monotonic_growth() {
        let mut tokenizer = Tokenizer::with_vocab_size(280).unwrap();
        let before = tokenizer.vocab_size();

        let report = tokenizer.train(b"abab abab abab cdcd cdcd", false).unwrap();

        let after = tokenizer.vocab_size();
        assert!(after >= before);
        assert!(after <= 280);
        // Exactly one ID per accepted merge
        assert_eq!(after - before, report.merge_count() as u32);
    }

    #[test]
    fn test_register_special_idempotent() {
        let mut tokenizer = Tokenizer::with_vocab_size(300).unwrap();

        let first = tokenizer.register_special("<END>");
        let size = tokenizer.vocab_size();
        let second = tokenizer.register_special("<END>");

        assert_eq!(first, second);
        assert_eq!(tokenizer.vocab_size(), size);
    }

    #[test]
    fn test_deterministic_training() {
        let corpus = b"deterministic corpora produce deterministic merges";

        let encode_all = |_: ()| {
            let mut tokenizer = Tokenizer::with_vocab_size(280).unwrap();
            let report = tokenizer.train(corpus, false).unwrap();
            let ids = tokenizer.encode("deterministic merges").unwrap();
            (report.events, ids)
        };

        assert_eq!(encode_all(()), encode_all(()));
    }

    #[test]
    fn test_decode_unknown_id() {
        let tokenizer = Tokenizer::with_vocab_size(300).unwrap();
        let err = tokenizer.decode(&[97, 999]).unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownTokenId(999)));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let tokenizer = Tokenizer::with_vocab_size(300).unwrap();

        // A lone UTF-8 lead byte is valid as bytes but not as text
        assert_eq!(tokenizer.decode_bytes(&[0xC3]).unwrap(), vec![0xC3]);
        let err = tokenizer.decode(&[0xC3]).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidUtf8(_)));
    }

    #[test]
    fn test_encode_batch() {
        let mut tokenizer = Tokenizer::with_vocab_size(280).unwrap();
        tokenizer.train(b"batch batch batch", false).unwrap();

        let texts = vec!["batch".to_string(), "hatch".to_string(), "".to_string()];
        let batch = tokenizer.encode_batch(&texts).unwrap();

        assert_eq!(batch.len(), 3);
        for (text, ids) in texts.iter().zip(&batch) {
            assert_eq!(&tokenizer.decode(ids).unwrap(), text);
        }
    }

    #[test]
    fn test_reset() {
        let mut tokenizer = Tokenizer::with_vocab_size(280).unwrap();
        tokenizer.train(b"abab abab", false).unwrap();
        tokenizer.register_special("<END>");

        tokenizer.reset();

        assert_eq!(tokenizer.vocab_size(), 256);
        assert_eq!(tokenizer.encode("ab").unwrap(), vec![97, 98]);
        assert_eq!(tokenizer.encode("<END>").unwrap().len(), 5);
    }

    #[test]
    fn test_retraining_resumes() {
        let mut tokenizer = Tokenizer::with_vocab_size(400).unwrap();
        let first = tokenizer.train(b"abab abab", false).unwrap();
        let size_after_first = tokenizer.vocab_size();

        // A second corpus keeps growing the same vocabulary
        let second = tokenizer.train(b"cdcd cdcd", false).unwrap();

        assert!(second.merge_count() > 0);
        assert_eq!(
            tokenizer.vocab_size(),
            size_after_first + second.merge_count() as u32
        );
        // Earlier merges stay intact
        assert_eq!(first.events[0].new_id, 256);
        assert_eq!(tokenizer.vocab().id_of_pair(first.events[0].pair), Some(256));
    }
}
