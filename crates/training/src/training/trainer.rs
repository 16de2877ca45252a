//! BPE trainer implementation.
//!
//! The trainer repeatedly counts adjacent pairs in its working sequence,
//! selects the most frequent one, mints a new ID for it in the
//! vocabulary, and rewrites the sequence, until the vocabulary reaches
//! its size limit or no merge is worth applying.

use super::counter::PairCounter;
use bytemerge_core::encoding::{encode_bytes, merge_pair};
use bytemerge_core::{Pair, Result, Vocabulary};

/// One accepted merge, emitted in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeEvent {
    /// The pair that was merged
    pub pair: Pair,
    /// The ID minted for the merged token
    pub new_id: u32,
    /// The merged token's bytes (concatenation of the parents)
    pub token_bytes: Vec<u8>,
}

/// Outcome of a training run.
#[derive(Debug, Clone, Default)]
pub struct TrainingReport {
    /// Accepted merges in order
    pub events: Vec<MergeEvent>,
    /// Vocabulary size after the run
    pub final_vocab_size: u32,
}

impl TrainingReport {
    /// Number of merges performed by the run.
    pub fn merge_count(&self) -> usize {
        self.events.len()
    }
}

/// Iterative most-frequent-pair trainer.
///
/// The trainer owns the working sequence. A fresh trainer seeds its
/// sequence by running the merge fixpoint over the corpus bytes, so a
/// pair that already has a rule can never be selected again; on an
/// untrained vocabulary this is simply one ID per byte. Calling `train`
/// again resumes from the current sequence, picking up where a previous
/// run (e.g. one stopped by `stop_early`) left off.
pub struct BpeTrainer {
    /// Working sequence: the corpus under the merges applied so far
    sequence: Vec<u32>,
    /// Pair counter, reused across iterations
    counter: PairCounter,
}

impl BpeTrainer {
    /// Create a trainer for the given corpus bytes.
    pub fn new(vocab: &Vocabulary, corpus: &[u8]) -> Self {
        Self {
            sequence: encode_bytes(vocab, corpus),
            counter: PairCounter::new(),
        }
    }

    /// Run the training loop to completion, collecting merge events.
    ///
    /// With `stop_early` set, training stops before applying a merge
    /// whose pair occurs only once in the sequence.
    pub fn train(&mut self, vocab: &mut Vocabulary, stop_early: bool) -> Result<TrainingReport> {
        let mut events = Vec::new();
        self.train_with_observer(vocab, stop_early, |event| events.push(event.clone()))?;

        Ok(TrainingReport {
            events,
            final_vocab_size: vocab.size(),
        })
    }

    /// Training loop with a streaming event sink.
    ///
    /// The sink only observes; dropping events does not change the
    /// outcome. Returns the number of merges performed.
    pub fn train_with_observer(
        &mut self,
        vocab: &mut Vocabulary,
        stop_early: bool,
        mut on_merge: impl FnMut(&MergeEvent),
    ) -> Result<usize> {
        let mut merges = 0;

        while vocab.size() < vocab.max_vocab_size() {
            self.counter.recount(&self.sequence);

            // No pair left to merge (sequence length <= 1)
            let candidate = match self.counter.most_frequent() {
                Some(candidate) => candidate,
                None => break,
            };

            if stop_early && candidate.count == 1 {
                break;
            }

            // Record the rule and rewrite the sequence together; if the
            // rule were rejected, the sequence stays untouched.
            let (new_id, token_bytes) = vocab.add_merge(candidate.pair)?;
            self.sequence = merge_pair(&self.sequence, candidate.pair, new_id);

            on_merge(&MergeEvent {
                pair: candidate.pair,
                new_id,
                token_bytes,
            });
            merges += 1;
        }

        Ok(merges)
    }

    /// Current working sequence.
    pub fn sequence(&self) -> &[u32] {
        &self.sequence
    }
}
