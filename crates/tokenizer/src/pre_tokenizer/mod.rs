//! Pre-tokenization: splitting input around special-token literals.

pub mod split;

pub use split::{Span, SpecialSplitter};
