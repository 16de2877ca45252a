//! Merge application over ID sequences.

pub mod byte_level;

pub use byte_level::{encode_bytes, merge_pair, merge_pass};
