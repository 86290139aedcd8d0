//! # seqgen-core
//!
//! Core library for SeqGen: stateful two-term sequence generators and the
//! recurrence strategies that drive them, plus a stable array reordering
//! utility.

pub mod constants;
pub mod error;
pub mod generator;
pub mod iterator;
pub mod recurrence;
pub mod reorder;
pub mod variant;

// Re-exports
pub use constants::{exit_codes, ALPHABET_LEN, SEED_COUNT};
pub use error::SeqError;
pub use generator::{
    CharSequenceGenerator, DelegateSequenceGenerator, DoubleSequenceGenerator,
    FibonacciSequenceGenerator, Generator, IntegerSequenceGenerator, SequenceGenerator,
};
pub use recurrence::{
    Delegate, Doubling, FibonacciSum, LetterSum, RatioSum, Recurrence, TryDelegate,
};
pub use reorder::move_to_center;
pub use variant::Variant;
