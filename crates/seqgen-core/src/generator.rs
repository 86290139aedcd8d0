//! Sequence generator trait and the shared `Generator` state holder.
//!
//! `SequenceGenerator` is the public trait consumed by the builder.
//! `Generator` pairs the shared two-term state with a per-variant
//! [`Recurrence`]; the constructors below fix the recurrence for each
//! built-in variant.

use std::fmt;
use std::ops::Add;

use num_traits::Float;
use tracing::{debug, trace, warn};

use crate::constants::SEED_COUNT;
use crate::error::SeqError;
use crate::recurrence::{
    Delegate, Doubling, FibonacciSum, LetterSum, RatioSum, Recurrence, TryDelegate,
};

/// Trait for stateful two-term sequence generators.
pub trait SequenceGenerator<T> {
    /// The value produced before `current`.
    fn previous(&self) -> &T;

    /// The most recently produced (or seeded) value.
    fn current(&self) -> &T;

    /// Number of values produced so far, seeds included.
    fn count(&self) -> usize;

    /// Compute the next value and shift the state forward by one.
    ///
    /// On failure the state is left untouched.
    fn advance(&mut self) -> Result<T, SeqError>;
}

/// Letter generator: sum of alphabet positions modulo 26.
pub type CharSequenceGenerator = Generator<char, LetterSum>;
/// Integer generator that doubles the current value.
pub type IntegerSequenceGenerator = Generator<i32, Doubling>;
/// Integer generator summing the two most recent values.
pub type FibonacciSequenceGenerator = Generator<i32, FibonacciSum>;
/// Floating-point generator computing `current + previous / current`.
pub type DoubleSequenceGenerator = Generator<f64, RatioSum>;
/// Generator driven by a caller-supplied function.
pub type DelegateSequenceGenerator<T, F> = Generator<T, Delegate<F>>;

/// Two-term generator state advanced by a recurrence strategy.
pub struct Generator<T, R> {
    previous: T,
    current: T,
    count: usize,
    recurrence: R,
}

impl<T, R: Recurrence<T>> Generator<T, R> {
    /// Create a generator from two seeds and a recurrence.
    #[must_use]
    pub fn new(previous: T, current: T, recurrence: R) -> Self {
        debug!(recurrence = recurrence.name(), "generator created");
        Self {
            previous,
            current,
            count: SEED_COUNT,
            recurrence,
        }
    }
}

impl Generator<char, LetterSum> {
    /// Create a letter generator.
    ///
    /// Both seeds must be uppercase ASCII letters.
    pub fn letters(previous: char, current: char) -> Result<Self, SeqError> {
        for seed in [previous, current] {
            if let Err(e) = LetterSum::validate(seed) {
                warn!(seed = %seed.escape_debug(), "rejected letter seed");
                return Err(e);
            }
        }
        Ok(Self::new(previous, current, LetterSum))
    }
}

impl<T: Clone + Add<Output = T>> Generator<T, Doubling> {
    /// Create a doubling generator.
    #[must_use]
    pub fn doubling(previous: T, current: T) -> Self {
        Self::new(previous, current, Doubling)
    }
}

impl<T: Clone + Add<Output = T>> Generator<T, FibonacciSum> {
    /// Create a Fibonacci-style generator.
    #[must_use]
    pub fn fibonacci(previous: T, current: T) -> Self {
        Self::new(previous, current, FibonacciSum)
    }
}

impl<T: Float> Generator<T, RatioSum> {
    /// Create a ratio-sum generator.
    #[must_use]
    pub fn ratio(previous: T, current: T) -> Self {
        Self::new(previous, current, RatioSum)
    }
}

impl<T, F> Generator<T, Delegate<F>>
where
    F: FnMut(&T, &T) -> T,
{
    /// Create a generator driven by `func`.
    #[must_use]
    pub fn with_fn(previous: T, current: T, func: F) -> Self {
        Self::new(previous, current, Delegate::new(func))
    }

    /// Create a generator from a recurrence function that may be absent.
    ///
    /// Fails with [`SeqError::InvalidArgument`] when `func` is `None`.
    pub fn with_optional_fn(previous: T, current: T, func: Option<F>) -> Result<Self, SeqError> {
        let recurrence = Delegate::from_option(func).inspect_err(|_| {
            warn!("custom generator constructed without a recurrence function");
        })?;
        Ok(Self::new(previous, current, recurrence))
    }
}

impl<T, F, E> Generator<T, TryDelegate<F, E>>
where
    F: FnMut(&T, &T) -> Result<T, E>,
    E: fmt::Display,
{
    /// Create a generator driven by a fallible `func`.
    #[must_use]
    pub fn with_try_fn(previous: T, current: T, func: F) -> Self {
        Self::new(previous, current, TryDelegate::new(func))
    }
}

impl<T: Clone, R: Recurrence<T>> SequenceGenerator<T> for Generator<T, R> {
    fn previous(&self) -> &T {
        &self.previous
    }

    fn current(&self) -> &T {
        &self.current
    }

    fn count(&self) -> usize {
        self.count
    }

    fn advance(&mut self) -> Result<T, SeqError> {
        let next = self.recurrence.next_value(&self.previous, &self.current)?;
        self.previous = std::mem::replace(&mut self.current, next.clone());
        self.count += 1;
        trace!(count = self.count, "generator advanced");
        Ok(next)
    }
}

impl<T: fmt::Debug, R: Recurrence<T>> fmt::Debug for Generator<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("previous", &self.previous)
            .field("current", &self.current)
            .field("count", &self.count)
            .field("recurrence", &self.recurrence.name())
            .finish()
    }
}
