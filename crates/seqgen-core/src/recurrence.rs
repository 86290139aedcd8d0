//! Recurrence strategies.
//!
//! A [`Recurrence`] maps the two most recent values of a sequence to the next
//! one. The built-in strategies are stateless unit structs; [`Delegate`] and
//! [`TryDelegate`] wrap caller-supplied closures.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Add;

use num_traits::Float;

use crate::constants::{ALPHABET_LEN, LETTER_BASE};
use crate::error::SeqError;

/// Rule computing the next element from `(previous, current)`.
pub trait Recurrence<T> {
    /// Compute the value that follows `current`.
    fn next_value(&mut self, previous: &T, current: &T) -> Result<T, SeqError>;

    /// Get the name of this recurrence.
    fn name(&self) -> &str;
}

/// Letter sum modulo 26: `'A' + ((p - 'A') + (c - 'A')) mod 26`.
///
/// Only `A..=Z` is accepted; any other letter is reported as
/// [`SeqError::InvalidSeed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSum;

impl LetterSum {
    /// Zero-based alphabet position of `letter`, if it lies in `A..=Z`.
    #[must_use]
    pub fn position(letter: char) -> Option<u32> {
        letter
            .is_ascii_uppercase()
            .then(|| letter as u32 - LETTER_BASE as u32)
    }

    /// Check that `letter` lies in `A..=Z`.
    pub fn validate(letter: char) -> Result<(), SeqError> {
        Self::position(letter)
            .map(|_| ())
            .ok_or(SeqError::InvalidSeed(letter))
    }
}

impl Recurrence<char> for LetterSum {
    fn next_value(&mut self, previous: &char, current: &char) -> Result<char, SeqError> {
        let p = Self::position(*previous).ok_or(SeqError::InvalidSeed(*previous))?;
        let c = Self::position(*current).ok_or(SeqError::InvalidSeed(*current))?;
        let next = (p + c) % ALPHABET_LEN;
        char::from_u32(LETTER_BASE as u32 + next)
            .ok_or_else(|| SeqError::Recurrence(format!("letter position {next} out of range")))
    }

    fn name(&self) -> &'static str {
        "LetterSum"
    }
}

/// Doubling: `current * 2`, computed as `current + current`.
///
/// Overflow follows the element type: plain integers panic when overflow
/// checks are enabled, `std::num::Wrapping` wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Doubling;

impl<T> Recurrence<T> for Doubling
where
    T: Clone + Add<Output = T>,
{
    fn next_value(&mut self, _previous: &T, current: &T) -> Result<T, SeqError> {
        Ok(current.clone() + current.clone())
    }

    fn name(&self) -> &'static str {
        "Doubling"
    }
}

/// Fibonacci sum: `previous + current`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FibonacciSum;

impl<T> Recurrence<T> for FibonacciSum
where
    T: Clone + Add<Output = T>,
{
    fn next_value(&mut self, previous: &T, current: &T) -> Result<T, SeqError> {
        Ok(previous.clone() + current.clone())
    }

    fn name(&self) -> &'static str {
        "FibonacciSum"
    }
}

/// Ratio sum: `current + previous / current`.
///
/// A zero `current` is not guarded and yields infinity or NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatioSum;

impl<T: Float> Recurrence<T> for RatioSum {
    fn next_value(&mut self, previous: &T, current: &T) -> Result<T, SeqError> {
        Ok(*current + *previous / *current)
    }

    fn name(&self) -> &'static str {
        "RatioSum"
    }
}

/// Caller-supplied infallible rule `f(previous, current)`.
#[derive(Clone)]
pub struct Delegate<F> {
    func: F,
}

impl<F> Delegate<F> {
    /// Wrap a recurrence function.
    #[must_use]
    pub fn new(func: F) -> Self {
        Self { func }
    }

    /// Wrap a recurrence function that may be absent.
    ///
    /// `None` is rejected with [`SeqError::InvalidArgument`].
    pub fn from_option(func: Option<F>) -> Result<Self, SeqError> {
        func.map(Self::new).ok_or_else(|| {
            SeqError::InvalidArgument("a custom sequence requires a recurrence function".into())
        })
    }
}

impl<F> fmt::Debug for Delegate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate").finish_non_exhaustive()
    }
}

impl<T, F> Recurrence<T> for Delegate<F>
where
    F: FnMut(&T, &T) -> T,
{
    fn next_value(&mut self, previous: &T, current: &T) -> Result<T, SeqError> {
        Ok((self.func)(previous, current))
    }

    fn name(&self) -> &'static str {
        "Delegate"
    }
}

/// Caller-supplied fallible rule; its error surfaces as
/// [`SeqError::Recurrence`].
pub struct TryDelegate<F, E> {
    func: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> TryDelegate<F, E> {
    /// Wrap a fallible recurrence function.
    #[must_use]
    pub fn new(func: F) -> Self {
        Self {
            func,
            _error: PhantomData,
        }
    }
}

impl<F, E> fmt::Debug for TryDelegate<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryDelegate").finish_non_exhaustive()
    }
}

impl<T, F, E> Recurrence<T> for TryDelegate<F, E>
where
    F: FnMut(&T, &T) -> Result<T, E>,
    E: fmt::Display,
{
    fn next_value(&mut self, previous: &T, current: &T) -> Result<T, SeqError> {
        (self.func)(previous, current).map_err(|e| SeqError::Recurrence(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "TryDelegate"
    }
}
