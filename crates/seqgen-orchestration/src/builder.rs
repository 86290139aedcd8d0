//! Sequence builder: seeds followed by `count` advancements.

use std::num::Wrapping;

use tracing::debug;

use seqgen_core::constants::SEED_COUNT;
use seqgen_core::generator::{Generator, SequenceGenerator};
use seqgen_core::SeqError;

use crate::request::unwrap_all;

/// Upper bound on the up-front allocation for a sequence.
const PREALLOC_LIMIT: usize = 4096;

/// Build a sequence from `generator`.
///
/// Returns the two seeds followed by exactly `count` advancements, i.e.
/// `count + 2` values. A non-positive `count` performs no advancement.
/// The first failing advancement aborts the build.
pub fn build_sequence<T, G>(generator: &mut G, count: i64) -> Result<Vec<T>, SeqError>
where
    T: Clone,
    G: SequenceGenerator<T> + ?Sized,
{
    let advancements = if count <= 0 {
        0
    } else {
        usize::try_from(count)
            .map_err(|_| SeqError::InvalidArgument(format!("count {count} is too large")))?
    };

    let mut sequence =
        Vec::with_capacity(advancements.saturating_add(SEED_COUNT).min(PREALLOC_LIMIT));
    sequence.push(generator.previous().clone());
    sequence.push(generator.current().clone());

    for _ in 1..=advancements {
        sequence.push(generator.advance()?);
    }

    debug!(count, len = sequence.len(), "sequence built");
    Ok(sequence)
}

/// Letter sequence from two seeds in `A..=Z`.
pub fn char_sequence(count: i64, previous: char, current: char) -> Result<Vec<char>, SeqError> {
    build_sequence(&mut Generator::letters(previous, current)?, count)
}

/// Doubling integer sequence.
///
/// Values wrap around on `i32` overflow.
pub fn integer_sequence(count: i64, previous: i32, current: i32) -> Result<Vec<i32>, SeqError> {
    let mut gen = Generator::doubling(Wrapping(previous), Wrapping(current));
    Ok(unwrap_all(build_sequence(&mut gen, count)?))
}

/// Fibonacci-style integer sequence.
///
/// Values wrap around on `i32` overflow.
pub fn fibonacci_sequence(count: i64, previous: i32, current: i32) -> Result<Vec<i32>, SeqError> {
    let mut gen = Generator::fibonacci(Wrapping(previous), Wrapping(current));
    Ok(unwrap_all(build_sequence(&mut gen, count)?))
}

/// Ratio-sum floating-point sequence.
pub fn double_sequence(count: i64, previous: f64, current: f64) -> Result<Vec<f64>, SeqError> {
    build_sequence(&mut Generator::ratio(previous, current), count)
}

/// Sequence driven by a caller-supplied recurrence.
pub fn delegate_sequence<T, F>(
    count: i64,
    previous: T,
    current: T,
    next: F,
) -> Result<Vec<T>, SeqError>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    build_sequence(&mut Generator::with_fn(previous, current, next), count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_sequence_from_a_b() {
        let seq = char_sequence(5, 'A', 'B').unwrap();
        assert_eq!(seq, ['A', 'B', 'B', 'C', 'D', 'F', 'I']);
    }

    #[test]
    fn char_sequence_rejects_lowercase() {
        assert_eq!(
            char_sequence(5, 'a', 'b'),
            Err(SeqError::InvalidSeed('a'))
        );
    }

    #[test]
    fn integer_sequence_doubles() {
        assert_eq!(
            integer_sequence(5, 1, 2).unwrap(),
            [1, 2, 4, 8, 16, 32, 64]
        );
    }

    #[test]
    fn integer_sequence_wraps_on_overflow() {
        let seq = integer_sequence(40, 1, 2).unwrap();
        assert_eq!(seq.len(), 42);
        assert_eq!(seq[30], 1 << 30);
        assert_eq!(seq[31], i32::MIN);
        assert!(seq[32..].iter().all(|&v| v == 0));
    }

    #[test]
    fn fibonacci_sequence_wraps_on_overflow() {
        let seq = fibonacci_sequence(50, 0, 1).unwrap();
        assert_eq!(seq.len(), 52);
        assert_eq!(seq[46], 1_836_311_903);
        assert_eq!(seq[47], -1_323_752_223);
        assert_eq!(seq[51], -1_109_825_406);
    }

    #[test]
    fn fibonacci_sequence_from_zero_one() {
        assert_eq!(
            fibonacci_sequence(5, 0, 1).unwrap(),
            [0, 1, 1, 2, 3, 5, 8]
        );
    }

    #[test]
    fn double_sequence_first_values() {
        let seq = double_sequence(2, 1.0, 2.0).unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[2], 2.5);
        assert!((seq[3] - 3.3).abs() < 1e-12);
    }

    #[test]
    fn delegate_sequence_plus_one() {
        let seq = delegate_sequence(5, 1, 2, |p: &i32, c: &i32| p + c + 1).unwrap();
        assert_eq!(seq, [1, 2, 4, 7, 12, 20, 33]);
    }

    #[test]
    fn non_positive_count_returns_seeds_only() {
        for count in [0, -1, i64::MIN] {
            let mut gen = Generator::fibonacci(5, 8);
            let seq = build_sequence(&mut gen, count).unwrap();
            assert_eq!(seq, [5, 8]);
            assert_eq!(gen.count(), 2, "advanced for count {count}");
        }
    }

    #[test]
    fn count_matches_advancements() {
        let mut gen = Generator::doubling(1i64, 1i64);
        let seq = build_sequence(&mut gen, 10).unwrap();
        assert_eq!(seq.len(), 12);
        assert_eq!(gen.count(), 12);
    }

    #[test]
    fn failure_propagates_from_recurrence() {
        let mut gen = Generator::with_try_fn(1, 2, |_: &i32, c: &i32| {
            if *c > 4 {
                Err("too big")
            } else {
                Ok(c + 1)
            }
        });
        let result = build_sequence(&mut gen, 10);
        assert_eq!(result, Err(SeqError::Recurrence("too big".into())));
        assert_eq!(gen.count(), 5);
    }

    #[test]
    fn builds_through_trait_object() {
        let mut gen = Generator::fibonacci(1u64, 1u64);
        let dyn_gen: &mut dyn SequenceGenerator<u64> = &mut gen;
        assert_eq!(build_sequence(dyn_gen, 3).unwrap(), [1, 1, 2, 3, 5]);
    }
}
