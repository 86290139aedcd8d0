//! Lazy iterator over a generator's full sequence.

use std::marker::PhantomData;

use crate::error::SeqError;
use crate::generator::SequenceGenerator;

/// Lazy iterator over a sequence, seeds first.
///
/// Yields `previous` and `current` as they were when the iterator was
/// created, then one advancement per item. Stops after the first error.
///
/// # Example
/// ```
/// use seqgen_core::iterator::SequenceIter;
/// use seqgen_core::Generator;
///
/// let mut gen = Generator::fibonacci(0u32, 1u32);
/// let fibs: Result<Vec<_>, _> = SequenceIter::new(&mut gen).take(7).collect();
/// assert_eq!(fibs.unwrap(), [0, 1, 1, 2, 3, 5, 8]);
/// ```
pub struct SequenceIter<'a, T, G: ?Sized> {
    gen: &'a mut G,
    seeds_left: usize,
    failed: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: Clone, G: SequenceGenerator<T> + ?Sized> SequenceIter<'a, T, G> {
    #[must_use]
    pub fn new(gen: &'a mut G) -> Self {
        Self {
            gen,
            seeds_left: 2,
            failed: false,
            _marker: PhantomData,
        }
    }
}

impl<T: Clone, G: SequenceGenerator<T> + ?Sized> Iterator for SequenceIter<'_, T, G> {
    type Item = Result<T, SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.seeds_left {
            2 => {
                self.seeds_left = 1;
                Some(Ok(self.gen.previous().clone()))
            }
            1 => {
                self.seeds_left = 0;
                Some(Ok(self.gen.current().clone()))
            }
            _ if self.failed => None,
            _ => {
                let next = self.gen.advance();
                self.failed = next.is_err();
                Some(next)
            }
        }
    }
}
