//! Stable reordering that gathers every occurrence of a target value in the
//! middle of a slice.

use tracing::debug;

/// Move every element equal to `target` to the centre.
///
/// The output holds the first `(n - k) / 2` other elements, then all `k`
/// target elements, then the remaining other elements. Relative order of
/// the other elements is preserved.
///
/// # Example
/// ```
/// use seqgen_core::move_to_center;
/// let out = move_to_center(&[1, 2, 3, 6, 2, 4, 5, 6, 5], &6);
/// assert_eq!(out, [1, 2, 3, 6, 6, 2, 4, 5, 5]);
/// ```
#[must_use]
pub fn move_to_center<T: PartialEq + Clone>(values: &[T], target: &T) -> Vec<T> {
    let (matches, others): (Vec<&T>, Vec<&T>) = values.iter().partition(|v| *v == target);
    let left = others.len() / 2;
    debug!(
        len = values.len(),
        matches = matches.len(),
        left,
        "reordering around target"
    );

    others[..left]
        .iter()
        .chain(&matches)
        .chain(&others[left..])
        .map(|&v| v.clone())
        .collect()
}
