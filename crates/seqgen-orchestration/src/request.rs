//! Variant-tagged sequence requests with textual seeds.
//!
//! Integer variants here use wrapping 32-bit arithmetic so that long runs
//! never panic on overflow.

use std::fmt;
use std::num::Wrapping;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use seqgen_core::generator::Generator;
use seqgen_core::{SeqError, Variant};

use crate::builder::build_sequence;

/// Integer recurrence supplied for the [`Variant::Custom`] variant.
pub type IntRecurrence = Box<dyn FnMut(i32, i32) -> i32>;

/// A sequence request: variant, advancement count, and textual seeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceRequest {
    /// Generator variant.
    pub variant: Variant,
    /// Number of advancements; non-positive means seeds only.
    pub count: i64,
    /// First seed.
    pub previous: String,
    /// Second seed.
    pub current: String,
}

impl SequenceRequest {
    /// Create a request.
    #[must_use]
    pub fn new(
        variant: Variant,
        count: i64,
        previous: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self {
            variant,
            count,
            previous: previous.into(),
            current: current.into(),
        }
    }
}

/// A built sequence, typed by its variant's element type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sequence {
    /// Letters from the character variant.
    Letters(Vec<char>),
    /// Integers from the doubling, Fibonacci, and custom variants.
    Integers(Vec<i32>),
    /// Floating-point values from the ratio variant.
    Doubles(Vec<f64>),
}

impl Sequence {
    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Sequence::Letters(v) => v.len(),
            Sequence::Integers(v) => v.len(),
            Sequence::Doubles(v) => v.len(),
        }
    }

    /// Whether the sequence holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render each value with its `Display` form.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Sequence::Letters(v) => v.iter().map(ToString::to_string).collect(),
            Sequence::Integers(v) => v.iter().map(ToString::to_string).collect(),
            Sequence::Doubles(v) => v.iter().map(ToString::to_string).collect(),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strings().join(", "))
    }
}

fn parse_seed<T: FromStr>(raw: &str, what: &str) -> Result<T, SeqError> {
    raw.trim()
        .parse()
        .map_err(|_| SeqError::InvalidArgument(format!("invalid {what} seed: {raw:?}")))
}

fn parse_letter(raw: &str) -> Result<char, SeqError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SeqError::InvalidArgument(format!(
            "invalid letter seed: {raw:?} (expected a single character)"
        ))),
    }
}

pub(crate) fn unwrap_all(values: Vec<Wrapping<i32>>) -> Vec<i32> {
    values.into_iter().map(|w| w.0).collect()
}

/// Build the sequence described by `request`.
///
/// `recurrence` is required for [`Variant::Custom`] and ignored otherwise.
pub fn build_variant_sequence(
    request: &SequenceRequest,
    recurrence: Option<IntRecurrence>,
) -> Result<Sequence, SeqError> {
    let SequenceRequest {
        variant,
        count,
        previous,
        current,
    } = request;
    let count = *count;
    debug!(%variant, count, "building variant sequence");

    if recurrence.is_some() && !variant.requires_recurrence() {
        warn!(%variant, "recurrence function ignored for built-in variant");
    }

    let sequence = match variant {
        Variant::Char => {
            let mut gen = Generator::letters(parse_letter(previous)?, parse_letter(current)?)?;
            Sequence::Letters(build_sequence(&mut gen, count)?)
        }
        Variant::Integer => {
            let mut gen = Generator::doubling(
                Wrapping(parse_seed::<i32>(previous, "integer")?),
                Wrapping(parse_seed::<i32>(current, "integer")?),
            );
            Sequence::Integers(unwrap_all(build_sequence(&mut gen, count)?))
        }
        Variant::Fibonacci => {
            let mut gen = Generator::fibonacci(
                Wrapping(parse_seed::<i32>(previous, "integer")?),
                Wrapping(parse_seed::<i32>(current, "integer")?),
            );
            Sequence::Integers(unwrap_all(build_sequence(&mut gen, count)?))
        }
        Variant::Double => {
            let mut gen = Generator::ratio(
                parse_seed::<f64>(previous, "floating-point")?,
                parse_seed::<f64>(current, "floating-point")?,
            );
            Sequence::Doubles(build_sequence(&mut gen, count)?)
        }
        Variant::Custom => {
            let rule = recurrence.map(|mut f| {
                move |p: &Wrapping<i32>, c: &Wrapping<i32>| Wrapping(f(p.0, c.0))
            });
            let mut gen = Generator::with_optional_fn(
                Wrapping(parse_seed::<i32>(previous, "integer")?),
                Wrapping(parse_seed::<i32>(current, "integer")?),
                rule,
            )?;
            Sequence::Integers(unwrap_all(build_sequence(&mut gen, count)?))
        }
    };

    Ok(sequence)
}
