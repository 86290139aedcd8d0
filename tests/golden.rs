//! Golden file integration tests.
//!
//! Reads tests/testdata/sequences_golden.json and verifies every generator
//! variant reproduces the recorded sequences, through both the
//! variant-tagged request API and the typed generators.

use std::num::Wrapping;

use num_bigint::BigUint;
use serde::Deserialize;

use seqgen_core::generator::{Generator, SequenceGenerator};
use seqgen_core::Variant;
use seqgen_orchestration::builder::build_sequence;
use seqgen_orchestration::request::{build_variant_sequence, IntRecurrence, SequenceRequest};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    sequences: Vec<GoldenSequence>,
    big_fibonacci: Vec<GoldenBig>,
}

#[derive(Deserialize)]
struct GoldenSequence {
    variant: Variant,
    count: i64,
    previous: String,
    current: String,
    #[serde(default)]
    recurrence: Option<String>,
    expected: Vec<String>,
}

#[derive(Deserialize)]
struct GoldenBig {
    n: usize,
    value: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/sequences_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn named_recurrence(name: &str) -> IntRecurrence {
    match name {
        "plus_one" => Box::new(|p: i32, c: i32| p + c + 1),
        "lucas" => Box::new(|p: i32, c: i32| p + c),
        _ => panic!("unknown golden recurrence: {name}"),
    }
}

fn request_for(entry: &GoldenSequence) -> SequenceRequest {
    SequenceRequest::new(
        entry.variant,
        entry.count,
        entry.previous.as_str(),
        entry.current.as_str(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_variant_requests() {
    let golden = load_golden_data();

    for entry in &golden.sequences {
        let recurrence = entry.recurrence.as_deref().map(named_recurrence);
        let seq = build_variant_sequence(&request_for(entry), recurrence)
            .unwrap_or_else(|e| panic!("{} {:?} failed: {e}", entry.variant, entry.previous));
        assert_eq!(
            seq.to_strings(),
            entry.expected,
            "{} sequence from ({}, {}) mismatch",
            entry.variant,
            entry.previous,
            entry.current
        );
    }
}

#[test]
fn golden_typed_generators() {
    let golden = load_golden_data();

    for entry in &golden.sequences {
        let values: Vec<String> = match entry.variant {
            Variant::Char => {
                let p = entry.previous.chars().next().unwrap();
                let c = entry.current.chars().next().unwrap();
                let mut gen = Generator::letters(p, c).unwrap();
                to_strings(build_sequence(&mut gen, entry.count).unwrap())
            }
            Variant::Integer => {
                let mut gen = Generator::doubling(wrap(&entry.previous), wrap(&entry.current));
                to_strings(build_sequence(&mut gen, entry.count).unwrap())
            }
            Variant::Fibonacci => {
                let mut gen = Generator::fibonacci(wrap(&entry.previous), wrap(&entry.current));
                to_strings(build_sequence(&mut gen, entry.count).unwrap())
            }
            Variant::Double => {
                let p: f64 = entry.previous.parse().unwrap();
                let c: f64 = entry.current.parse().unwrap();
                to_strings(build_sequence(&mut Generator::ratio(p, c), entry.count).unwrap())
            }
            Variant::Custom => continue,
        };
        assert_eq!(values, entry.expected, "typed {} mismatch", entry.variant);
    }
}

#[test]
fn golden_counts_are_consistent() {
    let golden = load_golden_data();

    for entry in &golden.sequences {
        let advancements = usize::try_from(entry.count.max(0)).unwrap();
        assert_eq!(entry.expected.len(), advancements + 2);
        assert_eq!(entry.expected[0], entry.previous.trim_end_matches(".0"));
    }
}

#[test]
fn golden_big_fibonacci() {
    let golden = load_golden_data();

    for entry in &golden.big_fibonacci {
        let mut gen = Generator::fibonacci(BigUint::from(0u32), BigUint::from(1u32));
        for _ in 1..entry.n {
            gen.advance().unwrap();
        }
        assert_eq!(gen.current().to_string(), entry.value, "F({}) mismatch", entry.n);
        assert_eq!(gen.count(), entry.n + 1);
    }
}

fn wrap(raw: &str) -> Wrapping<i32> {
    Wrapping(raw.parse().unwrap())
}

fn to_strings<T: ToString>(values: Vec<T>) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
