//! Property-based tests for variant-tagged sequence building.

use std::num::Wrapping;

use proptest::prelude::*;

use seqgen_core::generator::Generator;
use seqgen_core::Variant;
use seqgen_lib::config::LinearFormula;
use seqgen_orchestration::builder::{build_sequence, delegate_sequence, fibonacci_sequence};
use seqgen_orchestration::request::{build_variant_sequence, Sequence, SequenceRequest};

fn variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Every variant yields count + 2 values for positive counts and 2 otherwise.
    #[test]
    fn length_is_count_plus_two(v in variant(), count in -20i64..60) {
        let (p, c) = match v {
            Variant::Char => ("C", "Q"),
            Variant::Double => ("1.5", "0.5"),
            _ => ("3", "-2"),
        };
        let req = SequenceRequest::new(v, count, p, c);
        let recurrence = LinearFormula { a: 2, b: -1, k: 3 }.into_recurrence();
        let seq = build_variant_sequence(&req, Some(recurrence)).unwrap();
        let expected = usize::try_from(count.max(0)).unwrap() + 2;
        prop_assert_eq!(seq.len(), expected);
    }

    /// The tagged Fibonacci variant agrees with the typed builder without overflow.
    #[test]
    fn tagged_matches_typed(p in -100i32..100, c in -100i32..100, count in 0i64..20) {
        let req = SequenceRequest::new(Variant::Fibonacci, count, p.to_string(), c.to_string());
        let tagged = build_variant_sequence(&req, None).unwrap();
        let typed = fibonacci_sequence(count, p, c).unwrap();
        prop_assert_eq!(tagged, Sequence::Integers(typed));
    }

    /// A custom formula equal to Fibonacci matches the built-in generator under wrapping.
    #[test]
    fn custom_fibonacci_formula(p in any::<i32>(), c in any::<i32>(), count in 0i64..50) {
        let add = |a: &Wrapping<i32>, b: &Wrapping<i32>| *a + *b;
        let custom = delegate_sequence(count, Wrapping(p), Wrapping(c), add).unwrap();
        let mut gen = Generator::fibonacci(Wrapping(p), Wrapping(c));
        let builtin = build_sequence(&mut gen, count).unwrap();
        prop_assert_eq!(custom, builtin);
    }
}
