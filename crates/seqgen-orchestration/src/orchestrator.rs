//! Request execution and the all-variants demo run.

use std::time::Instant;

use tracing::{info_span, warn};

use seqgen_core::Variant;

use crate::interfaces::SequenceOutcome;
use crate::request::{build_variant_sequence, IntRecurrence, SequenceRequest};

/// Execute one request, timing the build.
pub fn execute_request(
    request: &SequenceRequest,
    recurrence: Option<IntRecurrence>,
) -> SequenceOutcome {
    let _span = info_span!("sequence", variant = %request.variant, count = request.count).entered();
    let start = Instant::now();
    let outcome = build_variant_sequence(request, recurrence);
    let duration = start.elapsed();

    if let Err(e) = &outcome {
        warn!(error = %e, "sequence build failed");
    }

    SequenceOutcome {
        variant: request.variant,
        outcome,
        duration,
    }
}

/// Seeds used by the demo run for `variant`.
#[must_use]
pub fn demo_seeds(variant: Variant) -> (&'static str, &'static str) {
    match variant {
        Variant::Char => ("A", "B"),
        Variant::Integer | Variant::Custom => ("1", "2"),
        Variant::Fibonacci => ("0", "1"),
        Variant::Double => ("1.0", "2.0"),
    }
}

/// Recurrence used by the demo run for the custom variant: `p + c + 1`.
#[must_use]
pub fn demo_recurrence() -> IntRecurrence {
    Box::new(|p: i32, c: i32| p.wrapping_add(c).wrapping_add(1))
}

/// Run every variant once with its demo seeds.
pub fn execute_demo(count: i64) -> Vec<SequenceOutcome> {
    Variant::ALL
        .into_iter()
        .map(|variant| {
            let (previous, current) = demo_seeds(variant);
            let request = SequenceRequest::new(variant, count, previous, current);
            let recurrence = variant.requires_recurrence().then(demo_recurrence);
            execute_request(&request, recurrence)
        })
        .collect()
}
