#![no_main]

use libfuzzer_sys::fuzz_target;

use seqgen_core::Variant;
use seqgen_orchestration::request::{build_variant_sequence, IntRecurrence, SequenceRequest};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let variant = Variant::ALL[usize::from(data[0]) % Variant::ALL.len()];
    // Capped for speed
    let count = i64::from(data[1] % 128) - 16;
    let text = String::from_utf8_lossy(&data[2..]);
    let (previous, current) = text.split_once(',').unwrap_or((text.as_ref(), ""));

    let request = SequenceRequest::new(variant, count, previous, current);
    let recurrence: IntRecurrence = Box::new(|p: i32, c: i32| p.wrapping_sub(c));

    // Arbitrary seeds must never panic, only fail cleanly
    if let Ok(seq) = build_variant_sequence(&request, Some(recurrence)) {
        let expected = usize::try_from(count.max(0)).unwrap_or(0) + 2;
        assert_eq!(seq.len(), expected);
    }
});
