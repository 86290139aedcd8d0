#![no_main]

use libfuzzer_sys::fuzz_target;

use seqgen_core::reorder::move_to_center;

fuzz_target!(|data: &[u8]| {
    let Some((&target, values)) = data.split_first() else {
        return;
    };
    // Small alphabet so the target actually occurs
    let values: Vec<u8> = values.iter().map(|v| v % 8).collect();
    let target = target % 8;

    let out = move_to_center(&values, &target);
    assert_eq!(out.len(), values.len());

    let others: Vec<u8> = values.iter().copied().filter(|v| *v != target).collect();
    let out_others: Vec<u8> = out.iter().copied().filter(|v| *v != target).collect();
    assert_eq!(others, out_others, "non-target order changed");

    let k = values.len() - others.len();
    let left = others.len() / 2;
    assert!(out[left..left + k].iter().all(|v| *v == target));
});
