//! CLI output formatting.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use seqgen_core::Variant;
use seqgen_orchestration::Sequence;

/// JSON record for a built sequence.
#[derive(Debug, Serialize)]
pub struct SequenceReport<'a> {
    pub variant: Variant,
    pub generator: &'static str,
    pub len: usize,
    pub values: &'a Sequence,
}

/// JSON record for a reorder run.
#[derive(Debug, Serialize)]
pub struct ReorderReport<'a> {
    pub input: &'a [i64],
    pub target: i64,
    pub output: &'a [i64],
}

/// Display name of the generator behind `variant`.
#[must_use]
pub fn generator_label(variant: Variant) -> &'static str {
    match variant {
        Variant::Char => "CharSequenceGenerator",
        Variant::Integer => "IntegerSequenceGenerator",
        Variant::Fibonacci => "FibonacciSequenceGenerator",
        Variant::Double => "DoubleSequenceGenerator",
        Variant::Custom => "DelegateSequenceGenerator",
    }
}

/// Join values with `", "`.
#[must_use]
pub fn format_values<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format values as a bracketed list, e.g. `[1, 2, 3]`.
#[must_use]
pub fn format_array<T: Display>(values: &[T]) -> String {
    format!("[{}]", format_values(values))
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Serialize a sequence report as JSON.
pub fn sequence_json(variant: Variant, sequence: &Sequence) -> serde_json::Result<String> {
    serde_json::to_string(&SequenceReport {
        variant,
        generator: generator_label(variant),
        len: sequence.len(),
        values: sequence,
    })
}

/// Serialize a reorder report as JSON.
pub fn reorder_json(input: &[i64], target: i64, output: &[i64]) -> serde_json::Result<String> {
    serde_json::to_string(&ReorderReport {
        input,
        target,
        output,
    })
}

/// Write text to a file, followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    Ok(())
}
