//! Orchestration interfaces.

use std::time::Duration;

use seqgen_core::{SeqError, Variant};

use crate::request::Sequence;

/// Trait for presenting results to the user.
pub trait SequencePresenter {
    /// Present a built sequence.
    fn present_sequence(&self, variant: Variant, sequence: &Sequence, duration: Duration);

    /// Present the result of a reorder run.
    fn present_reorder(&self, input: &[i64], target: i64, output: &[i64]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single sequence request.
#[derive(Debug, Clone)]
pub struct SequenceOutcome {
    /// Variant that was requested.
    pub variant: Variant,
    /// The built sequence or a structured error.
    pub outcome: Result<Sequence, SeqError>,
    /// Build duration.
    pub duration: Duration,
}

impl SequenceOutcome {
    /// Send this outcome to `presenter`.
    pub fn present(&self, presenter: &dyn SequencePresenter) {
        match &self.outcome {
            Ok(sequence) => presenter.present_sequence(self.variant, sequence, self.duration),
            Err(e) => presenter.present_error(&format!("{}: {e}", self.variant)),
        }
    }
}
