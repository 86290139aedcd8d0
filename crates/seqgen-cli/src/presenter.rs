//! CLI result presenter.

use std::time::Duration;

use seqgen_core::Variant;
use seqgen_orchestration::interfaces::SequencePresenter;
use seqgen_orchestration::Sequence;

use crate::output::{
    format_array, format_duration, generator_label, reorder_json, sequence_json,
};
use crate::ui::{label, print_error};

/// CLI result presenter.
pub struct CLISequencePresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CLISequencePresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }

    /// Render a sequence the way `present_sequence` prints it.
    #[must_use]
    pub fn render_sequence(&self, variant: Variant, sequence: &Sequence) -> String {
        if self.json {
            return sequence_json(variant, sequence).unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to serialize sequence");
                String::new()
            });
        }
        if self.quiet {
            return sequence.to_string();
        }
        format!("{}: {sequence}", label(generator_label(variant)))
    }

    /// Render a reorder result the way `present_reorder` prints it.
    #[must_use]
    pub fn render_reorder(&self, input: &[i64], target: i64, output: &[i64]) -> String {
        if self.json {
            return reorder_json(input, target, output).unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to serialize reorder result");
                String::new()
            });
        }
        if self.quiet {
            return format_array(output);
        }
        format!(
            "Input:  {}\nTarget: {target}\nOutput: {}",
            format_array(input),
            format_array(output)
        )
    }
}

impl SequencePresenter for CLISequencePresenter {
    fn present_sequence(&self, variant: Variant, sequence: &Sequence, duration: Duration) {
        println!("{}", self.render_sequence(variant, sequence));
        if self.verbose && !self.quiet && !self.json {
            println!(
                "  {} values in {}",
                sequence.len(),
                format_duration(duration)
            );
        }
    }

    fn present_reorder(&self, input: &[i64], target: i64, output: &[i64]) {
        println!("{}", self.render_reorder(input, target, output));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
