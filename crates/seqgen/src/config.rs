//! Application configuration from CLI flags and environment.

use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use seqgen_core::Variant;
use seqgen_orchestration::IntRecurrence;

/// SeqGen — two-term sequence generators.
#[derive(Parser, Debug)]
#[command(name = "seqgen", version, about)]
pub struct AppConfig {
    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a sequence with one generator.
    Generate(GenerateArgs),

    /// Run every generator with its demo seeds.
    Demo {
        /// Number of values to generate after the seeds.
        #[arg(
            short = 'n',
            long,
            default_value_t = 5,
            env = "SEQGEN_COUNT",
            allow_negative_numbers = true
        )]
        count: i64,
    },

    /// Move every occurrence of a value to the centre of a list.
    Reorder(ReorderArgs),

    /// Generate shell completion.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments of the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Generator: char, integer, fibonacci, double, or custom.
    #[arg(long, default_value = "fibonacci")]
    pub variant: Variant,

    /// Number of values to generate after the seeds.
    #[arg(
        short = 'n',
        long,
        default_value_t = 5,
        env = "SEQGEN_COUNT",
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// First seed (defaults to the variant's demo seed).
    #[arg(long, allow_hyphen_values = true)]
    pub previous: Option<String>,

    /// Second seed (defaults to the variant's demo seed).
    #[arg(long, allow_hyphen_values = true)]
    pub current: Option<String>,

    /// Custom recurrence `a,b,k` computing `a*previous + b*current + k`.
    #[arg(long, allow_hyphen_values = true)]
    pub formula: Option<LinearFormula>,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments of the `reorder` command.
#[derive(Args, Debug)]
pub struct ReorderArgs {
    /// Comma-separated integers.
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub values: Vec<i64>,

    /// Value to gather in the centre.
    #[arg(long, allow_hyphen_values = true)]
    pub target: i64,
}

/// Linear integer recurrence `a*previous + b*current + k` with wrapping
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearFormula {
    pub a: i32,
    pub b: i32,
    pub k: i32,
}

impl LinearFormula {
    /// Evaluate the formula.
    #[must_use]
    pub fn apply(self, previous: i32, current: i32) -> i32 {
        self.a
            .wrapping_mul(previous)
            .wrapping_add(self.b.wrapping_mul(current))
            .wrapping_add(self.k)
    }

    /// Box the formula as a custom recurrence.
    #[must_use]
    pub fn into_recurrence(self) -> IntRecurrence {
        Box::new(move |p: i32, c: i32| self.apply(p, c))
    }
}

impl FromStr for LinearFormula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid coefficient in {s:?}: {e}"))?;
        match parts[..] {
            [a, b, k] => Ok(Self { a, b, k }),
            _ => Err(format!("expected three coefficients a,b,k, got {}", parts.len())),
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
