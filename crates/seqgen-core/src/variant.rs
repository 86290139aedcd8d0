//! Generator variant names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeqError;

/// Built-in generator variants, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Letters `A..=Z`, sum of positions modulo 26.
    Char,
    /// Integers, doubling the current value.
    Integer,
    /// Integers, sum of the two most recent values.
    Fibonacci,
    /// Floating point, `current + previous / current`.
    Double,
    /// Caller-supplied recurrence.
    Custom,
}

impl Variant {
    /// Every variant, in presentation order.
    pub const ALL: [Variant; 5] = [
        Variant::Char,
        Variant::Integer,
        Variant::Fibonacci,
        Variant::Double,
        Variant::Custom,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::Char => "char",
            Variant::Integer => "integer",
            Variant::Fibonacci => "fibonacci",
            Variant::Double => "double",
            Variant::Custom => "custom",
        }
    }

    /// Whether the variant needs a caller-supplied recurrence.
    #[must_use]
    pub fn requires_recurrence(self) -> bool {
        matches!(self, Variant::Custom)
    }

    /// List all canonical names.
    #[must_use]
    pub fn available() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.name()).collect()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "char" | "letter" => Ok(Variant::Char),
            "integer" | "int" | "doubling" => Ok(Variant::Integer),
            "fibonacci" | "fib" => Ok(Variant::Fibonacci),
            "double" | "ratio" => Ok(Variant::Double),
            "custom" | "delegate" => Ok(Variant::Custom),
            _ => Err(SeqError::UnknownVariant(s.to_string())),
        }
    }
}
