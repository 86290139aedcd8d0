//! Constants shared across generators and the command-line front-end.

/// Number of letters in the alphabet used by the character generator.
pub const ALPHABET_LEN: u32 = 26;

/// First letter of the character generator's alphabet.
pub const LETTER_BASE: char = 'A';

/// Number of seed values every generator starts from.
pub const SEED_COUNT: usize = 2;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
}
