//! Error type shared by every generator and builder.

/// Error type for sequence generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// A required argument was absent or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A letter seed outside `A..=Z`.
    #[error("invalid letter seed {0:?}: expected an uppercase letter A-Z")]
    InvalidSeed(char),

    /// The requested generator variant does not exist.
    #[error("unknown sequence variant: {0}")]
    UnknownVariant(String),

    /// A caller-supplied recurrence failed.
    #[error("recurrence failed: {0}")]
    Recurrence(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_error_display() {
        let err = SeqError::InvalidArgument("missing recurrence".into());
        assert_eq!(err.to_string(), "invalid argument: missing recurrence");

        let err = SeqError::InvalidSeed('a');
        assert_eq!(
            err.to_string(),
            "invalid letter seed 'a': expected an uppercase letter A-Z"
        );

        let err = SeqError::UnknownVariant("zeta".into());
        assert_eq!(err.to_string(), "unknown sequence variant: zeta");
    }

    #[test]
    fn seq_error_recurrence_carries_message() {
        let err = SeqError::Recurrence("division by zero".into());
        assert_eq!(err.to_string(), "recurrence failed: division by zero");
    }
}
