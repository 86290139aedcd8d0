//! Error handling and exit codes.

use seqgen_core::constants::exit_codes;
use seqgen_core::SeqError;

/// Map a sequence error to its exit code.
pub fn handle_error(err: &SeqError) -> i32 {
    match err {
        SeqError::InvalidArgument(_) | SeqError::InvalidSeed(_) | SeqError::UnknownVariant(_) => {
            exit_codes::ERROR_CONFIG
        }
        SeqError::Recurrence(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SeqError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
