/// Local precondition checks, run before any request goes out
use thiserror::Error;

/// Largest number of names the bulk lookup endpoint accepts per call.
pub const MAX_BATCH_SIZE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Player name cannot be empty")]
    NameEmpty,

    #[error("Not more than {max} profile names per call are allowed (got {actual})")]
    BatchTooLarge { max: usize, actual: usize },

    #[error("User {0} has no resolved uuid")]
    MissingUuid(String),

    #[error("'{0}' cannot be used as a path segment")]
    ReservedSegment(String),

    #[error("Base URL '{0}' cannot take path segments")]
    InvalidBaseUrl(String),
}

/// Validates a player name used as a lookup key
///
/// Rules:
/// - Cannot be empty
pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::NameEmpty);
    }

    Ok(())
}

/// Validates a name or uuid placed into a request path
///
/// Rules:
/// - Cannot be `.` or `..` (other characters are percent-encoded)
pub fn validate_path_segment(segment: &str) -> Result<(), ValidationError> {
    if matches!(segment, "." | "..") {
        return Err(ValidationError::ReservedSegment(segment.to_string()));
    }

    Ok(())
}

/// Validates a list of names for the bulk uuid lookup
///
/// Rules:
/// - Max 10 names per request (remote limit)
pub fn validate_batch<S: AsRef<str>>(names: &[S]) -> Result<(), ValidationError> {
    if names.len() > MAX_BATCH_SIZE {
        return Err(ValidationError::BatchTooLarge {
            max: MAX_BATCH_SIZE,
            actual: names.len(),
        });
    }

    Ok(())
}
