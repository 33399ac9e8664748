use thiserror::Error;

/// Rejected argument.
///
/// Every variant describes an invalid input handed to the library;
/// there is nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected a table of options, but got: {0}")]
    NotATable(String),

    #[error("expected memorizable to be boolean, but got: {0}")]
    MemorizableNotBoolean(String),

    #[error("expected length to be an integer, but got: {0}")]
    LengthNotInteger(String),

    #[error("expected length > 0, but got: {0}")]
    LengthNotPositive(i64),

    #[error("expected length <= {max}, but got: {0}", max = crate::options::MAX_LENGTH)]
    LengthTooLarge(u64),

    #[error("expected verbosity to be an integer in 0..=255, but got: {0}")]
    VerbosityOutOfRange(String),

    #[error("expected a non-empty character set, but got an empty one")]
    EmptySample,

    #[error("character set {0:?} contains only ambiguous characters")]
    NoUnambiguousCharacter(Vec<char>),
}
