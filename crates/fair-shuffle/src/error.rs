//! Error type shared by every fallible operation in the crate

/// Errors raised at the construction and shuffle boundaries.
///
/// All of them are detected before any generator state exists, so a failed
/// call never leaves a partially shuffled result behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShuffleError {
    /// The items handed to the constructor are not empty, a scalar, a list
    /// or a tuple.
    InvalidArgument(String),
    /// The hash is not exactly [`HASH_LENGTH`](crate::HASH_LENGTH) bytes.
    InvalidHashLength { expected: usize, actual: usize },
    /// A hex-encoded hash could not be decoded.
    InvalidHex(String),
    /// A serialized shuffle record could not be read or written.
    InvalidRecord(String),
}

impl core::fmt::Display for ShuffleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShuffleError::InvalidArgument(reason) => {
                write!(f, "invalid argument: {}", reason)
            }
            ShuffleError::InvalidHashLength { expected, actual } => write!(
                f,
                "invalid blockchain hash value - must be {} bytes, got {}",
                expected, actual
            ),
            ShuffleError::InvalidHex(reason) => write!(f, "invalid hex hash: {}", reason),
            ShuffleError::InvalidRecord(reason) => write!(f, "invalid shuffle record: {}", reason),
        }
    }
}

impl std::error::Error for ShuffleError {}

impl From<hex::FromHexError> for ShuffleError {
    fn from(e: hex::FromHexError) -> Self {
        ShuffleError::InvalidHex(e.to_string())
    }
}

impl From<serde_json::Error> for ShuffleError {
    fn from(e: serde_json::Error) -> Self {
        ShuffleError::InvalidRecord(e.to_string())
    }
}
