use thiserror::Error;

/// Reasons a feeder-settings line can be rejected.
///
/// Decoding is all-or-nothing: the first offending token aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("line does not contain an M620 settings payload")]
    MalformedLine,

    #[error("unknown tag '{0}'")]
    UnknownTag(char),

    #[error("invalid value '{raw}' for tag '{tag}'")]
    InvalidValue { tag: char, raw: String },

    #[error("missing feeder index (N tag)")]
    MissingFeederIndex,
}

/// Stream-level errors from the newline-framed codec.
///
/// A line that frames correctly but fails to decode is not a `FrameError`;
/// it is yielded as an item so the stream keeps going.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line exceeds maximum length of {max} bytes")]
    LineTooLong { max: usize },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
