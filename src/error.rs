use thiserror::Error;

/// Classification of every domain failure the codec reports.
///
/// Kinds are composable with context: the message of an [`Error::Codec`] always ends
/// with the kind's display text, e.g. `"decode_int8: requires float64 value in range
/// of int8: invalid range"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// The JSON value's shape did not match what a decoder or constructor required.
    #[error("invalid type")]
    InvalidType,

    /// Right shape but semantically unacceptable (fractional integer, mismatched tag).
    #[error("invalid value")]
    InvalidValue,

    /// Numeric value outside the destination type's range.
    #[error("invalid range")]
    InvalidRange,

    /// String payload failed parsing, or a map was missing required keys.
    #[error("invalid format")]
    InvalidFormat,

    /// No decoder registered for the named type.
    #[error("unknown type")]
    UnknownType,
}

/// Error returned by every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A classified codec failure.
    #[error("{message}")]
    Codec { kind: ErrorKind, message: String },

    /// Malformed JSON or a value with no JSON encoding; never reclassified.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Builds `"<context>: <kind>"`.
    pub fn new(kind: ErrorKind, context: impl AsRef<str>) -> Self {
        let context = context.as_ref();
        let message = if context.is_empty() {
            kind.to_string()
        } else {
            format!("{context}: {kind}")
        };
        Error::Codec { kind, message }
    }

    /// Builds `"unknown type: <name>"`.
    pub fn unknown_type(name: impl AsRef<str>) -> Self {
        Error::Codec {
            kind: ErrorKind::UnknownType,
            message: format!("{}: {}", ErrorKind::UnknownType, name.as_ref()),
        }
    }

    /// `InvalidType` with `context`.
    pub fn invalid_type(context: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::InvalidType, context)
    }

    /// `InvalidValue` with `context`.
    pub fn invalid_value(context: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::InvalidValue, context)
    }

    /// `InvalidRange` with `context`.
    pub fn invalid_range(context: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::InvalidRange, context)
    }

    /// `InvalidFormat` with `context`.
    pub fn invalid_format(context: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::InvalidFormat, context)
    }

    /// The classification, or `None` for passthrough JSON errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Codec { kind, .. } => Some(*kind),
            Error::Json(_) => None,
        }
    }

    /// Whether this is a codec error of `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Prepends `"<prefix>: "` to a codec message. JSON errors pass through unchanged.
    pub fn with_prefix(self, prefix: &str) -> Self {
        match self {
            Error::Codec { kind, message } => Error::Codec {
                kind,
                message: format!("{prefix}: {message}"),
            },
            json => json,
        }
    }
}
