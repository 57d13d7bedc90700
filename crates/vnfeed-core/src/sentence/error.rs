use thiserror::Error;

/// Errors returned by `$VNYMR` sentence validation and field decoding.
///
/// Every rejection reason is a distinct variant carrying enough context to
/// diagnose the offending line; the parser never collapses them into a
/// generic failure and never panics on malformed input.
///
/// # Examples
/// ```
/// use vnfeed_core::SentenceError;
///
/// let err = SentenceError::ChecksumMismatch { expected: 0x61, actual: 0x60 };
/// assert!(err.to_string().contains("checksum mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum SentenceError {
    #[error("malformed frame: expected exactly one '*' delimiter, found {found}")]
    MalformedFrame { found: usize },
    #[error("checksum field is not two hex digits: {found:?}")]
    ChecksumFormat { found: String },
    #[error("checksum mismatch: computed {expected:#04x}, declared {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("unexpected sentence type: {got:?}")]
    UnexpectedSentenceType { got: String },
    #[error("field count mismatch: expected {expected} tokens, got {got}")]
    FieldCountMismatch { expected: usize, got: usize },
    #[error("field {field} could not be parsed from {token:?}: {source}")]
    FieldParse {
        field: &'static str,
        token: String,
        source: std::num::ParseFloatError,
    },
}
