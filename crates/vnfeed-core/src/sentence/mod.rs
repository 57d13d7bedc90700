//! `$VNYMR` sentence decoding.
//!
//! The module follows a layered structure:
//! - `layout`: sentence constants and the wire-order field table (source of truth)
//! - `validator`: framing and checksum integrity
//! - `decoder`: semantic field decoding into a [`Reading`](crate::Reading)
//! - `error`: explicit, actionable errors
//!
//! Validation and decoding are pure and contain no I/O; line framing lives
//! in the `source` module and the callers own all transport concerns.

pub mod decoder;
pub mod error;
pub mod layout;
pub mod validator;

pub use decoder::decode;
pub use error::SentenceError;
pub use validator::{ValidatedSentence, checksum, validate};

use crate::Reading;

/// Parse one candidate sentence into a [`Reading`].
///
/// Composes [`validate`] and [`decode`]: framing and checksum integrity
/// first, then field decoding. One call consumes one newline-delimited
/// candidate line; the parser performs no buffering or reassembly.
///
/// # Examples
/// ```
/// use vnfeed_core::parse_sentence;
///
/// let line = "$VNYMR,+104.977,+004.548,-001.276,-00.8012,-02.7376,+01.0070,\
///             +00.837,+00.235,-10.414,-00.002081,-00.001151,+00.002113*61\r\n";
/// let reading = parse_sentence(line)?;
/// assert_eq!(reading.yaw, 104.977);
/// # Ok::<(), vnfeed_core::SentenceError>(())
/// ```
///
/// # Errors
/// Returns the first [`SentenceError`] encountered; malformed input is an
/// expected, per-call condition and never panics.
pub fn parse_sentence(line: &str) -> Result<Reading, SentenceError> {
    decode(&validate(line)?)
}
