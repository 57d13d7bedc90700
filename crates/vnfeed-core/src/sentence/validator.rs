use super::error::SentenceError;
use super::layout;

/// A sentence that passed framing and checksum validation.
///
/// Tokens borrow from the input line; token 0 is the sentence identifier
/// (also exposed as `identifier`). Semantic decoding is left to the decoder.
#[derive(Debug)]
pub struct ValidatedSentence<'a> {
    pub identifier: &'a str,
    pub tokens: Vec<&'a str>,
}

/// Validate framing and checksum of one candidate sentence.
///
/// The checksum basis is every byte strictly between `$` and `*`; the
/// declared checksum is exactly the first two hex digits after `*`. Any
/// bytes after those two digits (the transport's line terminator) are
/// ignored.
///
/// # Errors
/// - `MalformedFrame` when the line does not contain exactly one `*`.
/// - `ChecksumFormat` when the two characters after `*` are missing or not
///   hex digits.
/// - `ChecksumMismatch` when the declared checksum differs from the
///   computed one; both values are carried for diagnostics.
pub fn validate(line: &str) -> Result<ValidatedSentence<'_>, SentenceError> {
    let parts: Vec<&str> = line.split(layout::CHECKSUM_DELIMITER).collect();
    if parts.len() != 2 {
        return Err(SentenceError::MalformedFrame {
            found: parts.len() - 1,
        });
    }

    // Basis excludes the leading '$' and the '*'.
    let basis = parts[0].get(1..).unwrap_or_default();
    let computed = checksum(basis.as_bytes());

    let declared = parse_declared_checksum(parts[1])?;
    if declared != computed {
        return Err(SentenceError::ChecksumMismatch {
            expected: computed,
            actual: declared,
        });
    }

    let tokens: Vec<&str> = parts[0].split(layout::FIELD_DELIMITER).collect();
    Ok(ValidatedSentence {
        identifier: tokens[0],
        tokens,
    })
}

/// XOR of all bytes in the checksum basis, initial value 0.
///
/// # Examples
/// ```
/// use vnfeed_core::sentence::checksum;
///
/// assert_eq!(checksum(b""), 0);
/// assert_eq!(checksum(b"ab"), b'a' ^ b'b');
/// ```
pub fn checksum(basis: &[u8]) -> u8 {
    basis.iter().fold(0u8, |acc, byte| acc ^ byte)
}

fn parse_declared_checksum(after_delimiter: &str) -> Result<u8, SentenceError> {
    let digits =
        after_delimiter
            .get(..layout::CHECKSUM_HEX_LEN)
            .ok_or_else(|| SentenceError::ChecksumFormat {
                found: after_delimiter.to_string(),
            })?;
    u8::from_str_radix(digits, 16).map_err(|_| SentenceError::ChecksumFormat {
        found: digits.to_string(),
    })
}
