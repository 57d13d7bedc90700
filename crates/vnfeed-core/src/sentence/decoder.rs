use super::error::SentenceError;
use super::layout;
use super::validator::ValidatedSentence;
use crate::Reading;

/// Decode the payload tokens of a validated sentence into a [`Reading`].
///
/// Tokens 1..=12 are decoded in wire order against the fixed field-name
/// table; the first token that fails to parse wins and no partial Reading
/// is ever produced.
///
/// # Errors
/// - `UnexpectedSentenceType` when token 0 is not `$VNYMR`.
/// - `FieldCountMismatch` when the token count is not 13.
/// - `FieldParse` naming the first field whose text is not a valid decimal
///   float.
pub fn decode(sentence: &ValidatedSentence<'_>) -> Result<Reading, SentenceError> {
    if sentence.identifier != layout::SENTENCE_ID {
        return Err(SentenceError::UnexpectedSentenceType {
            got: sentence.identifier.to_string(),
        });
    }
    if sentence.tokens.len() != layout::TOKEN_COUNT {
        return Err(SentenceError::FieldCountMismatch {
            expected: layout::TOKEN_COUNT,
            got: sentence.tokens.len(),
        });
    }

    let mut values = [0f64; 12];
    for (slot, (field, token)) in values
        .iter_mut()
        .zip(layout::FIELD_NAMES.into_iter().zip(&sentence.tokens[1..]))
    {
        *slot = token.parse().map_err(|source| SentenceError::FieldParse {
            field,
            token: token.to_string(),
            source,
        })?;
    }

    Ok(Reading::from_wire_order(values))
}
