use std::io::{BufRead, BufReader, Read};

use thiserror::Error;

/// A producer of newline-delimited candidate sentences.
///
/// One call yields one candidate line (terminator included, if present) or
/// `None` at end of stream. Implementations own the framing discipline;
/// the sentence parser makes no assumption beyond "one call = one line".
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Frames an arbitrary byte stream into candidate lines.
///
/// Bytes are accumulated until `\n` (or end of stream) and converted
/// lossily, so non-UTF-8 serial noise surfaces as a parse error on that
/// line instead of aborting the read loop.
pub struct ReaderLineSource<R: Read> {
    inner: BufReader<R>,
}

impl<R: Read> ReaderLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
        }
    }
}

impl<R: Read> LineSource for ReaderLineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        let mut buf = Vec::new();
        let read = self.inner.read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
