use std::io::{self, BufRead};

use crate::error::CredentialError;

/// One line of operator input with the trailing newline removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    text: String,
}

impl Line {
    /// Number of bytes read, excluding the newline.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Read a single line from `reader`.
///
/// Reads until `\n` or end-of-stream. End-of-stream before any byte is not an
/// error: it yields an empty line. The buffer grows through fallible
/// reservation, so an allocation failure surfaces as
/// [`CredentialError::OutOfMemory`] instead of aborting the process.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> Result<Line, CredentialError> {
    let mut buf: Vec<u8> = Vec::new();

    loop {
        let (found_newline, used) = {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CredentialError::Io(e)),
            };

            if available.is_empty() {
                break;
            }

            match available.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    append(&mut buf, &available[..end])?;
                    (true, end + 1)
                }
                None => {
                    append(&mut buf, available)?;
                    (false, available.len())
                }
            }
        };

        reader.consume(used);

        if found_newline {
            break;
        }
    }

    let text = String::from_utf8(buf)
        .map_err(|e| CredentialError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    Ok(Line { text })
}

fn append(buf: &mut Vec<u8>, bytes: &[u8]) -> Result<(), CredentialError> {
    buf.try_reserve(bytes.len())
        .map_err(|_| CredentialError::OutOfMemory)?;
    buf.extend_from_slice(bytes);
    Ok(())
}
