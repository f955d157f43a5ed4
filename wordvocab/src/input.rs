//! Loading documents from the filesystem.
use crate::error::FileIoSnafu;
use crate::Result;
use snafu::ResultExt;
use std::path::Path;
use tracing::*;

/// Read a whole text file into a string.
///
/// The file might or might not be valid UTF-8.  Rather than fail, invalid sequences are replaced
/// with U+FFFD and a warning is logged, since a handful of mangled words won't hurt a vocabulary.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    let contents = std::fs::read(path).with_context(|_| FileIoSnafu { path })?;

    let text = match String::from_utf8(contents) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(),
                "Input file did not decode as clean UTF-8.  \
                Invalid bytes have been replaced with a UTF-8 placeholder sequence");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    debug!(path = %path.display(), bytes = text.len(), "Loaded text file");

    Ok(text)
}
