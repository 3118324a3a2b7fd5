// src/document.rs
//
// Loading and saving fragments for the command line. `None` means stdin/stdout.

use crate::error::{Error, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Read a UTF-8 fragment from `path`, or stdin when `path` is `None`.
pub fn read_fragment(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            let bytes = fs::read(path).map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            String::from_utf8(bytes).map_err(|source| Error::Utf8 {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(Error::Stdin)?;
            Ok(buf)
        }
    }
}

/// Write `text` to `path`, or stdout when `path` is `None`.
pub fn write_fragment(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(Error::Stdout)
        }
    }
}

/// Canonical file contents for a formatted fragment: the text plus a final
/// newline, or nothing at all for an empty fragment.
pub fn with_final_newline(formatted: &str) -> String {
    if formatted.is_empty() {
        String::new()
    } else {
        let mut out = String::with_capacity(formatted.len() + 1);
        out.push_str(formatted);
        out.push('\n');
        out
    }
}
