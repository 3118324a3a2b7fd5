use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors from loading or saving a fragment. The formatting engine itself
/// cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    Utf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to read stdin")]
    Stdin(#[source] io::Error),

    #[error("failed to write stdout")]
    Stdout(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
