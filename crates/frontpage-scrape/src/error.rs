use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a snapshot run early.
///
/// A non-200 status and a transport failure are reported the same way:
/// the run ends with a diagnostic and no output file.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The server answered, but not with 200.
    #[error("Failed to retrieve data from {url}. Status code: {status}")]
    Status { url: String, status: u16 },

    /// The request never produced a usable response (DNS, refused, timeout).
    #[error("Failed to retrieve data from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
