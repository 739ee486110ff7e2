use crate::error::ScrapeError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Name the output file after the run's start time, to second precision.
pub fn snapshot_filename(started_at: &DateTime<Local>) -> String {
    format!("data_{}.txt", started_at.format("%Y%m%d-%H%M%S"))
}

/// Write one headline per line to `dir/filename`, creating or truncating it.
///
/// Creates the directory if it doesn't exist. An empty headline sequence
/// produces an empty file. Every line is newline-terminated.
pub fn write_snapshot(
    dir: &str,
    filename: &str,
    headlines: &[String],
) -> Result<PathBuf, ScrapeError> {
    let dir = Path::new(dir);
    fs::create_dir_all(dir).map_err(|source| ScrapeError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(filename);
    let mut body = String::new();
    for headline in headlines {
        body.push_str(headline);
        body.push('\n');
    }

    fs::write(&path, &body).map_err(|source| ScrapeError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), lines = headlines.len(), "Wrote headline snapshot");

    Ok(path)
}
