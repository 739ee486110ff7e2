use crate::error::ScrapeError;
use crate::{extract, fetch, output};
use chrono::Local;

/// The one page this tool knows how to snapshot.
pub const TARGET_URL: &str = "https://www.cnn.com/";

/// Snapshot the front page into the working directory.
pub async fn run() -> Result<(), ScrapeError> {
    snapshot(TARGET_URL, ".").await
}

/// Fetch `url`, extract headline text, and write a timestamped snapshot
/// file into `output_dir`, printing each headline to stdout.
///
/// The timestamp is captured before the fetch so the filename reflects the
/// run's start time. On any fetch failure nothing is written.
pub async fn snapshot(url: &str, output_dir: &str) -> Result<(), ScrapeError> {
    let started_at = Local::now();
    let filename = output::snapshot_filename(&started_at);

    tracing::info!(url = %url, "Fetching front page");
    let html = fetch::fetch_page(url).await?;
    tracing::info!(bytes = html.len(), "Received HTML");

    let headlines = extract::extract_headlines(&html);
    tracing::info!(headlines = headlines.len(), "Extracted headline text");

    output::write_snapshot(output_dir, &filename, &headlines)?;

    for headline in &headlines {
        println!("{headline}");
    }

    Ok(())
}
