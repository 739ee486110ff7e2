use crate::error::ScrapeError;
use reqwest::StatusCode;
use std::time::Duration;

const USER_AGENT: &str = concat!("frontpage/", env!("CARGO_PKG_VERSION"));

// The original behavior had no timeout and could hang indefinitely on a
// stalled connection; 30s bounds the single request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch a page with a single GET and return the body text.
///
/// Anything other than HTTP 200 is an error naming the URL and the numeric
/// status code. Transport failures (DNS, refused connection, timeout) are
/// reported the same way as a bad status: the run ends, nothing is written.
pub async fn fetch_page(url: &str) -> Result<String, ScrapeError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })
}
