use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to retrieve the page. HTTP Status Code: {}", .0.as_u16())]
    Status(StatusCode),
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// GET `url` once and return the body. Anything but 200 is an error.
pub async fn fetch_page(url: &str, user_agent: &str) -> Result<String, FetchError> {
    let client = reqwest::Client::new();
    let network = |source: reqwest::Error| FetchError::Network {
        url: url.to_string(),
        source,
    };

    let pb = spinner(url);
    let start = Instant::now();
    let response = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .send()
        .await
        .map_err(|e| {
            pb.finish_and_clear();
            network(e)
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        pb.finish_and_clear();
        warn!("GET {} returned {}", url, status);
        return Err(FetchError::Status(status));
    }

    let body = response.text().await.map_err(network);
    pb.finish_and_clear();
    let body = body?;

    info!(
        "Fetched {} ({} bytes) in {}ms",
        url,
        body.len(),
        start.elapsed().as_millis()
    );
    Ok(body)
}

fn spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(format!("Fetching {}", url));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
