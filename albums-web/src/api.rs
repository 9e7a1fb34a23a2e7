use albums_common::Album;
use tracing::warn;

/// Album API base URL, fixed at build time
pub const API_BASE_URL: &str = match option_env!("ALBUMS_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

fn albums_url(base: &str) -> String {
    format!("{}/albums", base.trim_end_matches('/'))
}

/// Fetch the album list. Failures are logged here, once per attempt.
pub async fn fetch_albums() -> Result<Vec<Album>, String> {
    request_albums(&albums_url(API_BASE_URL))
        .await
        .inspect_err(|e| warn!("Failed to fetch albums: {}", e))
}

async fn request_albums(url: &str) -> Result<Vec<Album>, String> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("Server returned {}", resp.status()));
    }

    resp.json().await.map_err(|e| format!("Parse error: {e}"))
}
