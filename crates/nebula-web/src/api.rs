//! API client for the browser

use gloo_net::http::Request;
use nebula_core::SiteConfig;

/// Fetch site configuration from the server
pub async fn fetch_config() -> Result<SiteConfig, String> {
    let response = Request::get("/api/config")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let config = response
        .json::<SiteConfig>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    config.validate().map_err(|e| e.to_string())?;

    Ok(config)
}
