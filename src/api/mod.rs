//! HTTP API Client
//!
//! Functions for communicating with the FlowForge REST API.

pub mod auth;
pub mod blog;
pub mod pdf;

use gloo_net::http::Response;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("flowforge_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Error payload returned by the API (FastAPI convention)
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub detail: String,
}

/// Extract the server's error message from a non-2xx response,
/// falling back to a generic string when the body is not decodable.
pub async fn error_message(response: Response, fallback: &str) -> String {
    match response.json::<ApiError>().await {
        Ok(err) => err.detail,
        Err(_) => fallback.to_string(),
    }
}
