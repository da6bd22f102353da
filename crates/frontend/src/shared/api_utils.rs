//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Все функции возвращают `Result<_, String>`: текст ошибки показывается пользователю как есть.

use contracts::shared::api_response::{ActionResponse, RawListResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/members");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL конкретной записи; идентификатор кодируется
pub fn record_url(base: &str, path: &str, id: &str) -> String {
    format!("{}{}/{}", base, path, urlencoding::encode(id))
}

/// GET списка записей. Принимает как голый массив, так и `{ success, data }`
pub async fn fetch_list<T: DeserializeOwned>(path: &str, what: &str) -> Result<Vec<T>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", what, response.status()));
    }

    let body: RawListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if let Some(message) = body.failure_message() {
        return Err(message);
    }
    Ok(body.decode_items(what))
}

/// DELETE записи по идентификатору
pub async fn delete_by_id(path: &str, id: &str, what: &str) -> Result<(), String> {
    let url = record_url(&api_base(), path, id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete {}: {}", what, response.status()));
    }

    // тело может быть пустым; success=false при статусе 200 тоже считается ошибкой
    if let Ok(body) = response.json::<ActionResponse>().await {
        if body.success == Some(false) {
            return Err(body
                .message
                .unwrap_or_else(|| format!("Failed to delete {}", what)));
        }
    }
    Ok(())
}
