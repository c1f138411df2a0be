//! API URL helpers for frontend-backend communication.

/// Backend port used when the dashboard is served by the dev server.
const API_PORT: u16 = 3000;

/// Get the base URL for API requests.
///
/// Constructed from the current window location, pointing at the backend
/// port. Returns an empty string when no window is available.
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
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with "/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
