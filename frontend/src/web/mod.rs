//! Thin wrappers over browser APIs
//!
//! Uses `web_sys` directly instead of the gloo-* crates to keep the WASM
//! binary small.

mod http;
pub mod router;
mod storage;

pub use http::FetchHttpClient;
pub use storage::BrowserStorage;

/// Blocking notification
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
