//! Platform Helpers
//!
//! Browser lookups the execution client needs. Everything here reads browser
//! globals, so outside wasm32 the functions report the API as unavailable.

use anyhow::Result;
#[cfg(target_arch = "wasm32")]
use anyhow::{anyhow, Context};

/// URL relative requests resolve against: the document base URI (honours a
/// `<base href>` tag) or, failing that, the current location.
#[cfg(target_arch = "wasm32")]
pub fn page_url() -> Result<String> {
    let window = web_sys::window().context("No window object")?;

    if let Some(document) = window.document() {
        if let Ok(Some(base_uri)) = document.base_uri() {
            crate::console_debug!("[Platform] Document base URI: {}", base_uri);
            return Ok(base_uri);
        }
    }

    window
        .location()
        .href()
        .map_err(|e| anyhow!("{:?}", e))
        .context("Failed to read window.location.href")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_url() -> Result<String> {
    anyhow::bail!("page URL is only available in the browser")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_no_page_url_outside_browser() {
        let err = page_url().unwrap_err();
        assert!(err.to_string().contains("browser"));
    }
}
