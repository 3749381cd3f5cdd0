//! External navigation adapter for browser contexts.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation adapter backed by `window.location.replace`.
///
/// `replace` (rather than `assign`) keeps the current page out of session
/// history, so "back" cannot return to a gated page after a redirect.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn replace_location<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let window =
                    web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                return window
                    .location()
                    .replace(url)
                    .map_err(|e| format!("location.replace failed: {e:?}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = url;
                Ok(())
            }
        })
    }
}
