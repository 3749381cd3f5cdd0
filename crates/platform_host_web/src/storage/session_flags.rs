//! `sessionStorage`-backed tab-session store implementation.
//!
//! Session flags exist so a freshly opened tab starts unverified even when a
//! durable flag persists from a previous visit; this adapter maps the
//! [`platform_host::SessionStore`] contract onto `window.sessionStorage`.

use platform_host::SessionStore;

#[derive(Debug, Clone, Copy, Default)]
/// Browser tab-session store backed by `window.sessionStorage`.
pub struct WebSessionStore;

impl SessionStore for WebSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.session_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.session_storage().ok().flatten())
                .ok_or_else(|| "sessionStorage unavailable".to_string())?;
            storage
                .set_item(key, value)
                .map_err(|e| format!("sessionStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
        }
    }
}
