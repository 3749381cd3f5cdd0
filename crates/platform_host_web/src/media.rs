//! Fullscreen, picture-in-picture, and media-element platform helpers.
//!
//! Fullscreen goes through the standard API first and probes the
//! `webkit`-prefixed methods by reflection when the standard call is
//! unavailable. Picture-in-picture goes entirely through reflection against
//! the standards method names, which keeps the adapter working across the
//! uneven generated-binding coverage for that API.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
fn call_method(target: &JsValue, name: &str) -> Result<(), String> {
    let method = js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| format!("{name} lookup failed: {e:?}"))?;
    let function: js_sys::Function = method
        .dyn_into()
        .map_err(|_| format!("{name} is not callable"))?;
    function
        .call0(target)
        .map(|_| ())
        .map_err(|e| format!("{name} failed: {e:?}"))
}

/// Returns whether any element currently owns fullscreen.
pub fn fullscreen_active() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = crate::dom::document() else {
            return false;
        };
        if document.fullscreen_element().is_some() {
            return true;
        }
        js_sys::Reflect::get(&document, &JsValue::from_str("webkitFullscreenElement"))
            .map(|v| !v.is_null() && !v.is_undefined())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Requests fullscreen for `element`, preferring the standard API.
///
/// # Errors
///
/// Returns an error when both the standard and prefixed requests fail.
pub fn request_fullscreen(element: &web_sys::Element) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        if element.request_fullscreen().is_ok() {
            return Ok(());
        }
        call_method(element.as_ref(), "webkitRequestFullscreen")
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element;
        Ok(())
    }
}

/// Leaves fullscreen, preferring the standard API.
pub fn exit_fullscreen() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = crate::dom::document() else {
            return;
        };
        if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
            return;
        }
        let _ = call_method(document.as_ref(), "webkitExitFullscreen");
    }
}

/// Returns whether a picture-in-picture window is currently active.
pub fn picture_in_picture_active() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = crate::dom::document() else {
            return false;
        };
        js_sys::Reflect::get(&document, &JsValue::from_str("pictureInPictureElement"))
            .map(|v| !v.is_null() && !v.is_undefined())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Requests picture-in-picture for `video`.
///
/// # Errors
///
/// Returns an error when the platform does not expose the API or the request
/// is rejected synchronously.
pub fn request_picture_in_picture(video: &web_sys::HtmlVideoElement) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        call_method(video.as_ref(), "requestPictureInPicture")
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = video;
        Ok(())
    }
}

/// Leaves picture-in-picture when a window is active.
pub fn exit_picture_in_picture() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = crate::dom::document() else {
            return;
        };
        let _ = call_method(document.as_ref(), "exitPictureInPicture");
    }
}

/// Attempts playback and reports rejection (typically blocked autoplay).
///
/// # Errors
///
/// Returns an error when the play promise rejects; callers log and continue.
pub async fn play(media: &web_sys::HtmlMediaElement) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let promise = media
            .play()
            .map_err(|e| format!("play request failed: {e:?}"))?;
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("playback rejected: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = media;
        Ok(())
    }
}

/// Returns the end of the furthest buffered range, when any data is buffered.
pub fn buffered_end(media: &web_sys::HtmlMediaElement) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        let buffered = media.buffered();
        if buffered.length() == 0 {
            return None;
        }
        buffered.end(buffered.length() - 1).ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = media;
        None
    }
}
