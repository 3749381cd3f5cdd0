//! DOM utilities shared by runtime effect execution and components.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Owned handle for a registered DOM event listener.
///
/// The handle owns the closure backing the listener: keep it alive for as
/// long as the listener should fire, call [`EventListenerHandle::remove`] to
/// detach, or [`EventListenerHandle::forget`] to leak a page-lifetime
/// listener.
pub struct EventListenerHandle {
    #[cfg(target_arch = "wasm32")]
    inner: Option<(
        web_sys::EventTarget,
        String,
        Closure<dyn FnMut(web_sys::Event)>,
        bool,
    )>,
}

impl EventListenerHandle {
    /// Returns a handle that owns nothing; used off-wasm and for absent targets.
    pub fn noop() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            inner: None,
        }
    }

    /// Detaches the listener from its target.
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_mut))]
    pub fn remove(mut self) {
        #[cfg(target_arch = "wasm32")]
        if let Some((target, name, closure, capture)) = self.inner.take() {
            let _ = target.remove_event_listener_with_callback_and_bool(
                &name,
                closure.as_ref().unchecked_ref(),
                capture,
            );
        }
    }

    /// Leaks the handle, leaving the listener attached for the page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Attaches `handler` to `target` for the named event and returns the owning handle.
pub fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> EventListenerHandle {
    listen_with_capture(target, event, handler, false)
}

/// Attaches a capture-phase listener, which observes events before any
/// bubble-phase handler on descendants.
pub fn listen_capture(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> EventListenerHandle {
    listen_with_capture(target, event, handler, true)
}

#[cfg(target_arch = "wasm32")]
fn listen_with_capture(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
    capture: bool,
) -> EventListenerHandle {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let attached = target
        .add_event_listener_with_callback_and_bool(
            event,
            closure.as_ref().unchecked_ref(),
            capture,
        )
        .is_ok();
    EventListenerHandle {
        inner: attached.then(|| (target.clone(), event.to_string(), closure, capture)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn listen_with_capture(
    _target: &web_sys::EventTarget,
    _event: &str,
    _handler: impl FnMut(web_sys::Event) + 'static,
    _capture: bool,
) -> EventListenerHandle {
    EventListenerHandle::noop()
}

/// Returns the current document, when running in a browsing context.
pub fn document() -> Option<web_sys::Document> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.document())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Clears and focuses the input element with the given DOM id.
///
/// Focus is deferred through a zero-delay timeout so it lands after the
/// current render flush.
pub fn reset_and_focus_input(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        input.set_value("");
        let callback = Closure::once_into_js(move || {
            let _ = input.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Scrolls the window back to the top-left origin.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Returns the window's vertical scroll offset in pixels.
pub fn window_scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}
