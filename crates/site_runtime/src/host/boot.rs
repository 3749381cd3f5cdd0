//! Boot hydration and unload teardown for verification state and favorites.

use leptos::{logging, spawn_local, Callable, Callback};

use crate::{host::SiteHostContext, persistence, reducer::AppAction};

pub(super) fn install(host: SiteHostContext, dispatch: Callback<AppAction>) {
    // The session flag is synchronous at the platform boundary; reading it
    // before the async hop keeps the hydration a single consistent snapshot.
    let session = persistence::load_session_flag(host.session_store().as_ref());
    let prefs = host.prefs_store();
    spawn_local(async move {
        let long_lived = match persistence::load_long_lived_flag(prefs.as_ref()).await {
            Ok(flag) => flag,
            Err(err) => {
                logging::warn!("verification flag load failed: {err}");
                false
            }
        };
        dispatch.call(AppAction::HydrateVerification {
            long_lived,
            session,
        });

        match persistence::load_favorites(prefs.as_ref()).await {
            Ok(favorites) if !favorites.is_empty() => {
                dispatch.call(AppAction::HydrateFavorites { favorites });
            }
            Ok(_) => {}
            Err(err) => logging::warn!("favorites load failed: {err}"),
        }
    });

    install_unload_teardown();
}

/// Clears the durable verification flag on unload whenever either flag is
/// missing, so partial state never survives into the next visit.
fn install_unload_teardown() {
    #[cfg(target_arch = "wasm32")]
    {
        use platform_host::SessionStore;

        let Some(window) = web_sys::window() else {
            return;
        };
        let handle = platform_host_web::dom::listen(window.as_ref(), "beforeunload", move |_| {
            let prefs = platform_host_web::prefs_store();
            let session = platform_host_web::session_store();
            let long_lived = prefs.load_raw(persistence::AGE_VERIFIED_KEY);
            let tab_flag = session.get(persistence::AGE_VERIFIED_KEY);
            if persistence::should_clear_verification(long_lived.as_deref(), tab_flag.as_deref()) {
                let _ = prefs.delete_raw(persistence::AGE_VERIFIED_KEY);
            }
        });
        handle.forget();
    }
}
