//! Executors for individual runtime effects.

use std::time::Duration;

use leptos::{logging, set_timeout, spawn_local, SignalGetUntracked};

use crate::{
    host::SiteHostContext,
    model::{SAFE_EXIT_URL, TOAST_DISMISS_MS},
    persistence,
    reducer::AppAction,
    runtime_context::SiteRuntimeContext,
};

pub(super) fn persist_favorites(host: SiteHostContext, runtime: SiteRuntimeContext) {
    let favorites = runtime.state.get_untracked().favorites;
    spawn_local(async move {
        if let Err(err) = persistence::save_favorites(host.prefs_store().as_ref(), &favorites).await
        {
            logging::warn!("favorites persist failed: {err}");
        }
    });
}

pub(super) fn persist_verification(host: SiteHostContext) {
    spawn_local(async move {
        let result = persistence::persist_verification(
            host.prefs_store().as_ref(),
            host.session_store().as_ref(),
            platform_host::unix_time_ms_now(),
        )
        .await;
        if let Err(err) = result {
            logging::warn!("verification persist failed: {err}");
        }
    });
}

pub(super) fn redirect_to_safe_site(host: SiteHostContext, delay_ms: u32) {
    let navigate = move || {
        spawn_local(async move {
            if let Err(err) = host
                .external_url_service()
                .replace_location(SAFE_EXIT_URL)
                .await
            {
                logging::warn!("safe-site redirect failed: {err}");
            }
        });
    };
    if delay_ms == 0 {
        navigate();
    } else {
        set_timeout(navigate, Duration::from_millis(u64::from(delay_ms)));
    }
}

pub(super) fn arm_toast_dismiss(runtime: SiteRuntimeContext, toast_id: u64) {
    set_timeout(
        move || runtime.dispatch_action(AppAction::DismissToast { toast_id }),
        Duration::from_millis(TOAST_DISMISS_MS),
    );
}
