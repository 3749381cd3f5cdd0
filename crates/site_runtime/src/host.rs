//! Host-side runtime helpers for executing reducer effects and boot wiring.
//!
//! The reducer never touches the browser; every [`RuntimeEffect`] lands here
//! and is executed against the host service bundle, which keeps storage,
//! navigation, and timer behavior behind a typed boundary that tests can
//! replace with in-memory implementations.

mod boot;
mod effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{ExternalUrlService, PrefsStore, SessionStore};

use crate::{
    reducer::{AppAction, RuntimeEffect},
    runtime_context::SiteRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for site runtime side effects.
pub struct SiteHostContext {
    prefs: Rc<dyn PrefsStore>,
    session: Rc<dyn SessionStore>,
    external_urls: Rc<dyn ExternalUrlService>,
}

impl Default for SiteHostContext {
    fn default() -> Self {
        Self {
            prefs: Rc::new(platform_host_web::prefs_store()),
            session: Rc::new(platform_host_web::session_store()),
            external_urls: Rc::new(platform_host_web::external_url_service()),
        }
    }
}

impl SiteHostContext {
    /// Builds a host context from explicit service implementations.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        session: Rc<dyn SessionStore>,
        external_urls: Rc<dyn ExternalUrlService>,
    ) -> Self {
        Self {
            prefs,
            session,
            external_urls,
        }
    }

    /// Returns the configured durable preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the configured tab-session store.
    pub fn session_store(&self) -> Rc<dyn SessionStore> {
        self.session.clone()
    }

    /// Returns the configured external navigation service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Installs boot hydration and the unload teardown.
    ///
    /// The boot sequence reads the tab-session flag synchronously, then
    /// asynchronously reads the durable flag and favorites and dispatches the
    /// hydration actions.
    pub fn install_boot_hydration(&self, dispatch: Callback<AppAction>) {
        boot::install(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: SiteRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistFavorites => effects::persist_favorites(self.clone(), runtime),
            RuntimeEffect::PersistVerification => effects::persist_verification(self.clone()),
            RuntimeEffect::RedirectToSafeSite { delay_ms } => {
                effects::redirect_to_safe_site(self.clone(), delay_ms)
            }
            RuntimeEffect::ScrollToTop => platform_host_web::dom::scroll_to_top(),
            RuntimeEffect::ResetAgeInput => {
                platform_host_web::dom::reset_and_focus_input(crate::components::AGE_INPUT_DOM_ID)
            }
            RuntimeEffect::ArmToastDismiss { toast_id } => {
                effects::arm_toast_dismiss(runtime, toast_id)
            }
        }
    }
}
