//! Site UI composition and interaction surfaces.
//!
//! Components translate DOM events into reducer actions and render from the
//! reactive state signals; no component mutates state directly.

mod age_gate;
mod cards;
mod navigation;
mod player_modal;
mod row_scroller;
mod toast;
mod views;

use leptos::*;

pub use age_gate::AGE_INPUT_DOM_ID;

use self::{
    age_gate::AgeGate, navigation::BottomNav, navigation::TopNav, player_modal::PlayerModal,
    toast::ToastHost, views::MainViews,
};
use crate::runtime_context::use_site_runtime;

#[component]
/// Renders the full site shell: gate, navigation, views, player, toasts.
pub fn SiteShell() -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;

    view! {
        <div class="site-shell">
            <AgeGate />
            // All content regions stay out of the tree until verification
            // succeeds; the toast host lives outside so gate errors show.
            <Show when=move || state.get().content_visible() fallback=|| ()>
                <TopNav />
                <main id="main-content">
                    <MainViews />
                </main>
                <footer class="site-footer">
                    <p>"Reelhouse"</p>
                </footer>
                <BottomNav />
                <PlayerModal />
            </Show>
            <ToastHost />
        </div>
    }
}
