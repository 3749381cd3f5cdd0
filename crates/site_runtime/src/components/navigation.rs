//! Top navigation bar, search, and the mobile bottom bar.

use leptos::*;

use crate::{
    model::{ViewId, NAV_ITEMS},
    reducer::AppAction,
    runtime_context::use_site_runtime,
};

const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[component]
pub(super) fn TopNav() -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;
    let scrolled = create_rw_signal(false);

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        scrolled.set(platform_host_web::dom::window_scroll_y() > NAVBAR_SCROLLED_THRESHOLD_PX);
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <a
                href="#"
                class="logo"
                on:click=move |ev| {
                    ev.prevent_default();
                    runtime.dispatch_action(AppAction::SwitchView { view: ViewId::Home });
                }
            >
                "Reelhouse"
            </a>
            <ul class="nav-links">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(view, label)| {
                        view! {
                            <li>
                                <a
                                    href="#"
                                    data-page=view.page_id()
                                    class:active=move || state.get().current_view == view
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        runtime.dispatch_action(AppAction::SwitchView { view });
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="search-bar">
                <input
                    type="search"
                    placeholder="Search videos or creators"
                    prop:value=move || state.get().search_query
                    on:input=move |ev| {
                        runtime.dispatch_action(AppAction::SetSearchQuery {
                            query: event_target_value(&ev),
                        });
                    }
                />
            </div>
        </nav>
    }
}

#[component]
pub(super) fn BottomNav() -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;

    view! {
        <nav class="bottom-nav">
            {NAV_ITEMS
                .into_iter()
                .map(|(view, label)| {
                    view! {
                        <button
                            class="bottom-nav-item"
                            data-page=view.page_id()
                            class:active=move || state.get().current_view == view
                            on:click=move |_| {
                                runtime.dispatch_action(AppAction::SwitchView { view });
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
