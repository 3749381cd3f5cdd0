//! The age-verification gate overlay.

use std::time::Duration;

use leptos::*;

use crate::{model::GateStatus, reducer::AppAction, runtime_context::use_site_runtime};

/// DOM id of the age input; the reset effect targets it by id.
pub const AGE_INPUT_DOM_ID: &str = "user-age";

const INITIAL_FOCUS_DELAY_MS: u64 = 500;

#[component]
pub(super) fn AgeGate() -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;
    let gate = create_memo(move |_| state.get().gate);
    let input_ref = create_node_ref::<html::Input>();
    let paste_guard = store_value(false);

    let submit = move || {
        let input = input_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default();
        runtime.dispatch_action(AppAction::SubmitAge { input });
    };

    // Focus the input shortly after the gate mounts, and block paste as a
    // best-effort bypass deterrent (documented as not a security control).
    create_effect(move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if !paste_guard.get_value() {
            paste_guard.set_value(true);
            let raw_input: &web_sys::HtmlInputElement = &input;
            let target: &web_sys::EventTarget = raw_input.as_ref();
            platform_host_web::dom::listen(target, "paste", |ev| ev.prevent_default()).forget();
        }
        set_timeout(
            move || {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            },
            Duration::from_millis(INITIAL_FOCUS_DELAY_MS),
        );
    });

    view! {
        <Show when=move || gate.get() != GateStatus::Verified fallback=|| ()>
            <div id="age-gate" class="age-gate active" role="dialog" aria-modal="true">
                <Show
                    when=move || gate.get() == GateStatus::Denied
                    fallback=move || {
                        view! {
                            <div class="modal-content age-gate-content">
                                <h2>"Age Verification Required"</h2>
                                <p>
                                    "This website contains age-restricted content. Please enter your age to continue."
                                </p>
                                <input
                                    id=AGE_INPUT_DOM_ID
                                    node_ref=input_ref
                                    type="number"
                                    inputmode="numeric"
                                    min="1"
                                    max="150"
                                    placeholder="Enter your age"
                                    autocomplete="off"
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            submit();
                                        }
                                    }
                                />
                                <div class="age-gate-actions">
                                    <button
                                        id="verify-btn"
                                        class="btn btn-primary"
                                        on:click=move |_| submit()
                                    >
                                        "Enter"
                                    </button>
                                    <button
                                        id="leave-btn"
                                        class="btn btn-secondary"
                                        on:click=move |_| runtime.dispatch_action(AppAction::LeaveSite)
                                    >
                                        "Leave"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                >
                    <div class="modal-content age-gate-content age-gate-denied">
                        <div class="age-gate-denied-icon" aria-hidden="true">"🚫"</div>
                        <h2>"Access Denied"</h2>
                        <p>
                            "You must be at least 18 years old to access this website. This site contains adult content that is not suitable for minors."
                        </p>
                        <p class="age-gate-redirect-note">
                            "You are being redirected to a safe website."
                        </p>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| runtime.dispatch_action(AppAction::LeaveSite)
                        >
                            "Leave Site"
                        </button>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
