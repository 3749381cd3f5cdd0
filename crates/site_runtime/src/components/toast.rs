//! Stacked toast notifications.

use leptos::*;

use crate::{model::ToastKind, runtime_context::use_site_runtime};

#[component]
pub(super) fn ToastHost() -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;

    view! {
        <div id="toast-container" class="toast-container" aria-live="polite">
            <For each=move || state.get().toasts key=|toast| toast.id let:toast>
                <div class=format!("toast {}", toast.kind.css_class())>
                    <i
                        class=match toast.kind {
                            ToastKind::Success => "fas fa-check-circle",
                            ToastKind::Error => "fas fa-exclamation-circle",
                        }
                        aria-hidden="true"
                    ></i>
                    <span>{toast.message.clone()}</span>
                </div>
            </For>
        </div>
    }
}
