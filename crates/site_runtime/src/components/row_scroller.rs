//! Horizontal row scroller with pointer drag and momentum release.

use leptos::*;

use crate::momentum::{Momentum, RowDrag, SCROLL_HINT_THRESHOLD_PX};

fn now_ms() -> f64 {
    platform_host::unix_time_ms_now() as f64
}

#[component]
pub(super) fn RowScroller(children: Children) -> impl IntoView {
    let scroller_ref = create_node_ref::<html::Div>();
    let drag = store_value(None::<RowDrag>);
    // Bumped on every new drag; a stale generation stops the momentum loop.
    let momentum_generation = store_value(0u64);
    let release_velocity = store_value(0.0f64);
    let has_scrolled = create_rw_signal(false);

    let begin = move |page_x: f64| {
        let Some(el) = scroller_ref.get_untracked() else {
            return;
        };
        momentum_generation.update_value(|generation| *generation += 1);
        drag.set_value(Some(RowDrag::begin(
            page_x,
            f64::from(el.scroll_left()),
            now_ms(),
        )));
    };

    let update = move |page_x: f64| {
        drag.update_value(|slot| {
            if let Some(session) = slot.as_mut() {
                let scroll_left = session.update(page_x, now_ms());
                if let Some(el) = scroller_ref.get_untracked() {
                    el.set_scroll_left(scroll_left as i32);
                }
            }
        });
    };

    let release = move || {
        let Some(session) = drag.get_value() else {
            return;
        };
        drag.set_value(None);
        release_velocity.set_value(session.velocity);
        if let Some(momentum) = Momentum::from_release(session.velocity) {
            let generation = momentum_generation.get_value();
            run_momentum(scroller_ref, momentum, momentum_generation, generation);
        }
    };

    // Capture-phase click guard: a click that trails a fast drag must not
    // reach the cards underneath.
    let click_guard = store_value(None::<platform_host_web::EventListenerHandle>);
    create_effect(move |_| {
        let Some(el) = scroller_ref.get() else {
            return;
        };
        if click_guard.with_value(|guard| guard.is_some()) {
            return;
        }
        let raw_element: &web_sys::HtmlDivElement = &el;
        let target: &web_sys::EventTarget = raw_element.as_ref();
        let handle = platform_host_web::dom::listen_capture(target, "click", move |ev| {
            let velocity = release_velocity.get_value();
            release_velocity.set_value(0.0);
            if velocity.abs() > crate::momentum::CLICK_SUPPRESS_VELOCITY {
                ev.prevent_default();
                ev.stop_propagation();
            }
        });
        click_guard.set_value(Some(handle));
    });
    on_cleanup(move || {
        click_guard.update_value(|guard| {
            if let Some(handle) = guard.take() {
                handle.remove();
            }
        });
    });

    view! {
        <div
            class="row-scroller"
            node_ref=scroller_ref
            data-scrolled=move || has_scrolled.get().to_string()
            on:mousedown=move |ev| begin(f64::from(ev.page_x()))
            on:mousemove=move |ev| {
                if drag.get_value().is_some() {
                    ev.prevent_default();
                    update(f64::from(ev.page_x()));
                }
            }
            on:mouseup=move |_| release()
            on:mouseleave=move |_| drag.set_value(None)
            on:touchstart=move |ev| {
                if let Some(touch) = ev.touches().get(0) {
                    begin(f64::from(touch.page_x()));
                }
            }
            on:touchmove=move |ev| {
                if drag.get_value().is_some() {
                    if let Some(touch) = ev.touches().get(0) {
                        update(f64::from(touch.page_x()));
                    }
                }
            }
            on:touchend=move |_| release()
            on:scroll=move |_| {
                if !has_scrolled.get_untracked() {
                    if let Some(el) = scroller_ref.get_untracked() {
                        if f64::from(el.scroll_left()) > SCROLL_HINT_THRESHOLD_PX {
                            has_scrolled.set(true);
                        }
                    }
                }
            }
        >
            {children()}
        </div>
    }
}

/// Self-rescheduling per-frame momentum decay; superseded generations stop.
fn run_momentum(
    scroller_ref: NodeRef<html::Div>,
    mut momentum: Momentum,
    generation_cell: StoredValue<u64>,
    generation: u64,
) {
    request_animation_frame(move || {
        if generation_cell.get_value() != generation {
            return;
        }
        let Some(delta) = momentum.step() else {
            return;
        };
        if let Some(el) = scroller_ref.get_untracked() {
            el.set_scroll_left(el.scroll_left() + delta as i32);
        }
        run_momentum(scroller_ref, momentum, generation_cell, generation);
    });
}
