//! The video player modal: custom transport controls over one media element.
//!
//! The modal translates DOM and media events into [`PlayerAction`] values and
//! executes queued [`PlayerEffect`] commands against the element it owns; all
//! decisions live in [`crate::player`].

use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use platform_host_web::{dom, media};

use crate::{
    player::{
        format_speed, format_time, volume_icon, PlayerAction, PlayerEffect, SettingsPane,
        CONTROLS_HIDE_DELAY_MS, KEYBOARD_SEEK_STEP_SECS, KEYBOARD_VOLUME_STEP, QUALITY_CHOICES,
        SPEED_CHOICES,
    },
    reducer::AppAction,
    runtime_context::{use_site_runtime, SiteRuntimeContext},
};

#[component]
pub(super) fn PlayerModal() -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;
    let player = runtime.player;

    let video_ref = create_node_ref::<html::Video>();
    let wrapper_ref = create_node_ref::<html::Div>();
    let progress_ref = create_node_ref::<html::Div>();
    let controls_timer = store_value(None::<TimeoutHandle>);

    let open_video = create_memo(move |_| state.get().open_video);
    let current_video = create_memo(move |_| {
        open_video
            .get()
            .and_then(|id| runtime.catalog().video(id).cloned())
    });

    // Attach/release the media source as the modal target changes.
    let was_open = store_value(false);
    create_effect(move |_| match current_video.get() {
        Some(video) => {
            let Some(element) = video_ref.get_untracked() else {
                logging::warn!("video element missing; cannot open player");
                return;
            };
            element.set_poster(&video.thumbnail);
            element.set_src(&video.video_url);
            element.load();
            was_open.set_value(true);
            runtime.dispatch_player_action(PlayerAction::SourceOpened);
        }
        None => {
            if was_open.get_value() {
                was_open.set_value(false);
                runtime.dispatch_player_action(PlayerAction::Shutdown);
            }
        }
    });

    // Drain queued element commands in order.
    create_effect(move |_| {
        let queued = runtime.player_effects.get();
        if queued.is_empty() {
            return;
        }
        runtime.player_effects.set(Vec::new());
        for effect in queued {
            apply_player_effect(runtime, effect, video_ref, wrapper_ref, controls_timer);
        }
    });

    // Mirror fullscreen and picture-in-picture transitions back into state.
    let platform_listeners = store_value(Vec::<platform_host_web::EventListenerHandle>::new());
    create_effect(move |_| {
        let Some(element) = video_ref.get() else {
            return;
        };
        if platform_listeners.with_value(|listeners| !listeners.is_empty()) {
            return;
        }
        let Some(document) = dom::document() else {
            return;
        };
        let mut handles = Vec::new();
        for event in ["fullscreenchange", "webkitfullscreenchange"] {
            let document_target: &web_sys::EventTarget = document.as_ref();
            handles.push(dom::listen(document_target, event, move |_| {
                runtime.dispatch_player_action(PlayerAction::FullscreenChanged {
                    active: media::fullscreen_active(),
                });
            }));
        }
        let raw_element: &web_sys::HtmlVideoElement = &element;
        let element_target: &web_sys::EventTarget = raw_element.as_ref();
        handles.push(dom::listen(element_target, "enterpictureinpicture", move |_| {
            runtime.dispatch_player_action(PlayerAction::PipChanged { active: true });
        }));
        handles.push(dom::listen(element_target, "leavepictureinpicture", move |_| {
            runtime.dispatch_player_action(PlayerAction::PipChanged { active: false });
        }));
        platform_listeners.set_value(handles);
    });
    on_cleanup(move || {
        platform_listeners.update_value(|listeners| {
            for handle in listeners.drain(..) {
                handle.remove();
            }
        });
    });

    // Keyboard shortcuts, active only while the modal is open.
    let keyboard_listener = window_event_listener(ev::keydown, move |ev| {
        if state.get_untracked().open_video.is_none() {
            return;
        }
        let handled = match ev.key().as_str() {
            " " => {
                runtime.dispatch_player_action(PlayerAction::TogglePlayback);
                true
            }
            "ArrowLeft" => {
                runtime.dispatch_player_action(PlayerAction::StepSeek {
                    delta_secs: -KEYBOARD_SEEK_STEP_SECS,
                });
                true
            }
            "ArrowRight" => {
                runtime.dispatch_player_action(PlayerAction::StepSeek {
                    delta_secs: KEYBOARD_SEEK_STEP_SECS,
                });
                true
            }
            "ArrowUp" => {
                runtime.dispatch_player_action(PlayerAction::StepVolume {
                    delta: KEYBOARD_VOLUME_STEP,
                });
                true
            }
            "ArrowDown" => {
                runtime.dispatch_player_action(PlayerAction::StepVolume {
                    delta: -KEYBOARD_VOLUME_STEP,
                });
                true
            }
            "f" | "F" => {
                runtime.dispatch_player_action(PlayerAction::ToggleFullscreen);
                true
            }
            "m" | "M" => {
                runtime.dispatch_player_action(PlayerAction::ToggleMute);
                true
            }
            _ => false,
        };
        if handled {
            ev.prevent_default();
        }
    });
    on_cleanup(move || keyboard_listener.remove());

    // Track position on the progress bar as a fraction of its width.
    let fraction_at = move |client_x: i32| -> Option<f64> {
        let bar = progress_ref.get_untracked()?;
        let rect = bar.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return None;
        }
        Some((f64::from(client_x) - rect.left()) / rect.width())
    };

    // Drag-to-seek spans the whole window, not just the bar.
    let scrub_move_listener = window_event_listener(ev::mousemove, move |ev| {
        if player.get_untracked().scrubbing {
            if let Some(fraction) = fraction_at(ev.client_x()) {
                runtime.dispatch_player_action(PlayerAction::UpdateScrub { fraction });
            }
        }
    });
    on_cleanup(move || scrub_move_listener.remove());
    let scrub_end_listener = window_event_listener(ev::mouseup, move |_| {
        if player.get_untracked().scrubbing {
            runtime.dispatch_player_action(PlayerAction::EndScrub);
        }
    });
    on_cleanup(move || scrub_end_listener.remove());

    let played_percent = move || format!("{}%", player.get().played_fraction() * 100.0);

    view! {
        <div
            id="video-modal"
            class="modal video-modal"
            class:active=move || open_video.get().is_some()
            on:click=move |ev| {
                let backdrop = ev
                    .target()
                    .zip(ev.current_target())
                    .map(|(target, current)| js_sys::Object::is(target.as_ref(), current.as_ref()))
                    .unwrap_or(false);
                if backdrop {
                    runtime.dispatch_action(AppAction::CloseVideo);
                } else {
                    runtime.dispatch_player_action(PlayerAction::CloseSettings);
                }
            }
        >
            <div class="modal-content video-modal-content">
                <button
                    id="close-video-btn"
                    class="close-modal"
                    aria-label="Close video"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.dispatch_action(AppAction::CloseVideo);
                    }
                >
                    "×"
                </button>
                <div
                    class="video-player-wrapper"
                    node_ref=wrapper_ref
                    on:mousemove=move |_| runtime.dispatch_player_action(PlayerAction::PointerActivity)
                >
                    <video
                        id="main-video-player"
                        node_ref=video_ref
                        playsinline=true
                        on:click=move |_| runtime.dispatch_player_action(PlayerAction::TogglePlayback)
                        on:play=move |_| runtime.dispatch_player_action(PlayerAction::MediaPlaying)
                        on:pause=move |_| runtime.dispatch_player_action(PlayerAction::MediaPaused)
                        on:timeupdate=move |_| {
                            if let Some(element) = video_ref.get_untracked() {
                                runtime.dispatch_player_action(PlayerAction::TimeUpdate {
                                    current_time: element.current_time(),
                                });
                            }
                        }
                        on:loadedmetadata=move |_| {
                            if let Some(element) = video_ref.get_untracked() {
                                runtime.dispatch_player_action(PlayerAction::MetadataLoaded {
                                    duration: element.duration(),
                                });
                            }
                        }
                        on:progress=move |_| {
                            if let Some(element) = video_ref.get_untracked() {
                                if let Some(buffered_end) = media::buffered_end(&element) {
                                    runtime.dispatch_player_action(PlayerAction::BufferedChanged {
                                        buffered_end,
                                    });
                                }
                            }
                        }
                    ></video>
                    <div
                        class="video-controls-overlay"
                        class:hidden=move || !player.get().controls_visible
                        on:mousemove=move |_| {
                            runtime.dispatch_player_action(PlayerAction::PointerActivity)
                        }
                    >
                        <div
                            class="video-progress-bar"
                            node_ref=progress_ref
                            on:click=move |ev| {
                                ev.stop_propagation();
                                if let Some(fraction) = fraction_at(ev.client_x()) {
                                    runtime.dispatch_player_action(PlayerAction::ClickSeek { fraction });
                                }
                            }
                            on:mousedown=move |ev| {
                                if let Some(fraction) = fraction_at(ev.client_x()) {
                                    runtime.dispatch_player_action(PlayerAction::BeginScrub { fraction });
                                }
                            }
                        >
                            <div
                                class="video-progress-loaded"
                                style:width=move || {
                                    format!("{}%", player.get().buffered_fraction() * 100.0)
                                }
                            ></div>
                            <div class="video-progress-played" style:width=played_percent></div>
                            <div class="video-progress-handle" style:left=played_percent></div>
                        </div>
                        <div class="video-controls-row">
                            <button
                                id="play-pause-btn"
                                class="control-btn"
                                aria-label="Play or pause"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    runtime.dispatch_player_action(PlayerAction::TogglePlayback);
                                }
                            >
                                <i class=move || {
                                    if player.get().playing { "fas fa-pause" } else { "fas fa-play" }
                                }></i>
                            </button>
                            <div class="volume-controls">
                                <button
                                    id="volume-btn"
                                    class="control-btn"
                                    aria-label="Mute or unmute"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        runtime.dispatch_player_action(PlayerAction::ToggleMute);
                                    }
                                >
                                    <i class=move || {
                                        format!("fas {}", volume_icon(player.get().volume))
                                    }></i>
                                </button>
                                <input
                                    id="volume-slider"
                                    type="range"
                                    min="0"
                                    max="100"
                                    prop:value=move || {
                                        ((player.get().volume * 100.0).round()).to_string()
                                    }
                                    on:input=move |ev| {
                                        let volume = event_target_value(&ev)
                                            .parse::<f64>()
                                            .unwrap_or(100.0) / 100.0;
                                        runtime.dispatch_player_action(PlayerAction::SetVolume { volume });
                                    }
                                    on:click=move |ev| ev.stop_propagation()
                                />
                            </div>
                            <div class="video-time">
                                <span id="current-time">
                                    {move || format_time(player.get().current_time)}
                                </span>
                                " / "
                                <span id="total-time">
                                    {move || format_time(player.get().duration)}
                                </span>
                            </div>
                            <div class="control-spacer"></div>
                            <button
                                id="playback-speed-btn"
                                class="control-btn"
                                aria-label="Playback speed"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    runtime.dispatch_player_action(PlayerAction::ToggleSettings {
                                        pane: SettingsPane::Speed,
                                    });
                                }
                            >
                                <span id="speed-text">
                                    {move || format_speed(player.get().playback_rate)}
                                </span>
                            </button>
                            <button
                                id="quality-btn"
                                class="control-btn"
                                aria-label="Quality"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    runtime.dispatch_player_action(PlayerAction::ToggleSettings {
                                        pane: SettingsPane::Quality,
                                    });
                                }
                            >
                                {move || player.get().quality}
                            </button>
                            <button
                                id="pip-btn"
                                class="control-btn"
                                aria-label="Picture in picture"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    runtime.dispatch_player_action(PlayerAction::TogglePip);
                                }
                            >
                                <i class="fas fa-clone"></i>
                            </button>
                            <button
                                id="fullscreen-btn"
                                class="control-btn"
                                aria-label="Fullscreen"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    runtime.dispatch_player_action(PlayerAction::ToggleFullscreen);
                                }
                            >
                                <i class=move || {
                                    if player.get().fullscreen {
                                        "fas fa-compress"
                                    } else {
                                        "fas fa-expand"
                                    }
                                }></i>
                            </button>
                        </div>
                        <div
                            id="settings-menu"
                            class="settings-menu"
                            class:active=move || player.get().settings_menu.is_some()
                            on:click=move |ev| ev.stop_propagation()
                        >
                            <Show
                                when=move || {
                                    player.get().settings_menu == Some(SettingsPane::Speed)
                                }
                                fallback=|| ()
                            >
                                <div id="speed-options" class="settings-options">
                                    {SPEED_CHOICES
                                        .into_iter()
                                        .map(|rate| {
                                            view! {
                                                <button
                                                    class="settings-option"
                                                    class:active=move || player.get().playback_rate == rate
                                                    on:click=move |_| {
                                                        runtime
                                                            .dispatch_player_action(PlayerAction::SelectSpeed { rate })
                                                    }
                                                >
                                                    {format_speed(rate)}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                            <Show
                                when=move || {
                                    player.get().settings_menu == Some(SettingsPane::Quality)
                                }
                                fallback=|| ()
                            >
                                <div id="quality-options" class="settings-options">
                                    {QUALITY_CHOICES
                                        .into_iter()
                                        .map(|quality| {
                                            view! {
                                                <button
                                                    class="settings-option"
                                                    class:active=move || player.get().quality == quality
                                                    on:click=move |_| {
                                                        runtime
                                                            .dispatch_player_action(PlayerAction::SelectQuality {
                                                                quality,
                                                            })
                                                    }
                                                >
                                                    {quality}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    </div>
                </div>
                <div class="video-modal-info">
                    <div class="video-modal-info-header">
                        <h2 id="modal-title">
                            {move || current_video.get().map(|video| video.title).unwrap_or_default()}
                        </h2>
                        <button
                            id="modal-fav"
                            class="btn-icon"
                            aria-label="Toggle favorite"
                            class:active=move || {
                                open_video
                                    .get()
                                    .map(|id| state.get().is_favorite(id))
                                    .unwrap_or(false)
                            }
                            on:click=move |_| {
                                if let Some(video) = open_video.get_untracked() {
                                    runtime.dispatch_action(AppAction::ToggleFavorite { video });
                                }
                            }
                        >
                            <i class="fas fa-heart"></i>
                        </button>
                    </div>
                    <p id="modal-desc">
                        {move || {
                            current_video
                                .get()
                                .map(|video| {
                                    video
                                        .desc
                                        .unwrap_or_else(|| "No description available.".to_string())
                                })
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
            </div>
        </div>
    }
}

fn apply_player_effect(
    runtime: SiteRuntimeContext,
    effect: PlayerEffect,
    video_ref: NodeRef<html::Video>,
    wrapper_ref: NodeRef<html::Div>,
    controls_timer: StoredValue<Option<TimeoutHandle>>,
) {
    let Some(video) = video_ref.get_untracked() else {
        return;
    };
    match effect {
        PlayerEffect::Play => {
            let element: web_sys::HtmlVideoElement = (*video).clone();
            spawn_local(async move {
                // Blocked autoplay is expected and not an error.
                if let Err(err) = media::play(&element).await {
                    logging::log!("autoplay prevented: {err}");
                }
            });
        }
        PlayerEffect::Pause => {
            let _ = video.pause();
        }
        PlayerEffect::SeekTo { seconds } => {
            video.set_current_time(seconds);
        }
        PlayerEffect::ApplyVolume { volume } => {
            video.set_volume(volume);
        }
        PlayerEffect::ApplyRate { rate } => {
            video.set_playback_rate(rate);
        }
        PlayerEffect::EnterFullscreen => {
            if let Some(wrapper) = wrapper_ref.get_untracked() {
                if let Err(err) = media::request_fullscreen(&wrapper) {
                    logging::warn!("fullscreen request failed: {err}");
                }
            }
        }
        PlayerEffect::ExitFullscreen => {
            media::exit_fullscreen();
        }
        PlayerEffect::EnterPip => {
            if video.ready_state() > 0 {
                if let Err(err) = media::request_picture_in_picture(&video) {
                    logging::warn!("picture-in-picture request failed: {err}");
                }
            }
        }
        PlayerEffect::ExitPip => {
            media::exit_picture_in_picture();
        }
        PlayerEffect::ClearSource => {
            video.set_src("");
        }
        PlayerEffect::ArmControlsTimer => {
            controls_timer.update_value(|slot| {
                if let Some(handle) = slot.take() {
                    handle.clear();
                }
            });
            let arm = set_timeout_with_handle(
                move || runtime.dispatch_player_action(PlayerAction::ControlsTimerFired),
                Duration::from_millis(CONTROLS_HIDE_DELAY_MS),
            );
            match arm {
                Ok(handle) => controls_timer.set_value(Some(handle)),
                Err(err) => logging::warn!("controls timer arm failed: {err:?}"),
            }
        }
    }
}
