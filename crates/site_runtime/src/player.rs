//! Video player state machine.
//!
//! [`PlayerState`] mirrors the media element's transport surface; every DOM
//! event becomes a [`PlayerAction`] and every command back to the element is a
//! [`PlayerEffect`] executed by the modal component. The element itself never
//! leaks into this module, which keeps all player decisions unit-testable.

/// Playback rates offered by the speed menu.
pub const SPEED_CHOICES: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Quality labels offered by the quality menu (display-only selection).
pub const QUALITY_CHOICES: [&str; 4] = ["Auto", "1080p", "720p", "480p"];

/// Idle time before the controls overlay hides during playback.
pub const CONTROLS_HIDE_DELAY_MS: u64 = 3000;

/// Seek distance for the arrow-key shortcuts, in seconds.
pub const KEYBOARD_SEEK_STEP_SECS: f64 = 10.0;

/// Volume distance for the arrow-key shortcuts.
pub const KEYBOARD_VOLUME_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Panes of the settings surface; opening one closes the other.
pub enum SettingsPane {
    /// Playback speed options.
    Speed,
    /// Quality options.
    Quality,
}

#[derive(Debug, Clone, PartialEq)]
/// Reactive player state mirrored from (and commanding) the media element.
pub struct PlayerState {
    /// Whether the element reports active playback.
    pub playing: bool,
    /// Playback position in seconds.
    pub current_time: f64,
    /// Media duration in seconds; `NaN` until metadata arrives.
    pub duration: f64,
    /// End of the furthest buffered range, in seconds.
    pub buffered_end: f64,
    /// Volume in `[0, 1]`; muting is volume zero, nothing is remembered.
    pub volume: f64,
    /// Selected playback rate; survives closing and reopening the modal.
    pub playback_rate: f64,
    /// Selected quality label (display-only).
    pub quality: &'static str,
    /// Whether the player wrapper owns fullscreen.
    pub fullscreen: bool,
    /// Whether a picture-in-picture window is active.
    pub pip: bool,
    /// Open settings pane, if any.
    pub settings_menu: Option<SettingsPane>,
    /// Whether the controls overlay is visible.
    pub controls_visible: bool,
    /// Drag-in-progress flag; suppresses click-triggered seeks.
    pub scrubbing: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playing: false,
            current_time: 0.0,
            duration: f64::NAN,
            buffered_end: 0.0,
            volume: 1.0,
            playback_rate: 1.0,
            quality: QUALITY_CHOICES[0],
            fullscreen: false,
            pip: false,
            settings_menu: None,
            controls_visible: true,
            scrubbing: false,
        }
    }
}

impl PlayerState {
    /// Played fraction of the media in `[0, 1]`, zero while duration is unknown.
    pub fn played_fraction(&self) -> f64 {
        fraction_of_duration(self.current_time, self.duration)
    }

    /// Buffered fraction of the media in `[0, 1]`, zero while duration is unknown.
    pub fn buffered_fraction(&self) -> f64 {
        fraction_of_duration(self.buffered_end, self.duration)
    }
}

fn fraction_of_duration(value: f64, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        (value / duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_player`].
pub enum PlayerAction {
    /// A new source was attached to the element.
    SourceOpened,
    /// The modal is closing; release the element.
    Shutdown,
    /// Toggle play/pause from a button, the video surface, or the keyboard.
    TogglePlayback,
    /// The element reported playback started.
    MediaPlaying,
    /// The element reported playback paused.
    MediaPaused,
    /// The element loaded metadata.
    MetadataLoaded {
        /// Reported duration in seconds.
        duration: f64,
    },
    /// The element reported a playback position change.
    TimeUpdate {
        /// Position in seconds.
        current_time: f64,
    },
    /// The element reported buffering progress.
    BufferedChanged {
        /// End of the furthest buffered range, in seconds.
        buffered_end: f64,
    },
    /// Single click on the progress track.
    ClickSeek {
        /// Click position as a fraction of the track width.
        fraction: f64,
    },
    /// Pointer went down on the progress track.
    BeginScrub {
        /// Pointer position as a fraction of the track width.
        fraction: f64,
    },
    /// Pointer moved during a scrub.
    UpdateScrub {
        /// Pointer position as a fraction of the track width.
        fraction: f64,
    },
    /// Pointer released after a scrub.
    EndScrub,
    /// Volume slider input.
    SetVolume {
        /// New volume in `[0, 1]`.
        volume: f64,
    },
    /// Mute button: binary 0↔1, no prior value remembered.
    ToggleMute,
    /// Keyboard volume step.
    StepVolume {
        /// Signed volume delta.
        delta: f64,
    },
    /// Keyboard seek step.
    StepSeek {
        /// Signed seek delta in seconds.
        delta_secs: f64,
    },
    /// Speed menu selection.
    SelectSpeed {
        /// Chosen playback rate.
        rate: f64,
    },
    /// Quality menu selection.
    SelectQuality {
        /// Chosen quality label.
        quality: &'static str,
    },
    /// Settings button toggled a pane.
    ToggleSettings {
        /// Pane the button belongs to.
        pane: SettingsPane,
    },
    /// Close the settings surface (outside click).
    CloseSettings,
    /// Fullscreen button or keyboard shortcut.
    ToggleFullscreen,
    /// The document reported a fullscreen change.
    FullscreenChanged {
        /// Whether fullscreen is now active.
        active: bool,
    },
    /// Picture-in-picture button.
    TogglePip,
    /// The element reported entering/leaving picture-in-picture.
    PipChanged {
        /// Whether picture-in-picture is now active.
        active: bool,
    },
    /// Pointer moved over the player; keeps controls visible.
    PointerActivity,
    /// The controls auto-hide timer fired.
    ControlsTimerFired,
}

#[derive(Debug, Clone, PartialEq)]
/// Commands executed against the media element by the modal component.
pub enum PlayerEffect {
    /// Start playback (autoplay rejection is logged and ignored).
    Play,
    /// Pause playback.
    Pause,
    /// Seek to an absolute position.
    SeekTo {
        /// Target position in seconds.
        seconds: f64,
    },
    /// Apply a volume to the element.
    ApplyVolume {
        /// Volume in `[0, 1]`.
        volume: f64,
    },
    /// Apply a playback rate to the element.
    ApplyRate {
        /// Playback rate.
        rate: f64,
    },
    /// Request fullscreen on the player wrapper.
    EnterFullscreen,
    /// Leave fullscreen.
    ExitFullscreen,
    /// Request picture-in-picture on the element.
    EnterPip,
    /// Leave picture-in-picture.
    ExitPip,
    /// Clear the element source, releasing the underlying resource.
    ClearSource,
    /// Re-arm (replace) the controls auto-hide timer.
    ArmControlsTimer,
}

/// Applies a [`PlayerAction`] to the player state and collects the element
/// commands it implies.
pub fn reduce_player(state: &mut PlayerState, action: PlayerAction) -> Vec<PlayerEffect> {
    let mut effects = Vec::new();
    match action {
        PlayerAction::SourceOpened => {
            state.current_time = 0.0;
            state.duration = f64::NAN;
            state.buffered_end = 0.0;
            state.scrubbing = false;
            state.settings_menu = None;
            state.controls_visible = true;
            // The last user-selected speed carries over to the new source.
            effects.push(PlayerEffect::ApplyRate {
                rate: state.playback_rate,
            });
            effects.push(PlayerEffect::Play);
            effects.push(PlayerEffect::ArmControlsTimer);
        }
        PlayerAction::Shutdown => {
            state.playing = false;
            state.scrubbing = false;
            state.settings_menu = None;
            state.controls_visible = true;
            effects.push(PlayerEffect::Pause);
            effects.push(PlayerEffect::ClearSource);
        }
        PlayerAction::TogglePlayback => {
            effects.push(if state.playing {
                PlayerEffect::Pause
            } else {
                PlayerEffect::Play
            });
            show_controls(state, &mut effects);
        }
        PlayerAction::MediaPlaying => {
            state.playing = true;
        }
        PlayerAction::MediaPaused => {
            state.playing = false;
            state.controls_visible = true;
        }
        PlayerAction::MetadataLoaded { duration } => {
            state.duration = duration;
        }
        PlayerAction::TimeUpdate { current_time } => {
            if !state.scrubbing {
                state.current_time = current_time;
            }
        }
        PlayerAction::BufferedChanged { buffered_end } => {
            state.buffered_end = buffered_end;
        }
        PlayerAction::ClickSeek { fraction } => {
            // A click arrives at the end of a drag as well; the drag flag
            // decides which of the two owns the seek.
            if !state.scrubbing {
                seek_to_fraction(state, fraction, &mut effects);
            }
        }
        PlayerAction::BeginScrub { fraction } => {
            state.scrubbing = true;
            seek_to_fraction(state, fraction, &mut effects);
        }
        PlayerAction::UpdateScrub { fraction } => {
            if state.scrubbing {
                seek_to_fraction(state, fraction, &mut effects);
            }
        }
        PlayerAction::EndScrub => {
            state.scrubbing = false;
        }
        PlayerAction::SetVolume { volume } => {
            apply_volume(state, volume, &mut effects);
        }
        PlayerAction::ToggleMute => {
            let volume = if state.volume > 0.0 { 0.0 } else { 1.0 };
            apply_volume(state, volume, &mut effects);
        }
        PlayerAction::StepVolume { delta } => {
            apply_volume(state, state.volume + delta, &mut effects);
        }
        PlayerAction::StepSeek { delta_secs } => {
            if state.duration.is_finite() && state.duration > 0.0 {
                let target = (state.current_time + delta_secs).clamp(0.0, state.duration);
                state.current_time = target;
                effects.push(PlayerEffect::SeekTo { seconds: target });
            }
        }
        PlayerAction::SelectSpeed { rate } => {
            if SPEED_CHOICES.iter().any(|choice| *choice == rate) {
                state.playback_rate = rate;
                effects.push(PlayerEffect::ApplyRate { rate });
            }
            state.settings_menu = None;
        }
        PlayerAction::SelectQuality { quality } => {
            if QUALITY_CHOICES.contains(&quality) {
                state.quality = quality;
            }
            state.settings_menu = None;
        }
        PlayerAction::ToggleSettings { pane } => {
            state.settings_menu = if state.settings_menu == Some(pane) {
                None
            } else {
                Some(pane)
            };
        }
        PlayerAction::CloseSettings => {
            state.settings_menu = None;
        }
        PlayerAction::ToggleFullscreen => {
            effects.push(if state.fullscreen {
                PlayerEffect::ExitFullscreen
            } else {
                PlayerEffect::EnterFullscreen
            });
        }
        PlayerAction::FullscreenChanged { active } => {
            state.fullscreen = active;
        }
        PlayerAction::TogglePip => {
            effects.push(if state.pip {
                PlayerEffect::ExitPip
            } else {
                PlayerEffect::EnterPip
            });
        }
        PlayerAction::PipChanged { active } => {
            state.pip = active;
        }
        PlayerAction::PointerActivity => {
            show_controls(state, &mut effects);
        }
        PlayerAction::ControlsTimerFired => {
            if state.playing {
                state.controls_visible = false;
            }
        }
    }
    effects
}

fn show_controls(state: &mut PlayerState, effects: &mut Vec<PlayerEffect>) {
    state.controls_visible = true;
    effects.push(PlayerEffect::ArmControlsTimer);
}

fn seek_to_fraction(state: &mut PlayerState, fraction: f64, effects: &mut Vec<PlayerEffect>) {
    if !state.duration.is_finite() || state.duration <= 0.0 {
        return;
    }
    let seconds = fraction.clamp(0.0, 1.0) * state.duration;
    state.current_time = seconds;
    effects.push(PlayerEffect::SeekTo { seconds });
}

fn apply_volume(state: &mut PlayerState, volume: f64, effects: &mut Vec<PlayerEffect>) {
    let volume = volume.clamp(0.0, 1.0);
    state.volume = volume;
    effects.push(PlayerEffect::ApplyVolume { volume });
}

/// Formats a second count for the transport display: `H:MM:SS` at an hour or
/// more, `M:SS` below, and `0:00` for non-finite input.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Formats a playback rate for the speed button and menu (`"1x"`, `"1.5x"`).
pub fn format_speed(rate: f64) -> String {
    format!("{rate}x")
}

/// Icon class for the volume button at a given volume.
pub fn volume_icon(volume: f64) -> &'static str {
    if volume == 0.0 {
        "fa-volume-mute"
    } else if volume < 0.5 {
        "fa-volume-down"
    } else {
        "fa-volume-up"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ready_state() -> PlayerState {
        let mut state = PlayerState::default();
        reduce_player(&mut state, PlayerAction::MetadataLoaded { duration: 200.0 });
        state
    }

    #[test]
    fn format_time_matches_transport_display_contract() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(61.0), "1:01");
        assert_eq!(format_time(3661.0), "1:01:01");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(3599.0), "59:59");
        assert_eq!(format_time(3600.0), "1:00:00");
    }

    #[test]
    fn opening_a_source_reapplies_last_speed_and_plays() {
        let mut state = PlayerState::default();
        reduce_player(&mut state, PlayerAction::SelectSpeed { rate: 1.5 });

        let effects = reduce_player(&mut state, PlayerAction::SourceOpened);
        assert_eq!(
            effects,
            vec![
                PlayerEffect::ApplyRate { rate: 1.5 },
                PlayerEffect::Play,
                PlayerEffect::ArmControlsTimer,
            ]
        );
        assert!(state.controls_visible);
        assert_eq!(state.current_time, 0.0);
        assert!(state.duration.is_nan());
    }

    #[test]
    fn shutdown_pauses_clears_source_and_closes_settings() {
        let mut state = ready_state();
        reduce_player(
            &mut state,
            PlayerAction::ToggleSettings {
                pane: SettingsPane::Speed,
            },
        );
        reduce_player(&mut state, PlayerAction::MediaPlaying);

        let effects = reduce_player(&mut state, PlayerAction::Shutdown);
        assert_eq!(effects, vec![PlayerEffect::Pause, PlayerEffect::ClearSource]);
        assert_eq!(state.settings_menu, None);
        assert!(!state.playing);
        // The selected speed survives for the next open.
        assert_eq!(state.playback_rate, 1.0);
    }

    #[test]
    fn click_seek_is_suppressed_while_scrubbing() {
        let mut state = ready_state();
        reduce_player(&mut state, PlayerAction::BeginScrub { fraction: 0.25 });
        assert_eq!(state.current_time, 50.0);

        let effects = reduce_player(&mut state, PlayerAction::ClickSeek { fraction: 0.9 });
        assert!(effects.is_empty());
        assert_eq!(state.current_time, 50.0);

        reduce_player(&mut state, PlayerAction::EndScrub);
        let effects = reduce_player(&mut state, PlayerAction::ClickSeek { fraction: 0.5 });
        assert_eq!(effects, vec![PlayerEffect::SeekTo { seconds: 100.0 }]);
    }

    #[test]
    fn scrub_updates_track_the_pointer_and_clamp() {
        let mut state = ready_state();
        reduce_player(&mut state, PlayerAction::BeginScrub { fraction: 0.1 });
        reduce_player(&mut state, PlayerAction::UpdateScrub { fraction: 1.7 });
        assert_eq!(state.current_time, 200.0);
        reduce_player(&mut state, PlayerAction::UpdateScrub { fraction: -0.3 });
        assert_eq!(state.current_time, 0.0);
    }

    #[test]
    fn element_time_updates_are_ignored_while_scrubbing() {
        let mut state = ready_state();
        reduce_player(&mut state, PlayerAction::BeginScrub { fraction: 0.5 });
        reduce_player(&mut state, PlayerAction::TimeUpdate { current_time: 3.0 });
        assert_eq!(state.current_time, 100.0);
        reduce_player(&mut state, PlayerAction::EndScrub);
        reduce_player(&mut state, PlayerAction::TimeUpdate { current_time: 3.0 });
        assert_eq!(state.current_time, 3.0);
    }

    #[test]
    fn seeks_are_dropped_while_duration_is_unknown() {
        let mut state = PlayerState::default();
        let effects = reduce_player(&mut state, PlayerAction::ClickSeek { fraction: 0.5 });
        assert!(effects.is_empty());
        let effects = reduce_player(&mut state, PlayerAction::StepSeek { delta_secs: 10.0 });
        assert!(effects.is_empty());
    }

    #[test]
    fn mute_toggle_is_binary_and_remembers_nothing() {
        let mut state = PlayerState::default();
        reduce_player(&mut state, PlayerAction::SetVolume { volume: 0.3 });
        let effects = reduce_player(&mut state, PlayerAction::ToggleMute);
        assert_eq!(state.volume, 0.0);
        assert_eq!(effects, vec![PlayerEffect::ApplyVolume { volume: 0.0 }]);

        reduce_player(&mut state, PlayerAction::ToggleMute);
        // Unmute restores full volume, not the previous 0.3.
        assert_eq!(state.volume, 1.0);
    }

    #[test]
    fn volume_steps_clamp_to_the_unit_range() {
        let mut state = PlayerState::default();
        reduce_player(&mut state, PlayerAction::StepVolume { delta: 0.1 });
        assert_eq!(state.volume, 1.0);
        for _ in 0..12 {
            reduce_player(&mut state, PlayerAction::StepVolume { delta: -0.1 });
        }
        assert_eq!(state.volume, 0.0);
    }

    #[test]
    fn keyboard_seek_clamps_to_media_bounds() {
        let mut state = ready_state();
        reduce_player(&mut state, PlayerAction::StepSeek { delta_secs: -10.0 });
        assert_eq!(state.current_time, 0.0);
        reduce_player(&mut state, PlayerAction::ClickSeek { fraction: 0.99 });
        reduce_player(&mut state, PlayerAction::StepSeek { delta_secs: 10.0 });
        assert_eq!(state.current_time, 200.0);
    }

    #[test]
    fn settings_panes_are_mutually_exclusive() {
        let mut state = PlayerState::default();
        reduce_player(
            &mut state,
            PlayerAction::ToggleSettings {
                pane: SettingsPane::Speed,
            },
        );
        assert_eq!(state.settings_menu, Some(SettingsPane::Speed));

        reduce_player(
            &mut state,
            PlayerAction::ToggleSettings {
                pane: SettingsPane::Quality,
            },
        );
        assert_eq!(state.settings_menu, Some(SettingsPane::Quality));

        reduce_player(
            &mut state,
            PlayerAction::ToggleSettings {
                pane: SettingsPane::Quality,
            },
        );
        assert_eq!(state.settings_menu, None);
    }

    #[test]
    fn selecting_a_speed_applies_it_and_closes_the_menu() {
        let mut state = PlayerState::default();
        reduce_player(
            &mut state,
            PlayerAction::ToggleSettings {
                pane: SettingsPane::Speed,
            },
        );
        let effects = reduce_player(&mut state, PlayerAction::SelectSpeed { rate: 2.0 });
        assert_eq!(state.playback_rate, 2.0);
        assert_eq!(state.settings_menu, None);
        assert_eq!(effects, vec![PlayerEffect::ApplyRate { rate: 2.0 }]);

        // Rates outside the menu's discrete set are rejected.
        reduce_player(&mut state, PlayerAction::SelectSpeed { rate: 3.5 });
        assert_eq!(state.playback_rate, 2.0);
    }

    #[test]
    fn controls_hide_only_while_playing() {
        let mut state = PlayerState::default();
        reduce_player(&mut state, PlayerAction::MediaPlaying);
        let effects = reduce_player(&mut state, PlayerAction::PointerActivity);
        assert!(effects.contains(&PlayerEffect::ArmControlsTimer));
        reduce_player(&mut state, PlayerAction::ControlsTimerFired);
        assert!(!state.controls_visible);

        reduce_player(&mut state, PlayerAction::PointerActivity);
        reduce_player(&mut state, PlayerAction::MediaPaused);
        reduce_player(&mut state, PlayerAction::ControlsTimerFired);
        assert!(state.controls_visible);
    }

    #[test]
    fn fullscreen_and_pip_toggles_emit_platform_requests() {
        let mut state = PlayerState::default();
        assert_eq!(
            reduce_player(&mut state, PlayerAction::ToggleFullscreen),
            vec![PlayerEffect::EnterFullscreen]
        );
        reduce_player(&mut state, PlayerAction::FullscreenChanged { active: true });
        assert_eq!(
            reduce_player(&mut state, PlayerAction::ToggleFullscreen),
            vec![PlayerEffect::ExitFullscreen]
        );

        assert_eq!(
            reduce_player(&mut state, PlayerAction::TogglePip),
            vec![PlayerEffect::EnterPip]
        );
        reduce_player(&mut state, PlayerAction::PipChanged { active: true });
        assert_eq!(
            reduce_player(&mut state, PlayerAction::TogglePip),
            vec![PlayerEffect::ExitPip]
        );
    }

    #[test]
    fn progress_fractions_guard_unknown_duration() {
        let mut state = PlayerState::default();
        assert_eq!(state.played_fraction(), 0.0);
        reduce_player(&mut state, PlayerAction::MetadataLoaded { duration: 100.0 });
        reduce_player(&mut state, PlayerAction::TimeUpdate { current_time: 25.0 });
        reduce_player(
            &mut state,
            PlayerAction::BufferedChanged { buffered_end: 80.0 },
        );
        assert_eq!(state.played_fraction(), 0.25);
        assert_eq!(state.buffered_fraction(), 0.8);
    }

    #[test]
    fn volume_icon_bands() {
        assert_eq!(volume_icon(0.0), "fa-volume-mute");
        assert_eq!(volume_icon(0.4), "fa-volume-down");
        assert_eq!(volume_icon(0.5), "fa-volume-up");
    }

    #[test]
    fn speed_labels_render_without_trailing_zeros() {
        assert_eq!(format_speed(1.0), "1x");
        assert_eq!(format_speed(0.25), "0.25x");
        assert_eq!(format_speed(1.5), "1.5x");
    }
}
