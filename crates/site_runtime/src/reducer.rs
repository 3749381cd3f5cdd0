//! Reducer actions, side-effect intents, and transition logic for the site.

use media_catalog::{CreatorId, VideoId};

use crate::model::{
    AppState, ExploreFilter, GateStatus, Toast, ToastKind, ViewId, UNDERAGE_REDIRECT_DELAY_MS,
};

const MIN_PLAUSIBLE_AGE: i64 = 1;
const MAX_PLAUSIBLE_AGE: i64 = 150;
const ADULT_AGE: i64 = 18;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_app`] to mutate [`AppState`].
pub enum AppAction {
    /// Apply the verification flags read from storage at boot.
    HydrateVerification {
        /// Durable flag from the long-lived store.
        long_lived: bool,
        /// Tab-scoped flag from the session store.
        session: bool,
    },
    /// Apply the favorites list read from storage at boot.
    HydrateFavorites {
        /// Persisted favorite ids.
        favorites: Vec<VideoId>,
    },
    /// Submit the age entered into the gate input.
    SubmitAge {
        /// Raw input field contents.
        input: String,
    },
    /// The visitor chose to leave from the gate.
    LeaveSite,
    /// Activate a view panel.
    SwitchView {
        /// Target view.
        view: ViewId,
    },
    /// Select an explore filter button.
    SetExploreFilter {
        /// Chosen filter.
        filter: ExploreFilter,
    },
    /// Update the live search query.
    SetSearchQuery {
        /// New query text.
        query: String,
    },
    /// Toggle a video's favorites membership.
    ToggleFavorite {
        /// Video to toggle.
        video: VideoId,
    },
    /// Open the player modal for a video.
    OpenVideo {
        /// Video to open.
        video: VideoId,
    },
    /// Close the player modal.
    CloseVideo,
    /// Open a creator's profile view.
    OpenCreatorProfile {
        /// Creator to show.
        creator: CreatorId,
    },
    /// Remove a toast (dismissal timer fired).
    DismissToast {
        /// Toast to remove.
        toast_id: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_app`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Persist the current favorites list.
    PersistFavorites,
    /// Persist both verification flags plus the timestamp.
    PersistVerification,
    /// Replace the browsing context with the safe exit page.
    RedirectToSafeSite {
        /// Delay before navigation, in milliseconds.
        delay_ms: u32,
    },
    /// Reset the window scroll position to the top.
    ScrollToTop,
    /// Clear and refocus the age input after invalid input.
    ResetAgeInput,
    /// Arm the auto-dismiss timer for a queued toast.
    ArmToastDismiss {
        /// Toast the timer belongs to.
        toast_id: u64,
    },
}

/// Applies an [`AppAction`] to the site state and collects resulting side
/// effects.
///
/// This function is the authoritative state transition engine for the age
/// gate, navigation, favorites, search, and toast queue.
pub fn reduce_app(state: &mut AppState, action: AppAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        AppAction::HydrateVerification {
            long_lived,
            session,
        } => {
            // Both flags must independently read true; a durable flag from an
            // earlier visit is not enough in a fresh tab.
            if state.gate == GateStatus::Unverified && long_lived && session {
                state.gate = GateStatus::Verified;
            }
        }
        AppAction::HydrateFavorites { favorites } => {
            state.favorites = favorites;
        }
        AppAction::SubmitAge { input } => {
            if state.gate != GateStatus::Unverified {
                return effects;
            }
            let age = input.trim().parse::<i64>().ok();
            match age {
                Some(age) if (MIN_PLAUSIBLE_AGE..=MAX_PLAUSIBLE_AGE).contains(&age) => {
                    if age >= ADULT_AGE {
                        state.gate = GateStatus::Verified;
                        effects.push(RuntimeEffect::PersistVerification);
                        effects.push(push_toast(
                            state,
                            "Welcome! Age verified successfully.",
                            ToastKind::Success,
                        ));
                    } else {
                        state.gate = GateStatus::Denied;
                        effects.push(push_toast(
                            state,
                            "Access Denied: You must be 18 or older to enter this website.",
                            ToastKind::Error,
                        ));
                        effects.push(RuntimeEffect::RedirectToSafeSite {
                            delay_ms: UNDERAGE_REDIRECT_DELAY_MS,
                        });
                    }
                }
                _ => {
                    effects.push(push_toast(
                        state,
                        "Please enter a valid age between 1 and 150",
                        ToastKind::Error,
                    ));
                    effects.push(RuntimeEffect::ResetAgeInput);
                }
            }
        }
        AppAction::LeaveSite => {
            effects.push(RuntimeEffect::RedirectToSafeSite { delay_ms: 0 });
        }
        AppAction::SwitchView { view } => {
            switch_view(state, view, &mut effects);
        }
        AppAction::SetExploreFilter { filter } => {
            state.explore_filter = filter;
            // A filter selection replaces whatever a search put on the grid.
            state.search_query.clear();
        }
        AppAction::SetSearchQuery { query } => {
            if !query.is_empty() && state.current_view != ViewId::Explore {
                switch_view(state, ViewId::Explore, &mut effects);
            }
            state.search_query = query;
        }
        AppAction::ToggleFavorite { video } => {
            if let Some(index) = state.favorites.iter().position(|id| *id == video) {
                state.favorites.remove(index);
                effects.push(push_toast(state, "Removed from Favorites", ToastKind::Error));
            } else {
                state.favorites.push(video);
                effects.push(push_toast(state, "Added to Favorites", ToastKind::Success));
            }
            effects.push(RuntimeEffect::PersistFavorites);
        }
        AppAction::OpenVideo { video } => {
            state.open_video = Some(video);
        }
        AppAction::CloseVideo => {
            state.open_video = None;
        }
        AppAction::OpenCreatorProfile { creator } => {
            state.profile_creator = Some(creator);
            switch_view(state, ViewId::CreatorProfile, &mut effects);
        }
        AppAction::DismissToast { toast_id } => {
            state.toasts.retain(|toast| toast.id != toast_id);
        }
    }
    effects
}

fn switch_view(state: &mut AppState, view: ViewId, effects: &mut Vec<RuntimeEffect>) {
    state.current_view = view;
    if view != ViewId::CreatorProfile {
        state.profile_creator = None;
    }
    effects.push(RuntimeEffect::ScrollToTop);
}

fn push_toast(state: &mut AppState, message: &str, kind: ToastKind) -> RuntimeEffect {
    let id = state.next_toast_id;
    state.next_toast_id += 1;
    state.toasts.push(Toast {
        id,
        message: message.to_string(),
        kind,
    });
    RuntimeEffect::ArmToastDismiss { toast_id: id }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn submit(state: &mut AppState, input: &str) -> Vec<RuntimeEffect> {
        reduce_app(
            state,
            AppAction::SubmitAge {
                input: input.to_string(),
            },
        )
    }

    #[test]
    fn every_plausible_age_verifies_iff_adult() {
        for age in 1..=150i64 {
            let mut state = AppState::default();
            let effects = submit(&mut state, &age.to_string());
            if age >= 18 {
                assert_eq!(state.gate, GateStatus::Verified, "age {age}");
                assert!(effects.contains(&RuntimeEffect::PersistVerification));
            } else {
                assert_eq!(state.gate, GateStatus::Denied, "age {age}");
                assert!(effects.contains(&RuntimeEffect::RedirectToSafeSite {
                    delay_ms: UNDERAGE_REDIRECT_DELAY_MS
                }));
            }
        }
    }

    #[test]
    fn invalid_age_input_leaves_state_untouched_and_resets_input() {
        for input in ["", "abc", "0", "151", "17.5", "-4"] {
            let mut state = AppState::default();
            let effects = submit(&mut state, input);
            assert_eq!(state.gate, GateStatus::Unverified, "input {input:?}");
            assert!(effects.contains(&RuntimeEffect::ResetAgeInput));
            assert!(!effects.contains(&RuntimeEffect::PersistVerification));
            assert_eq!(state.toasts.len(), 1);
            assert_eq!(state.toasts[0].kind, ToastKind::Error);
        }
    }

    #[test]
    fn whitespace_around_a_valid_age_is_accepted() {
        let mut state = AppState::default();
        submit(&mut state, "  21 ");
        assert_eq!(state.gate, GateStatus::Verified);
    }

    #[test]
    fn submit_is_one_shot_once_denied() {
        let mut state = AppState::default();
        submit(&mut state, "15");
        assert_eq!(state.gate, GateStatus::Denied);

        let effects = submit(&mut state, "40");
        assert_eq!(state.gate, GateStatus::Denied);
        assert!(effects.is_empty());
    }

    #[test]
    fn hydration_requires_both_flags() {
        let cases = [
            (false, false, GateStatus::Unverified),
            (true, false, GateStatus::Unverified),
            (false, true, GateStatus::Unverified),
            (true, true, GateStatus::Verified),
        ];
        for (long_lived, session, expected) in cases {
            let mut state = AppState::default();
            reduce_app(
                &mut state,
                AppAction::HydrateVerification {
                    long_lived,
                    session,
                },
            );
            assert_eq!(state.gate, expected, "long={long_lived} session={session}");
        }
    }

    #[test]
    fn toggling_a_favorite_twice_restores_membership() {
        let mut state = AppState::default();
        state.favorites = vec![VideoId(1), VideoId(2)];
        let original = state.favorites.clone();

        let effects = reduce_app(&mut state, AppAction::ToggleFavorite { video: VideoId(9) });
        assert_eq!(state.favorites, vec![VideoId(1), VideoId(2), VideoId(9)]);
        assert!(effects.contains(&RuntimeEffect::PersistFavorites));

        let effects = reduce_app(&mut state, AppAction::ToggleFavorite { video: VideoId(9) });
        assert_eq!(state.favorites, original);
        assert!(effects.contains(&RuntimeEffect::PersistFavorites));
    }

    #[test]
    fn favorite_toggle_toasts_added_and_removed() {
        let mut state = AppState::default();
        reduce_app(&mut state, AppAction::ToggleFavorite { video: VideoId(4) });
        assert_eq!(state.toasts[0].message, "Added to Favorites");
        assert_eq!(state.toasts[0].kind, ToastKind::Success);

        reduce_app(&mut state, AppAction::ToggleFavorite { video: VideoId(4) });
        assert_eq!(state.toasts[1].message, "Removed from Favorites");
        assert_eq!(state.toasts[1].kind, ToastKind::Error);
    }

    #[test]
    fn switching_views_resets_scroll_and_clears_profile() {
        let mut state = AppState::default();
        reduce_app(
            &mut state,
            AppAction::OpenCreatorProfile {
                creator: CreatorId(2),
            },
        );
        assert_eq!(state.current_view, ViewId::CreatorProfile);
        assert_eq!(state.profile_creator, Some(CreatorId(2)));

        let effects = reduce_app(
            &mut state,
            AppAction::SwitchView {
                view: ViewId::Favorites,
            },
        );
        assert_eq!(state.current_view, ViewId::Favorites);
        assert_eq!(state.profile_creator, None);
        assert_eq!(effects, vec![RuntimeEffect::ScrollToTop]);
    }

    #[test]
    fn nonempty_search_moves_to_explore_once() {
        let mut state = AppState::default();
        let effects = reduce_app(
            &mut state,
            AppAction::SetSearchQuery {
                query: "night".to_string(),
            },
        );
        assert_eq!(state.current_view, ViewId::Explore);
        assert_eq!(state.search_query, "night");
        assert!(effects.contains(&RuntimeEffect::ScrollToTop));

        let effects = reduce_app(
            &mut state,
            AppAction::SetSearchQuery {
                query: "night d".to_string(),
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn clearing_search_keeps_the_explore_view_and_filter() {
        let mut state = AppState::default();
        reduce_app(
            &mut state,
            AppAction::SetExploreFilter {
                filter: ExploreFilter::Trending,
            },
        );
        reduce_app(
            &mut state,
            AppAction::SetSearchQuery {
                query: "x".to_string(),
            },
        );
        reduce_app(
            &mut state,
            AppAction::SetSearchQuery {
                query: String::new(),
            },
        );
        assert_eq!(state.current_view, ViewId::Explore);
        assert_eq!(state.explore_filter, ExploreFilter::Trending);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn selecting_a_filter_clears_the_search_query() {
        let mut state = AppState::default();
        reduce_app(
            &mut state,
            AppAction::SetSearchQuery {
                query: "luna".to_string(),
            },
        );
        reduce_app(
            &mut state,
            AppAction::SetExploreFilter {
                filter: ExploreFilter::New,
            },
        );
        assert_eq!(state.search_query, "");
        assert_eq!(state.explore_filter, ExploreFilter::New);
    }

    #[test]
    fn toast_lifecycle_arms_then_dismisses() {
        let mut state = AppState::default();
        let effects = reduce_app(&mut state, AppAction::ToggleFavorite { video: VideoId(1) });
        let toast_id = state.toasts[0].id;
        assert!(effects.contains(&RuntimeEffect::ArmToastDismiss { toast_id }));

        reduce_app(&mut state, AppAction::DismissToast { toast_id });
        assert!(state.toasts.is_empty());
        // Dismissing an already-dismissed toast is harmless.
        reduce_app(&mut state, AppAction::DismissToast { toast_id });
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn open_and_close_video_track_the_modal_target() {
        let mut state = AppState::default();
        reduce_app(&mut state, AppAction::OpenVideo { video: VideoId(7) });
        assert_eq!(state.open_video, Some(VideoId(7)));
        reduce_app(&mut state, AppAction::CloseVideo);
        assert_eq!(state.open_video, None);
    }

    #[test]
    fn leave_site_redirects_immediately() {
        let mut state = AppState::default();
        let effects = reduce_app(&mut state, AppAction::LeaveSite);
        assert_eq!(
            effects,
            vec![RuntimeEffect::RedirectToSafeSite { delay_ms: 0 }]
        );
    }
}
