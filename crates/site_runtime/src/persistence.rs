//! Storage keys and load/save helpers for verification state and favorites.

use media_catalog::VideoId;
use platform_host::{load_pref_with, save_pref_with, PrefsStore, SessionStore};

/// Durable key holding the serialized favorites array.
pub const FAVORITES_KEY: &str = "favorites";

/// Verification flag key, used in both the durable and session stores.
pub const AGE_VERIFIED_KEY: &str = "ageVerified";

/// Durable key holding the verification time as string epoch millis.
pub const AGE_VERIFIED_TIMESTAMP_KEY: &str = "ageVerifiedTimestamp";

const VERIFIED_VALUE: &str = "true";

/// Loads the persisted favorites list; an absent key is an empty list.
///
/// # Errors
///
/// Returns an error when the store fails or holds unparseable data.
pub async fn load_favorites<P: PrefsStore + ?Sized>(prefs: &P) -> Result<Vec<VideoId>, String> {
    Ok(load_pref_with(prefs, FAVORITES_KEY).await?.unwrap_or_default())
}

/// Persists the favorites list as a JSON array of ids.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_favorites<P: PrefsStore + ?Sized>(
    prefs: &P,
    favorites: &[VideoId],
) -> Result<(), String> {
    save_pref_with(prefs, FAVORITES_KEY, &favorites).await
}

/// Reads the durable verification flag.
///
/// # Errors
///
/// Returns an error when the store fails.
pub async fn load_long_lived_flag<P: PrefsStore + ?Sized>(prefs: &P) -> Result<bool, String> {
    Ok(prefs.load_pref(AGE_VERIFIED_KEY).await?.as_deref() == Some(VERIFIED_VALUE))
}

/// Reads the tab-session verification flag.
pub fn load_session_flag<S: SessionStore + ?Sized>(session: &S) -> bool {
    session.get(AGE_VERIFIED_KEY).as_deref() == Some(VERIFIED_VALUE)
}

/// Writes both verification flags plus the timestamp.
///
/// Both flags are only ever set together here; the session flag forces
/// re-verification in a brand-new tab even while the durable flag persists.
///
/// # Errors
///
/// Returns an error when either store write fails.
pub async fn persist_verification<P: PrefsStore + ?Sized, S: SessionStore + ?Sized>(
    prefs: &P,
    session: &S,
    timestamp_ms: u64,
) -> Result<(), String> {
    prefs.save_pref(AGE_VERIFIED_KEY, VERIFIED_VALUE).await?;
    session.set(AGE_VERIFIED_KEY, VERIFIED_VALUE)?;
    prefs
        .save_pref(AGE_VERIFIED_TIMESTAMP_KEY, &timestamp_ms.to_string())
        .await
}

/// Whether the unload teardown should clear the durable flag.
///
/// Either flag missing means the pair was not written by the success path,
/// so the durable flag is treated as tampering residue.
pub fn should_clear_verification(long_lived: Option<&str>, session: Option<&str>) -> bool {
    long_lived.is_none() || session.is_none()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, MemorySessionStore};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn favorites_round_trip_and_default_empty() {
        let prefs = MemoryPrefsStore::default();
        assert_eq!(block_on(load_favorites(&prefs)).expect("load"), vec![]);

        let favorites = vec![VideoId(3), VideoId(1), VideoId(8)];
        block_on(save_favorites(&prefs, &favorites)).expect("save");
        assert_eq!(block_on(load_favorites(&prefs)).expect("load"), favorites);
        // The on-disk shape is a plain JSON id array.
        assert_eq!(prefs.raw(FAVORITES_KEY).as_deref(), Some("[3,1,8]"));
    }

    #[test]
    fn verification_flags_are_written_together() {
        let prefs = MemoryPrefsStore::default();
        let session = MemorySessionStore::default();

        assert!(!block_on(load_long_lived_flag(&prefs)).expect("load"));
        assert!(!load_session_flag(&session));

        block_on(persist_verification(&prefs, &session, 1_723_000_000_000)).expect("persist");
        assert!(block_on(load_long_lived_flag(&prefs)).expect("load"));
        assert!(load_session_flag(&session));
        assert_eq!(
            prefs.raw(AGE_VERIFIED_TIMESTAMP_KEY).as_deref(),
            Some("1723000000000")
        );
    }

    #[test]
    fn one_flag_alone_does_not_verify_a_fresh_session() {
        let prefs = MemoryPrefsStore::default();
        block_on(prefs.save_pref(AGE_VERIFIED_KEY, VERIFIED_VALUE)).expect("save");

        // A fresh tab gets a fresh session store.
        let fresh_session = MemorySessionStore::default();
        let long_lived = block_on(load_long_lived_flag(&prefs)).expect("load");
        let session = load_session_flag(&fresh_session);
        assert!(long_lived);
        assert!(!session);
        assert!(!(long_lived && session));
    }

    #[test]
    fn storage_mirrors_state_after_every_toggle() {
        use crate::{
            model::AppState,
            reducer::{reduce_app, AppAction, RuntimeEffect},
        };

        let prefs = MemoryPrefsStore::default();
        let mut state = AppState::default();

        for _ in 0..2 {
            let effects = reduce_app(&mut state, AppAction::ToggleFavorite { video: VideoId(5) });
            assert!(effects.contains(&RuntimeEffect::PersistFavorites));
            block_on(save_favorites(&prefs, &state.favorites)).expect("save");
            assert_eq!(
                block_on(load_favorites(&prefs)).expect("load"),
                state.favorites
            );
        }
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn teardown_clears_only_on_partial_state() {
        assert!(should_clear_verification(None, None));
        assert!(should_clear_verification(Some("true"), None));
        assert!(should_clear_verification(None, Some("true")));
        assert!(!should_clear_verification(Some("true"), Some("true")));
    }
}
