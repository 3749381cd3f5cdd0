//! Runtime provider and context wiring for the site shell.
//!
//! This module owns the long-lived state signals, the reducer dispatch
//! callbacks, and the runtime effect queues. UI composition stays in
//! [`crate::components`].

use std::rc::Rc;

use leptos::*;
use media_catalog::Catalog;

use crate::{
    effect_executor,
    host::SiteHostContext,
    model::AppState,
    player::{reduce_player, PlayerAction, PlayerEffect, PlayerState},
    reducer::{reduce_app, AppAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading site state and dispatching actions.
pub struct SiteRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<SiteHostContext>,
    /// Read-only content snapshot for the session.
    pub catalog: StoredValue<Rc<Catalog>>,
    /// Reactive application state signal.
    pub state: RwSignal<AppState>,
    /// Reactive player state signal.
    pub player: RwSignal<PlayerState>,
    /// Queue of app effects emitted by the reducer, drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Queue of player effects, drained by the player modal against the
    /// media element it owns.
    pub player_effects: RwSignal<Vec<PlayerEffect>>,
    /// App reducer dispatch callback.
    pub dispatch: Callback<AppAction>,
    /// Player reducer dispatch callback.
    pub dispatch_player: Callback<PlayerAction>,
}

impl SiteRuntimeContext {
    /// Dispatches an app action through the runtime context callback.
    pub fn dispatch_action(&self, action: AppAction) {
        self.dispatch.call(action);
    }

    /// Dispatches a player action through the runtime context callback.
    pub fn dispatch_player_action(&self, action: PlayerAction) {
        self.dispatch_player.call(action);
    }

    /// Returns the session's catalog snapshot.
    pub fn catalog(&self) -> Rc<Catalog> {
        self.catalog.get_value()
    }
}

#[component]
/// Provides [`SiteRuntimeContext`] to descendant components and boots
/// persisted state.
pub fn SiteProvider(
    /// Injected host service bundle assembled by the entry layer.
    host_services: SiteHostContext,
    /// Content snapshot supplied by the external data collaborator.
    catalog: Catalog,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_services);
    let catalog = store_value(Rc::new(catalog));
    let state = create_rw_signal(AppState::default());
    let player = create_rw_signal(PlayerState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let player_effects = create_rw_signal(Vec::<PlayerEffect>::new());

    let dispatch = Callback::new(move |action: AppAction| {
        let mut app = state.get_untracked();
        let previous = app.clone();
        let new_effects = reduce_app(&mut app, action);
        if app != previous {
            state.set(app);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let dispatch_player = Callback::new(move |action: PlayerAction| {
        let mut current = player.get_untracked();
        let new_effects = reduce_player(&mut current, action);
        player.set(current);
        if !new_effects.is_empty() {
            let mut queue = player_effects.get_untracked();
            queue.extend(new_effects);
            player_effects.set(queue);
        }
    });

    let runtime = SiteRuntimeContext {
        host,
        catalog,
        state,
        player,
        effects,
        player_effects,
        dispatch,
        dispatch_player,
    };

    provide_context(runtime);

    runtime.host.get_value().install_boot_hydration(dispatch);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`SiteRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`SiteProvider`].
pub fn use_site_runtime() -> SiteRuntimeContext {
    use_context::<SiteRuntimeContext>().expect("SiteRuntimeContext not provided")
}
