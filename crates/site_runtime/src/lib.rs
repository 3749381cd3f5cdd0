//! Application runtime for the media browsing site.
//!
//! State lives in an explicit [`model::AppState`] owned by the
//! [`SiteProvider`]; every mutation flows through [`reducer::reduce_app`] or
//! [`player::reduce_player`], which emit typed side-effect intents executed by
//! the host layer. Components translate DOM events into actions and nothing
//! else.

pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod momentum;
pub mod persistence;
pub mod player;
pub mod reducer;
mod runtime_context;

pub use components::SiteShell;
pub use host::SiteHostContext;
pub use runtime_context::{use_site_runtime, SiteProvider, SiteRuntimeContext};
