//! Application state types for the site runtime.

use media_catalog::{CreatorId, VideoId};

/// Destination for visitors who decline or fail the age check.
pub const SAFE_EXIT_URL: &str = "https://www.google.com";

/// Delay before the browsing context is replaced after a failed age check.
pub const UNDERAGE_REDIRECT_DELAY_MS: u32 = 1500;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_DISMISS_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Age-gate progression. Both non-`Unverified` states are terminal for the
/// page load: `Denied` only leads to the redirect.
pub enum GateStatus {
    /// The gate is shown and all content is hidden.
    Unverified,
    /// Both verification flags checked out; content is visible.
    Verified,
    /// The visitor reported an underage value; the blocking message is shown
    /// until the redirect fires.
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One full-panel section of the UI, mutually exclusive with its siblings.
pub enum ViewId {
    /// Landing page with trending/new rows and category strip.
    Home,
    /// Filterable grid of all videos; also hosts search results.
    Explore,
    /// All category tiles.
    Categories,
    /// Photo grid.
    Photos,
    /// Creator directory.
    Creators,
    /// Favorited videos.
    Favorites,
    /// A single creator's profile; reached from cards, not from navigation.
    CreatorProfile,
}

impl ViewId {
    /// Resolves a navigation page identifier to a view.
    ///
    /// Unknown identifiers resolve to `None`, which makes switching to a view
    /// that does not exist a structural no-op.
    pub fn from_page_id(page_id: &str) -> Option<Self> {
        match page_id {
            "home" => Some(Self::Home),
            "explore" => Some(Self::Explore),
            "categories" => Some(Self::Categories),
            "photos" => Some(Self::Photos),
            "creators" => Some(Self::Creators),
            "favorites" => Some(Self::Favorites),
            "creator" => Some(Self::CreatorProfile),
            _ => None,
        }
    }

    /// Stable page identifier used for DOM ids and nav matching.
    pub fn page_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Explore => "explore",
            Self::Categories => "categories",
            Self::Photos => "photos",
            Self::Creators => "creators",
            Self::Favorites => "favorites",
            Self::CreatorProfile => "creator",
        }
    }
}

/// Views reachable from the top and bottom navigation bars, with labels.
pub const NAV_ITEMS: [(ViewId, &str); 6] = [
    (ViewId::Home, "Home"),
    (ViewId::Explore, "Explore"),
    (ViewId::Categories, "Categories"),
    (ViewId::Photos, "Photos"),
    (ViewId::Creators, "Creators"),
    (ViewId::Favorites, "Favorites"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Filter selection on the explore view.
pub enum ExploreFilter {
    /// Everything in the catalog.
    All,
    /// Trending videos only.
    Trending,
    /// New releases only.
    New,
}

impl ExploreFilter {
    /// All filter buttons in display order.
    pub const ALL_FILTERS: [ExploreFilter; 3] = [Self::All, Self::Trending, Self::New];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Trending => "Trending",
            Self::New => "New",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual style of a toast notification.
pub enum ToastKind {
    /// Confirmation styling.
    Success,
    /// Error/removal styling.
    Error,
}

impl ToastKind {
    /// CSS class fragment for the toast container.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One queued toast notification.
pub struct Toast {
    /// Runtime-unique id used by the dismissal timer.
    pub id: u64,
    /// Message text.
    pub message: String,
    /// Visual style.
    pub kind: ToastKind,
}

#[derive(Debug, Clone, PartialEq)]
/// Whole-application state owned by the provider and mutated only through
/// [`crate::reducer::reduce_app`].
pub struct AppState {
    /// Age-gate progression.
    pub gate: GateStatus,
    /// The single active view.
    pub current_view: ViewId,
    /// Explore filter selection.
    pub explore_filter: ExploreFilter,
    /// Live search query; empty means no search.
    pub search_query: String,
    /// Ordered favorite video ids, persisted on every mutation.
    pub favorites: Vec<VideoId>,
    /// Video currently open in the player modal.
    pub open_video: Option<VideoId>,
    /// Creator whose profile view is active.
    pub profile_creator: Option<CreatorId>,
    /// Queued toast notifications, oldest first.
    pub toasts: Vec<Toast>,
    /// Next toast id.
    pub next_toast_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            gate: GateStatus::Unverified,
            current_view: ViewId::Home,
            explore_filter: ExploreFilter::All,
            search_query: String::new(),
            favorites: Vec::new(),
            open_video: None,
            profile_creator: None,
            toasts: Vec::new(),
            next_toast_id: 1,
        }
    }
}

impl AppState {
    /// Whether the main content regions are visible.
    pub fn content_visible(&self) -> bool {
        self.gate == GateStatus::Verified
    }

    /// Whether a video is favorited.
    pub fn is_favorite(&self, id: VideoId) -> bool {
        self.favorites.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_round_trip() {
        for (view, _) in NAV_ITEMS {
            assert_eq!(ViewId::from_page_id(view.page_id()), Some(view));
        }
        assert_eq!(
            ViewId::from_page_id(ViewId::CreatorProfile.page_id()),
            Some(ViewId::CreatorProfile)
        );
    }

    #[test]
    fn unknown_page_id_resolves_to_none() {
        assert_eq!(ViewId::from_page_id("dashboard"), None);
        assert_eq!(ViewId::from_page_id(""), None);
        assert_eq!(ViewId::from_page_id("Home"), None);
    }
}
