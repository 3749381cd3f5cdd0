//! View panels: home, explore, categories, photos, creators, favorites, and
//! the creator profile.
//!
//! Every panel stays mounted and toggles visibility through its `active`
//! class; panel content derives reactively from state, so entering a view
//! always shows current data.

use leptos::*;
use media_catalog::{Creator, Video};

use crate::{
    model::{ExploreFilter, ViewId},
    reducer::AppAction,
    runtime_context::use_site_runtime,
};

use super::{
    cards::{CategoryCard, CreatorCard, PhotoCard, VideoCard},
    row_scroller::RowScroller,
};

#[component]
pub(super) fn MainViews() -> impl IntoView {
    view! {
        <HomeView />
        <ExploreView />
        <CategoriesView />
        <PhotosView />
        <CreatorsView />
        <FavoritesView />
        <CreatorProfileView />
    }
}

#[component]
fn ViewPanel(view: ViewId, children: Children) -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;

    view! {
        <section
            id=format!("{}-view", view.page_id())
            class="view"
            class:active=move || state.get().current_view == view
        >
            {children()}
        </section>
    }
}

#[component]
fn ContentRow(
    title: &'static str,
    #[prop(optional)] see_all_filter: Option<ExploreFilter>,
    children: Children,
) -> impl IntoView {
    let runtime = use_site_runtime();

    view! {
        <div class="content-row">
            <div class="row-header">
                <h2>{title}</h2>
                {see_all_filter
                    .map(|filter| {
                        view! {
                            <a
                                href="#"
                                class="see-all"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    runtime
                                        .dispatch_action(AppAction::SwitchView {
                                            view: ViewId::Explore,
                                        });
                                    runtime.dispatch_action(AppAction::SetExploreFilter { filter });
                                }
                            >
                                "See All"
                            </a>
                        }
                    })}
            </div>
            <RowScroller>{children()}</RowScroller>
        </div>
    }
}

#[component]
fn HomeView() -> impl IntoView {
    let runtime = use_site_runtime();
    let catalog = runtime.catalog();

    let trending: Vec<Video> = catalog.trending().into_iter().cloned().collect();
    let new_releases: Vec<Video> = catalog.new_releases().into_iter().cloned().collect();
    let categories = catalog.categories.clone();

    view! {
        <ViewPanel view=ViewId::Home>
            <ContentRow title="Trending Now" see_all_filter=ExploreFilter::Trending>
                {trending
                    .into_iter()
                    .map(|video| view! { <VideoCard video=video /> })
                    .collect_view()}
            </ContentRow>
            <ContentRow title="New Releases" see_all_filter=ExploreFilter::New>
                {new_releases
                    .into_iter()
                    .map(|video| view! { <VideoCard video=video /> })
                    .collect_view()}
            </ContentRow>
            <ContentRow title="Categories">
                {categories
                    .into_iter()
                    .map(|category| view! { <CategoryCard category=category /> })
                    .collect_view()}
            </ContentRow>
        </ViewPanel>
    }
}

#[component]
fn ExploreView() -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;

    let results = create_memo(move |_| {
        let app = state.get();
        let catalog = runtime.catalog();
        let videos: Vec<Video> = if app.search_query.is_empty() {
            match app.explore_filter {
                ExploreFilter::All => catalog.videos.clone(),
                ExploreFilter::Trending => catalog.trending().into_iter().cloned().collect(),
                ExploreFilter::New => catalog.new_releases().into_iter().cloned().collect(),
            }
        } else {
            catalog
                .search(&app.search_query)
                .into_iter()
                .cloned()
                .collect()
        };
        videos
    });

    view! {
        <ViewPanel view=ViewId::Explore>
            <div class="filter-bar">
                {ExploreFilter::ALL_FILTERS
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || state.get().explore_filter == filter
                                on:click=move |_| {
                                    runtime.dispatch_action(AppAction::SetExploreFilter { filter })
                                }
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div id="explore-grid" class="video-grid">
                <For each=move || results.get() key=|video| video.id.0 let:video>
                    <VideoCard video=video />
                </For>
            </div>
        </ViewPanel>
    }
}

#[component]
fn CategoriesView() -> impl IntoView {
    let runtime = use_site_runtime();
    let categories = runtime.catalog().categories.clone();

    view! {
        <ViewPanel view=ViewId::Categories>
            <div id="all-categories-grid" class="category-grid">
                {categories
                    .into_iter()
                    .map(|category| view! { <CategoryCard category=category /> })
                    .collect_view()}
            </div>
        </ViewPanel>
    }
}

#[component]
fn PhotosView() -> impl IntoView {
    let runtime = use_site_runtime();
    let photos = runtime.catalog().photos.clone();

    view! {
        <ViewPanel view=ViewId::Photos>
            <div id="photos-grid" class="photo-grid">
                {photos
                    .into_iter()
                    .map(|photo| view! { <PhotoCard photo=photo /> })
                    .collect_view()}
            </div>
        </ViewPanel>
    }
}

#[component]
fn CreatorsView() -> impl IntoView {
    let runtime = use_site_runtime();
    let creators = runtime.catalog().creators.clone();

    view! {
        <ViewPanel view=ViewId::Creators>
            <div id="creators-grid" class="creator-grid">
                {creators
                    .into_iter()
                    .map(|creator| view! { <CreatorCard creator=creator /> })
                    .collect_view()}
            </div>
        </ViewPanel>
    }
}

#[component]
fn FavoritesView() -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;

    let favorites = create_memo(move |_| {
        let app = state.get();
        runtime
            .catalog()
            .favorites(&app.favorites)
            .into_iter()
            .cloned()
            .collect::<Vec<Video>>()
    });

    view! {
        <ViewPanel view=ViewId::Favorites>
            <div id="favorites-grid" class="video-grid">
                <Show
                    when=move || !favorites.get().is_empty()
                    fallback=|| view! { <p class="empty-msg">"No favorites yet."</p> }
                >
                    <For each=move || favorites.get() key=|video| video.id.0 let:video>
                        <VideoCard video=video />
                    </For>
                </Show>
            </div>
        </ViewPanel>
    }
}

#[component]
fn CreatorProfileView() -> impl IntoView {
    let runtime = use_site_runtime();
    let state = runtime.state;

    let profile = create_memo(move |_| {
        state
            .get()
            .profile_creator
            .and_then(|id| runtime.catalog().creator(id).cloned())
    });

    view! {
        <ViewPanel view=ViewId::CreatorProfile>
            {move || profile.get().map(|creator| view! { <CreatorProfile creator=creator /> })}
        </ViewPanel>
    }
}

#[component]
fn CreatorProfile(creator: Creator) -> impl IntoView {
    let runtime = use_site_runtime();
    let cover = creator.cover.clone().unwrap_or_else(|| creator.avatar.clone());
    let videos: Vec<Video> = runtime
        .catalog()
        .videos_by(&creator)
        .into_iter()
        .cloned()
        .collect();

    view! {
        <div class="creator-profile">
            <div
                class="creator-cover"
                style=format!("background-image:url('{cover}');")
            ></div>
            <div class="creator-header">
                <img
                    id="profile-avatar"
                    class="creator-avatar"
                    src=creator.avatar.clone()
                    alt=creator.name.clone()
                    referrerpolicy="no-referrer"
                />
                <h2 id="profile-name">{creator.name.clone()}</h2>
                <span id="profile-username">{format!("@{}", creator.username)}</span>
                <div class="creator-stats">
                    <span>
                        <strong>{creator.subscribers.clone()}</strong>
                        " Subscribers"
                    </span>
                    <span>
                        <strong>{creator.views.clone()}</strong>
                        " Views"
                    </span>
                </div>
            </div>
            <div id="creator-videos-grid" class="video-grid">
                <Show
                    when={
                        let has_videos = !videos.is_empty();
                        move || has_videos
                    }
                    fallback=|| {
                        view! { <p class="empty-msg">"No videos available for this creator."</p> }
                    }
                >
                    {videos
                        .clone()
                        .into_iter()
                        .map(|video| view! { <VideoCard video=video /> })
                        .collect_view()}
                </Show>
            </div>
        </div>
    }
}
