//! Card components: record → preview fragment, no internal state.

use leptos::*;
use media_catalog::{Category, Creator, Photo, Video};

use crate::{reducer::AppAction, runtime_context::use_site_runtime};

#[component]
pub(super) fn VideoCard(video: Video) -> impl IntoView {
    let runtime = use_site_runtime();
    let video_id = video.id;
    // Resolve once at render; the catalog never changes within a session.
    let creator_target = runtime.catalog().resolve_creator(&video).map(|c| c.id);

    view! {
        <div
            class="card"
            on:click=move |_| runtime.dispatch_action(AppAction::OpenVideo { video: video_id })
        >
            <div class="card-img-wrapper">
                <img
                    src=video.thumbnail.clone()
                    alt=video.title.clone()
                    class="card-img"
                    referrerpolicy="no-referrer"
                    loading="lazy"
                />
                <span class="card-duration">{video.duration.clone()}</span>
            </div>
            <div class="card-info">
                <h3 class="card-title">{video.title.clone()}</h3>
                <div class="card-meta">
                    <span
                        class="card-creator"
                        on:click=move |ev| {
                            // The nested control must not open the video modal.
                            ev.stop_propagation();
                            if let Some(creator) = creator_target {
                                runtime.dispatch_action(AppAction::OpenCreatorProfile { creator });
                            }
                        }
                    >
                        {video.creator.clone()}
                    </span>
                    <span class="card-views">{format!("{} views", video.views)}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub(super) fn CategoryCard(category: Category) -> impl IntoView {
    view! {
        <div class="category-card">
            <img
                src=category.image.clone()
                alt=category.name.clone()
                referrerpolicy="no-referrer"
                loading="lazy"
            />
            <div class="category-overlay">
                <span class="category-name">{category.name.clone()}</span>
            </div>
        </div>
    }
}

#[component]
pub(super) fn PhotoCard(photo: Photo) -> impl IntoView {
    view! {
        <div class="photo-card">
            <img
                src=photo.url.clone()
                alt=photo.title.clone()
                referrerpolicy="no-referrer"
                loading="lazy"
            />
            <div class="photo-overlay">
                <span class="photo-title">{photo.title.clone()}</span>
                <span class="photo-creator">{format!("by {}", photo.creator)}</span>
            </div>
        </div>
    }
}

#[component]
pub(super) fn CreatorCard(creator: Creator) -> impl IntoView {
    let runtime = use_site_runtime();
    let creator_id = creator.id;

    view! {
        <div
            class="creator-list-card"
            on:click=move |_| {
                runtime.dispatch_action(AppAction::OpenCreatorProfile { creator: creator_id })
            }
        >
            <div class="creator-card-info">
                <img
                    src=creator.avatar.clone()
                    alt=creator.name.clone()
                    class="creator-card-avatar"
                    referrerpolicy="no-referrer"
                    loading="lazy"
                />
                <h3 class="creator-card-name">{creator.name.clone()}</h3>
                <span class="creator-card-username">{format!("@{}", creator.username)}</span>
                <div class="creator-card-stats">
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
        </div>
    }
}
