use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use media_catalog::Catalog;
use site_runtime::{SiteHostContext, SiteProvider, SiteShell};

/// DOM id of the embedded JSON document carrying the content arrays.
const CATALOG_DATA_DOM_ID: &str = "catalog-data";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Reelhouse" />
        <Meta
            name="description"
            content="Browse trending videos, photos, and creators."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=SiteEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn SiteEntry() -> impl IntoView {
    let catalog = load_catalog();

    view! {
        <SiteProvider host_services=SiteHostContext::default() catalog=catalog>
            <SiteShell />
        </SiteProvider>
    }
}

/// Reads the catalog document embedded by the host page.
///
/// The content arrays are an external collaborator; a missing or malformed
/// document degrades to an empty catalog with a diagnostic.
fn load_catalog() -> Catalog {
    let Some(raw) = platform_host_web::dom::document()
        .and_then(|document| document.get_element_by_id(CATALOG_DATA_DOM_ID))
        .and_then(|element| element.text_content())
    else {
        logging::warn!("catalog document `#{CATALOG_DATA_DOM_ID}` not found; starting empty");
        return Catalog::default();
    };
    match Catalog::from_json(&raw) {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("catalog document parse failed: {err}");
            Catalog::default()
        }
    }
}
