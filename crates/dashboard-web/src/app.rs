//! Main App Component

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{components::*, path};

use dashboard_core::SiteMeta;

use crate::api;
use crate::pages::{PricingPage, ProductCreatePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteMeta {
        base_url: api::origin(),
        ..SiteMeta::default()
    });

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=PricingPage />
                    <Route path=path!("/pages/pricing/table") view=PricingPage />
                    <Route path=path!("/pages/products/create") view=ProductCreatePage />
                </Routes>
            </main>
        </Router>
    }
}
