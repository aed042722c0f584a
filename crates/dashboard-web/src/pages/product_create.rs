//! Product Create Page

use leptos::prelude::*;

use dashboard_core::PageMeta;

use crate::components::{AddProductForm, PageHead};

#[component]
pub fn ProductCreatePage() -> impl IntoView {
    view! {
        <PageHead meta=PageMeta::product_create() />
        <div class="container max-w-screen-lg">
            <div class="space-y-4">
                <AddProductForm />
            </div>
        </div>
    }
}
