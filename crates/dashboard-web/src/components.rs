//! UI Components

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use dashboard_core::{
    Disclosure, FaqEntry, FeatureCell, PageMeta, ProductDraft, ProductStatus, SiteMeta,
};

use crate::api;

/// Document title, description and canonical link for a page
#[component]
pub fn PageHead(meta: PageMeta) -> impl IntoView {
    let site = use_context::<SiteMeta>().unwrap_or_default();

    view! {
        <Title text=meta.document_title(&site) />
        <Meta name="description" content=meta.description.clone() />
        <Link rel="canonical" href=meta.canonical_url(&site) />
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card rounded-lg border bg-card shadow-sm {class}")>
            {children()}
        </div>
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: &'static str, children: Children) -> impl IntoView {
    let variant = if variant.is_empty() { "default" } else { variant };

    view! {
        <span class=format!("badge badge-{variant} absolute ms-2")>{children()}</span>
    }
}

/// Two-state toggle bound directly to a signal
#[component]
pub fn Switch(checked: RwSignal<bool>, aria_label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            class="switch"
            class:switch-on=move || checked.get()
            aria-label=aria_label
            aria-checked=move || checked.get().to_string()
            on:click=move |_| checked.update(|v| *v = !*v)
        >
            <span class="switch-thumb"></span>
        </button>
    }
}

/// Glyph, colour class and accessible label for boolean cells
fn indicator(cell: &FeatureCell) -> Option<(&'static str, &'static str, &'static str)> {
    match cell {
        FeatureCell::Included => Some(("✓", "text-green-500", "Included")),
        FeatureCell::Excluded => Some(("✗", "text-red-500", "Not included")),
        FeatureCell::Text(_) | FeatureCell::Absent => None,
    }
}

#[component]
pub fn FeatureCellView(cell: FeatureCell) -> impl IntoView {
    if let Some((glyph, color, label)) = indicator(&cell) {
        return view! {
            <span class=format!("mx-auto {color}") aria-label=label>{glyph}</span>
        }
        .into_any();
    }

    match cell {
        FeatureCell::Text(text) => view! { <span>{text}</span> }.into_any(),
        _ => view! { <span class="absent"></span> }.into_any(),
    }
}

/// Entries paired with their disclosure slot, in source order
fn disclosure_items(items: Vec<FaqEntry>) -> (Disclosure, Vec<(usize, FaqEntry)>) {
    let state = Disclosure::new(items.len());
    (state, items.into_iter().enumerate().collect())
}

/// Disclosure list; every item opens and closes on its own
#[component]
pub fn Accordion(items: Vec<FaqEntry>) -> impl IntoView {
    let (disclosure, entries) = disclosure_items(items);
    let state = RwSignal::new(disclosure);

    view! {
        <div class="accordion w-full">
            {entries
                .into_iter()
                .map(|(index, item)| {
                    let is_open = move || state.with(|s| s.is_open(index));
                    view! {
                        <div
                            class="accordion-item border-b"
                            data-state=move || if is_open() { "open" } else { "closed" }
                        >
                            <button
                                type="button"
                                class="accordion-trigger w-full py-4 text-left font-medium"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| state.update(|s| s.toggle(index))
                            >
                                {item.question}
                            </button>
                            <div class="accordion-content pb-4" class:hidden=move || !is_open()>
                                {item.answer}
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Product creation form posting to `/api/products`
#[component]
pub fn AddProductForm() -> impl IntoView {
    let empty = || ProductDraft {
        status: ProductStatus::Draft.as_str().into(),
        ..ProductDraft::default()
    };
    let draft = RwSignal::new(empty());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (created, set_created) = signal(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let current = draft.get();
        if let Err(e) = current.validate() {
            set_error.set(Some(e.user_message()));
            return;
        }

        set_error.set(None);
        set_created.set(None);
        set_submitting.set(true);

        leptos::task::spawn_local(async move {
            match api::create_product(&current).await {
                Ok(product) => {
                    set_created.set(Some(format!(
                        "Product {} ({}) created",
                        product.details.name, product.details.sku
                    )));
                    draft.set(empty());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Card>
            <form class="product-form grid gap-4 p-6" on:submit=submit>
                <h1 class="text-2xl font-bold tracking-tight">"Add Product"</h1>

                <div class="field">
                    <label for="product-name">"Name"</label>
                    <input
                        id="product-name"
                        type="text"
                        placeholder="Product name"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="product-sku">"SKU"</label>
                    <input
                        id="product-sku"
                        type="text"
                        placeholder="SKU-001"
                        prop:value=move || draft.with(|d| d.sku.clone())
                        on:input=move |ev| draft.update(|d| d.sku = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="product-description">"Description"</label>
                    <textarea
                        id="product-description"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div class="field">
                        <label for="product-category">"Category"</label>
                        <input
                            id="product-category"
                            type="text"
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="product-status">"Status"</label>
                        <select
                            id="product-status"
                            prop:value=move || draft.with(|d| d.status.clone())
                            on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                        >
                            {ProductStatus::ALL
                                .into_iter()
                                .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div class="field">
                        <label for="product-price">"Price"</label>
                        <input
                            id="product-price"
                            type="text"
                            inputmode="decimal"
                            placeholder="0.00"
                            prop:value=move || draft.with(|d| d.price.clone())
                            on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="product-stock">"Stock"</label>
                        <input
                            id="product-stock"
                            type="text"
                            inputmode="numeric"
                            placeholder="0"
                            prop:value=move || draft.with(|d| d.stock.clone())
                            on:input=move |ev| draft.update(|d| d.stock = event_target_value(&ev))
                        />
                    </div>
                </div>

                {move || error.get().map(|e| view! { <p class="form-error text-red-500">{e}</p> })}
                {move || created.get().map(|m| view! { <p class="form-success text-green-600">{m}</p> })}

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Add Product" }}
                </button>
            </form>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_cells_have_indicators() {
        assert_eq!(indicator(&FeatureCell::Included).map(|i| i.0), Some("✓"));
        assert_eq!(indicator(&FeatureCell::Excluded).map(|i| i.0), Some("✗"));
    }

    #[test]
    fn test_accordion_keeps_every_entry_in_order() {
        let faqs = dashboard_core::PricingCatalog::default().faqs;
        let (mut state, entries) = disclosure_items(faqs.clone());

        assert_eq!(entries.len(), faqs.len());
        assert_eq!(state.len(), faqs.len());
        for (position, (index, entry)) in entries.iter().enumerate() {
            assert_eq!(*index, position);
            assert_eq!(entry.question, faqs[position].question);
        }

        state.toggle(entries[0].0);
        state.toggle(entries[3].0);
        assert!(state.is_open(0) && state.is_open(3));
        assert_eq!(state.open_count(), 2);
    }

    #[test]
    fn test_empty_accordion() {
        let (state, entries) = disclosure_items(Vec::new());
        assert!(entries.is_empty());
        assert!(state.is_empty());
    }

    #[test]
    fn test_text_cells_render_verbatim() {
        assert!(indicator(&FeatureCell::Text("5 users".into())).is_none());
        assert!(indicator(&FeatureCell::Absent).is_none());
    }
}
