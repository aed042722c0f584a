//! Pricing Page

use leptos::prelude::*;

use dashboard_core::{BillingPeriod, ComparisonTable, PageMeta, PricingCatalog};

use crate::api;
use crate::components::{Accordion, Badge, Card, FeatureCellView, PageHead, Switch};

/// Route entry: starts from the built-in catalog and swaps in the
/// server's copy once it arrives
#[component]
pub fn PricingPage() -> impl IntoView {
    let catalog = RwSignal::new(PricingCatalog::default());

    leptos::task::spawn_local(async move {
        match api::fetch_pricing().await {
            Ok(remote) => {
                let changed = catalog.with_untracked(|current| replacement(current, remote));
                if let Some(changed) = changed {
                    catalog.set(changed);
                }
            }
            Err(e) => leptos::logging::warn!("Using built-in pricing: {e}"),
        }
    });

    view! {
        <PageHead meta=PageMeta::pricing_table() />
        <PricingView catalog=catalog />
    }
}

/// The fetched catalog, unless it matches the one already shown
fn replacement(current: &PricingCatalog, remote: PricingCatalog) -> Option<PricingCatalog> {
    (*current != remote).then_some(remote)
}

/// Table model for the current catalog and billing period
fn comparison_table(
    catalog: Signal<PricingCatalog>,
    is_yearly: RwSignal<bool>,
) -> Memo<ComparisonTable> {
    Memo::new(move |_| {
        let period = BillingPeriod::from_yearly(is_yearly.get());
        catalog.with(|catalog| ComparisonTable::build(catalog, period))
    })
}

/// Comparison table, benefits and FAQ for one catalog
///
/// The period switch and open FAQ items live here and survive catalog
/// updates; only a remount resets them.
#[component]
pub fn PricingView(#[prop(into)] catalog: Signal<PricingCatalog>) -> impl IntoView {
    let is_yearly = RwSignal::new(false);
    let table = comparison_table(catalog, is_yearly);
    let benefits = Memo::new(move |_| catalog.with(|c| c.benefits.clone()));
    let faqs = Memo::new(move |_| catalog.with(|c| c.faqs.clone()));

    view! {
        <div class="pricing mx-auto max-w-screen-lg lg:py-16">
            <div class="mb-6 flex flex-col items-start justify-between space-y-2 lg:flex-row lg:items-center">
                <h1 class="text-2xl font-bold tracking-tight lg:text-3xl">"Choose Your Plan"</h1>
                <div class="flex items-center space-x-4">
                    <span class="text-sm" class:font-bold=move || !is_yearly.get()>"Monthly"</span>
                    <Switch checked=is_yearly aria_label="Toggle yearly pricing" />
                    <span class="text-sm" class:font-bold=move || is_yearly.get()>"Yearly"</span>
                </div>
            </div>

            <Card>
                <div class="overflow-x-auto pb-4">
                    <table class="pricing-table w-full">
                        <thead>
                            <tr>
                                <th class="w-[200px]">"Features"</th>
                                {move || table.get().headers.into_iter().map(|header| view! {
                                    <th class="text-center">
                                        {header.name}
                                        {header.savings_badge.map(|badge| view! {
                                            <Badge variant="success">{badge}</Badge>
                                        })}
                                    </th>
                                }).collect::<Vec<_>>()}
                            </tr>
                        </thead>
                        <tbody>
                            <tr>
                                <td class="font-medium">"Price"</td>
                                {move || table.get().prices.into_iter().map(|price| view! {
                                    <td class="text-center">
                                        <div class="text-xl font-bold">
                                            {price.amount}
                                            <span class="text-sm font-normal">"/"{price.unit}</span>
                                        </div>
                                    </td>
                                }).collect::<Vec<_>>()}
                            </tr>
                            {move || table.get().rows.into_iter().map(|row| view! {
                                <tr>
                                    <td class="font-medium">{row.label}</td>
                                    {row.cells.into_iter().map(|cell| view! {
                                        <td class="text-center"><FeatureCellView cell=cell /></td>
                                    }).collect::<Vec<_>>()}
                                </tr>
                            }).collect::<Vec<_>>()}
                            <tr>
                                <td></td>
                                {move || table.get().actions.into_iter().map(|action| view! {
                                    <td class="text-center">
                                        <button class="btn btn-primary" data-tier=action.tier>
                                            {action.label}
                                        </button>
                                    </td>
                                }).collect::<Vec<_>>()}
                            </tr>
                        </tbody>
                    </table>
                </div>
            </Card>

            <div class="mt-6 grid grid-cols-2 gap-4 lg:mt-12">
                <div>
                    <h2 class="mb-4 text-xl font-semibold">"Why Choose Our Platform?"</h2>
                    <div class="space-y-4">
                        {move || benefits.get().into_iter().map(|benefit| view! {
                            <Card>
                                <div class="pt-6 px-6 pb-6">
                                    <h3 class="mb-2 text-xl font-medium">{benefit.title}</h3>
                                    <p class="text-muted-foreground">{benefit.description}</p>
                                </div>
                            </Card>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                <div>
                    <h2 class="mb-4 text-xl font-semibold">"Frequently Asked Questions"</h2>
                    <Card>
                        <div class="px-6">
                            {move || view! { <Accordion items=faqs.get() /> }}
                        </div>
                    </Card>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_catalog_is_not_replaced() {
        let current = PricingCatalog::default();
        assert!(replacement(&current, PricingCatalog::default()).is_none());

        let mut remote = PricingCatalog::default();
        remote.tiers[0].name = "Starter".into();
        assert_eq!(replacement(&current, remote.clone()), Some(remote));
    }

    #[test]
    fn test_catalog_update_keeps_selected_period() {
        let catalog = RwSignal::new(PricingCatalog::default());
        let is_yearly = RwSignal::new(false);
        let table = comparison_table(catalog.into(), is_yearly);
        assert_eq!(table.get().period, BillingPeriod::Monthly);

        is_yearly.set(true);
        assert!(table.get().headers[0].savings_badge.is_some());

        let mut remote = PricingCatalog::default();
        remote.tiers[0].name = "Starter".into();
        catalog.set(remote);

        let updated = table.get();
        assert!(is_yearly.get());
        assert_eq!(updated.period, BillingPeriod::Yearly);
        assert_eq!(updated.headers[0].name, "Starter");
        assert_eq!(updated.headers[0].savings_badge.as_deref(), Some("Save 17%"));
        assert_eq!(updated.prices[0].unit, "year");
    }
}
