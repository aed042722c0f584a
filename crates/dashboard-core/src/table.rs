//! Comparison Table Model
//!
//! Everything the pricing table displays, derived from a catalog and the
//! selected billing period. The view renders this model verbatim, so the
//! toggle behaviour is testable without a browser.

use serde::Serialize;

use crate::catalog::PricingCatalog;
use crate::pricing::{BillingPeriod, FeatureValue, PricingTier};

/// Column header for one tier
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TierHeader {
    pub name: String,
    /// "Save N%", only present while yearly pricing is shown
    pub savings_badge: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriceCell {
    pub amount: String,
    pub unit: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum FeatureCell {
    Included,
    Excluded,
    Text(String),
    /// The tier has no value for this row's key
    Absent,
}

impl From<&FeatureValue> for FeatureCell {
    fn from(value: &FeatureValue) -> Self {
        match value {
            FeatureValue::Boolean(true) => Self::Included,
            FeatureValue::Boolean(false) => Self::Excluded,
            FeatureValue::Text(text) => Self::Text(text.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub key: String,
    pub label: String,
    pub cells: Vec<FeatureCell>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TierAction {
    pub tier: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub period: BillingPeriod,
    pub headers: Vec<TierHeader>,
    pub prices: Vec<PriceCell>,
    pub rows: Vec<FeatureRow>,
    pub actions: Vec<TierAction>,
}

impl ComparisonTable {
    pub fn build(catalog: &PricingCatalog, period: BillingPeriod) -> Self {
        let tiers = &catalog.tiers;

        let headers = tiers
            .iter()
            .map(|tier| TierHeader {
                name: tier.name.clone(),
                savings_badge: period
                    .is_yearly()
                    .then(|| format!("Save {}%", tier.yearly_savings())),
            })
            .collect();

        let prices = tiers
            .iter()
            .map(|tier| PriceCell {
                amount: tier.display_price(period),
                unit: period.unit_label(),
            })
            .collect();

        let rows = catalog
            .feature_keys()
            .into_iter()
            .map(|key| FeatureRow {
                key: key.to_string(),
                label: capitalize(key),
                cells: tiers.iter().map(|tier| feature_cell(tier, key)).collect(),
            })
            .collect();

        let actions = tiers
            .iter()
            .map(|tier| TierAction {
                tier: tier.name.clone(),
                label: format!("Choose {}", tier.name),
            })
            .collect();

        Self {
            period,
            headers,
            prices,
            rows,
            actions,
        }
    }
}

fn feature_cell(tier: &PricingTier, key: &str) -> FeatureCell {
    tier.feature(key).map_or(FeatureCell::Absent, FeatureCell::from)
}

/// Upper-case the first character ("analytics" -> "Analytics")
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::FaqEntry;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_table() {
        let table = ComparisonTable::build(&PricingCatalog::default(), BillingPeriod::Monthly);

        assert_eq!(
            table.headers.iter().map(|h| h.name.as_str()).collect::<Vec<_>>(),
            vec!["Basic", "Pro", "Enterprise"]
        );
        assert!(table.headers.iter().all(|h| h.savings_badge.is_none()));
        assert_eq!(
            table.prices,
            vec![
                PriceCell { amount: "$9.99".into(), unit: "month" },
                PriceCell { amount: "$19.99".into(), unit: "month" },
                PriceCell { amount: "$49.99".into(), unit: "month" },
            ]
        );
        assert_eq!(table.actions[1].label, "Choose Pro");
    }

    #[test]
    fn test_toggle_to_yearly_and_back() {
        let catalog = PricingCatalog::default();
        let monthly = ComparisonTable::build(&catalog, BillingPeriod::Monthly);
        let yearly = ComparisonTable::build(&catalog, BillingPeriod::Monthly.toggled());

        assert_eq!(
            yearly.prices.iter().map(|p| p.amount.as_str()).collect::<Vec<_>>(),
            vec!["$99.99", "$199.99", "$499.99"]
        );
        assert!(yearly.prices.iter().all(|p| p.unit == "year"));
        assert!(yearly
            .headers
            .iter()
            .all(|h| h.savings_badge.as_deref() == Some("Save 17%")));
        assert_eq!(yearly.rows, monthly.rows);

        let back = ComparisonTable::build(&catalog, yearly.period.toggled());
        assert_eq!(back, monthly);
    }

    #[test]
    fn test_feature_rows() {
        let table = ComparisonTable::build(&PricingCatalog::default(), BillingPeriod::Monthly);
        let keys: Vec<_> = table.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["users", "storage", "support", "integrations", "analytics", "api"]);

        let analytics = &table.rows[4];
        assert_eq!(analytics.label, "Analytics");
        assert_eq!(
            analytics.cells,
            vec![FeatureCell::Excluded, FeatureCell::Included, FeatureCell::Included]
        );
        assert_eq!(table.rows[0].cells[0], FeatureCell::Text("1 user".into()));
        assert_eq!(table.rows[5].cells[2], FeatureCell::Included);
    }

    #[test]
    fn test_missing_key_renders_absent() {
        let catalog = PricingCatalog {
            tiers: vec![
                PricingTier::new("A", dec!(1), dec!(10))
                    .with_feature("seats", "1")
                    .with_feature("sso", true),
                PricingTier::new("B", dec!(2), dec!(20)).with_feature("seats", "2"),
                PricingTier::new("C", dec!(3), dec!(30))
                    .with_feature("seats", "3")
                    .with_feature("sso", false)
                    .with_feature("audit", true),
            ],
            benefits: vec![],
            faqs: vec![FaqEntry::new("q", "a")],
        };
        let table = ComparisonTable::build(&catalog, BillingPeriod::Monthly);

        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[1].cells,
            vec![FeatureCell::Included, FeatureCell::Absent, FeatureCell::Excluded]
        );
    }

    #[test]
    fn test_zero_price_badge() {
        let catalog = PricingCatalog {
            tiers: vec![PricingTier::new("Free", dec!(0), dec!(0))],
            benefits: vec![],
            faqs: vec![],
        };
        let table = ComparisonTable::build(&catalog, BillingPeriod::Yearly);
        assert_eq!(table.headers[0].savings_badge.as_deref(), Some("Save 0%"));
        assert_eq!(table.prices[0].amount, "$0.00");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PricingCatalog { tiers: vec![], benefits: vec![], faqs: vec![] };
        let table = ComparisonTable::build(&catalog, BillingPeriod::Yearly);
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("api"), "Api");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Users"), "Users");
    }
}
