//! Pricing Catalog
//!
//! The tiers, benefit cards and FAQ shown on the pricing page. The
//! catalog is plain configuration: the built-in one comes from `Default`,
//! a replacement can be loaded from JSON.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::faq::FaqEntry;
use crate::pricing::PricingTier;

/// A "why choose us" card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

impl Benefit {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingCatalog {
    pub tiers: Vec<PricingTier>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

impl PricingCatalog {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read, parse and validate a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        catalog.validate()?;
        tracing::info!(
            "Loaded pricing catalog from {} ({} tiers)",
            path.display(),
            catalog.tiers.len()
        );
        Ok(catalog)
    }

    /// Feature keys that drive the table rows: the first tier's, in order
    pub fn feature_keys(&self) -> Vec<&str> {
        self.tiers
            .first()
            .map(|tier| tier.feature_keys().collect())
            .unwrap_or_default()
    }

    /// Check the invariants the comparison table relies on
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for tier in &self.tiers {
            if tier.name.trim().is_empty() {
                return Err(DashboardError::InvalidCatalog("tier name is empty".into()));
            }
            if !names.insert(tier.name.as_str()) {
                return Err(DashboardError::InvalidCatalog(format!(
                    "duplicate tier name {}",
                    tier.name
                )));
            }
            if tier.monthly_price < Decimal::ZERO || tier.yearly_price < Decimal::ZERO {
                return Err(DashboardError::InvalidCatalog(format!(
                    "tier {} has a negative price",
                    tier.name
                )));
            }
            let twelve_months = tier.monthly_price.checked_mul(dec!(12)).ok_or_else(|| {
                DashboardError::InvalidCatalog(format!(
                    "tier {} monthly price {} is out of range",
                    tier.name, tier.monthly_price
                ))
            })?;
            if tier.yearly_price > twelve_months {
                return Err(DashboardError::InvalidCatalog(format!(
                    "tier {} costs more yearly than twelve months",
                    tier.name
                )));
            }
        }

        let expected = self.feature_keys();
        let mut seen = HashSet::new();
        if let Some(key) = expected.iter().find(|key| !seen.insert(**key)) {
            return Err(DashboardError::InvalidCatalog(format!(
                "duplicate feature key {key}"
            )));
        }

        for tier in self.tiers.iter().skip(1) {
            let found: Vec<&str> = tier.feature_keys().collect();
            if found != expected {
                return Err(DashboardError::FeatureKeysMismatch {
                    tier: tier.name.clone(),
                    expected: expected.iter().map(ToString::to_string).collect(),
                    found: found.iter().map(ToString::to_string).collect(),
                });
            }
        }

        for faq in &self.faqs {
            if faq.question.trim().is_empty() || faq.answer.trim().is_empty() {
                return Err(DashboardError::InvalidCatalog("FAQ entry is empty".into()));
            }
        }

        Ok(())
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self {
            tiers: vec![
                PricingTier::new("Basic", dec!(9.99), dec!(99.99))
                    .with_feature("users", "1 user")
                    .with_feature("storage", "5GB storage")
                    .with_feature("support", "Basic support")
                    .with_feature("integrations", "Limited integrations")
                    .with_feature("analytics", false)
                    .with_feature("api", false),
                PricingTier::new("Pro", dec!(19.99), dec!(199.99))
                    .with_feature("users", "5 users")
                    .with_feature("storage", "50GB storage")
                    .with_feature("support", "Priority support")
                    .with_feature("integrations", "Advanced integrations")
                    .with_feature("analytics", true)
                    .with_feature("api", false),
                PricingTier::new("Enterprise", dec!(49.99), dec!(499.99))
                    .with_feature("users", "Unlimited users")
                    .with_feature("storage", "500GB storage")
                    .with_feature("support", "24/7 premium support")
                    .with_feature("integrations", "Custom integrations")
                    .with_feature("analytics", true)
                    .with_feature("api", true),
            ],
            benefits: vec![
                Benefit::new(
                    "Comprehensive Library",
                    "Access thousands of courses across various disciplines",
                ),
                Benefit::new(
                    "Expert Instructors",
                    "Learn from industry professionals and thought leaders",
                ),
                Benefit::new(
                    "Flexible Learning",
                    "Study at your own pace, anytime and anywhere",
                ),
            ],
            faqs: vec![
                FaqEntry::new(
                    "What payment methods do you accept?",
                    "We accept all major credit cards, including Visa, MasterCard, American Express, and Discover. We also support PayPal for your convenience.",
                ),
                FaqEntry::new(
                    "Can I cancel my subscription at any time?",
                    "Yes, you can cancel your subscription at any time. If you cancel, you'll continue to have access to the platform until the end of your current billing period.",
                ),
                FaqEntry::new(
                    "Is there a limit to how many courses I can take?",
                    "No, there's no limit. With our Premium Plan, you have unlimited access to all courses on our platform. You can take as many courses as you like, at your own pace.",
                ),
                FaqEntry::new(
                    "Do you offer a free trial?",
                    "We offer a 7-day free trial for new users. This allows you to explore our platform and content before committing to a subscription. No credit card is required for the trial.",
                ),
                FaqEntry::new(
                    "Are the courses downloadable for offline viewing?",
                    "Yes, our mobile app allows you to download courses for offline viewing. This feature is available for both iOS and Android devices.",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::FeatureValue;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = PricingCatalog::default();
        assert_eq!(catalog.tiers.len(), 3);
        assert_eq!(catalog.benefits.len(), 3);
        assert_eq!(catalog.faqs.len(), 5);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_feature_keys_follow_first_tier() {
        let catalog = PricingCatalog::default();
        assert_eq!(
            catalog.feature_keys(),
            vec!["users", "storage", "support", "integrations", "analytics", "api"]
        );
        for tier in &catalog.tiers {
            assert_eq!(tier.feature_keys().collect::<Vec<_>>(), catalog.feature_keys());
        }
        assert!(PricingCatalog { tiers: vec![], benefits: vec![], faqs: vec![] }
            .feature_keys()
            .is_empty());
    }

    #[test]
    fn test_duplicate_tier_rejected() {
        let mut catalog = PricingCatalog::default();
        catalog.tiers[1].name = "Basic".into();
        assert!(matches!(catalog.validate(), Err(DashboardError::InvalidCatalog(_))));
    }

    #[test]
    fn test_negative_and_overpriced_rejected() {
        let mut catalog = PricingCatalog::default();
        catalog.tiers[0].monthly_price = dec!(-1);
        assert!(catalog.validate().is_err());

        let mut catalog = PricingCatalog::default();
        catalog.tiers[2].yearly_price = dec!(700);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_out_of_range_price_rejected() {
        let json = r#"{
            "tiers": [
                {
                    "name": "Galactic",
                    "monthly_price": "10000000000000000000000000000",
                    "yearly_price": "1",
                    "features": []
                }
            ]
        }"#;
        let catalog = PricingCatalog::from_json(json).unwrap();
        match catalog.validate() {
            Err(DashboardError::InvalidCatalog(reason)) => {
                assert!(reason.contains("Galactic"), "{reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(catalog.tiers[0].yearly_savings(), "0");
    }

    #[test]
    fn test_duplicate_feature_key_rejected() {
        let tier = |name: &str| {
            PricingTier::new(name, dec!(5), dec!(50))
                .with_feature("users", "1 user")
                .with_feature("users", "2 users")
        };
        let catalog = PricingCatalog {
            tiers: vec![tier("Solo"), tier("Team")],
            benefits: vec![],
            faqs: vec![],
        };
        match catalog.validate() {
            Err(DashboardError::InvalidCatalog(reason)) => assert!(reason.contains("users")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_feature_key_mismatch_rejected() {
        let mut catalog = PricingCatalog::default();
        catalog.tiers[2].features.pop();
        match catalog.validate() {
            Err(DashboardError::FeatureKeysMismatch { tier, expected, found }) => {
                assert_eq!(tier, "Enterprise");
                assert_eq!(expected.len(), 6);
                assert_eq!(found.len(), 5);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_json_catalog() {
        let json = r#"{
            "tiers": [
                {
                    "name": "Solo",
                    "monthly_price": "5.00",
                    "yearly_price": "50.00",
                    "features": [
                        { "key": "seats", "value": "1 seat" },
                        { "key": "sso", "value": false }
                    ]
                }
            ],
            "faqs": [{ "question": "Why?", "answer": "Because." }]
        }"#;
        let catalog = PricingCatalog::from_json(json).unwrap();
        assert_eq!(catalog.tiers[0].monthly_price, dec!(5));
        assert_eq!(catalog.tiers[0].feature("sso"), Some(&FeatureValue::Boolean(false)));
        assert!(catalog.benefits.is_empty());
        assert!(catalog.validate().is_ok());

        let encoded = serde_json::to_string(&PricingCatalog::default()).unwrap();
        assert_eq!(PricingCatalog::from_json(&encoded).unwrap(), PricingCatalog::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PricingCatalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
