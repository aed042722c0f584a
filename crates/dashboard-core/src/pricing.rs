//! Pricing Calculator
//!
//! Tier data and the derived display values shown in the comparison table.
//! All amounts are `rust_decimal::Decimal`.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Which price column is displayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn from_yearly(is_yearly: bool) -> Self {
        if is_yearly { Self::Yearly } else { Self::Monthly }
    }

    pub fn is_yearly(self) -> bool {
        self == Self::Yearly
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    /// Unit shown after the price ("/month", "/year")
    pub fn unit_label(self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

/// Value of one feature for one tier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Boolean(bool),
    Text(String),
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A keyed feature entry; order within a tier is significant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub key: String,
    pub value: FeatureValue,
}

/// One subscription plan
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Unique tier name (e.g., "Basic", "Pro")
    pub name: String,

    /// Price per month in USD
    pub monthly_price: Decimal,

    /// Price per year in USD
    pub yearly_price: Decimal,

    pub features: Vec<Feature>,
}

impl PricingTier {
    pub fn new(name: impl Into<String>, monthly_price: Decimal, yearly_price: Decimal) -> Self {
        Self {
            name: name.into(),
            monthly_price,
            yearly_price,
            features: Vec::new(),
        }
    }

    /// Builder-style feature append
    #[must_use]
    pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.features.push(Feature {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn feature(&self, key: &str) -> Option<&FeatureValue> {
        self.features.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    pub fn feature_keys(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.key.as_str())
    }

    pub fn price_for(&self, period: BillingPeriod) -> Decimal {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self.yearly_price,
        }
    }

    /// Formatted active price, e.g. "$9.99"
    pub fn display_price(&self, period: BillingPeriod) -> String {
        format_price(self.price_for(period))
    }

    pub fn yearly_savings(&self) -> String {
        calculate_yearly_savings(self.monthly_price, self.yearly_price)
    }
}

/// Format an amount as dollars with exactly two decimals
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// Percentage saved by paying yearly instead of twelve monthly payments
pub fn yearly_savings_percent(monthly_price: Decimal, yearly_price: Decimal) -> Result<Decimal> {
    let overflow = || DashboardError::Overflow(format!("savings of {monthly_price}/month"));
    let yearly_cost = monthly_price.checked_mul(dec!(12)).ok_or_else(overflow)?;
    let savings = yearly_cost.checked_sub(yearly_price).ok_or_else(overflow)?;
    let ratio = savings
        .checked_div(yearly_cost)
        .ok_or(DashboardError::DivisionByZero)?;
    ratio.checked_mul(dec!(100)).ok_or_else(overflow)
}

/// Savings percentage rounded to a whole number, without a `%` suffix
///
/// A zero monthly price has no meaningful savings and yields `"0"`, as
/// does a price too large to multiply out.
pub fn calculate_yearly_savings(monthly_price: Decimal, yearly_price: Decimal) -> String {
    match yearly_savings_percent(monthly_price, yearly_price) {
        Ok(percent) => percent
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        Err(e) => {
            tracing::debug!("Yearly savings guarded: {}", e);
            "0".into()
        }
    }
}
