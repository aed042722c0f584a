//! # dashboard-core
//!
//! Pure logic behind the dashboard's pricing and product pages. Nothing
//! here touches the DOM or the network, so it builds for both the WASM
//! frontend and the server.
//!
//! ## Pricing table
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬──────────────┐
//! │ Features     │ Basic        │ Pro          │ Enterprise   │  <- "Save 17%" badges when yearly
//! ├──────────────┼──────────────┼──────────────┼──────────────┤
//! │ Price        │ $9.99/month  │ $19.99/month │ $49.99/month │
//! │ Users        │ 1 user       │ 5 users      │ Unlimited    │  <- one row per feature key
//! │ Analytics    │ ✗            │ ✓            │ ✓            │     of the first tier
//! │              │ Choose Basic │ Choose Pro   │ Choose Ent.. │
//! └──────────────┴──────────────┴──────────────┴──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dashboard_core::{BillingPeriod, ComparisonTable, PricingCatalog};
//!
//! let catalog = PricingCatalog::default();
//! let table = ComparisonTable::build(&catalog, BillingPeriod::Yearly);
//! assert_eq!(table.prices[0].amount, "$99.99");
//! assert_eq!(table.headers[0].savings_badge.as_deref(), Some("Save 17%"));
//! ```

pub mod catalog;
pub mod error;
pub mod faq;
pub mod meta;
pub mod pricing;
pub mod product;
pub mod table;

pub use catalog::{Benefit, PricingCatalog};
pub use error::{DashboardError, Result};
pub use faq::{Disclosure, FaqEntry};
pub use meta::{generate_meta, PageMeta, SiteMeta};
pub use pricing::{
    calculate_yearly_savings, format_price, BillingPeriod, Feature, FeatureValue, PricingTier,
};
pub use product::{NewProduct, Product, ProductDraft, ProductStatus};
pub use table::{ComparisonTable, FeatureCell, FeatureRow, PriceCell, TierAction, TierHeader};
