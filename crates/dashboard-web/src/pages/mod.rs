//! Page Components

mod pricing;
mod product_create;

pub use pricing::PricingPage;
pub use product_create::ProductCreatePage;
