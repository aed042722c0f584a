//! Page metadata published to the document head

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

pub const PRICING_TABLE_PATH: &str = "/pages/pricing/table";
pub const PRODUCT_CREATE_PATH: &str = "/pages/products/create";

/// Site-wide values every page's metadata is composed with
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub name: String,
    /// Absolute origin without a trailing slash requirement
    pub base_url: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Dashboard".into(),
            base_url: "http://localhost:3000".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Site-relative canonical path
    pub canonical: String,
}

pub fn generate_meta(
    title: impl Into<String>,
    description: impl Into<String>,
    canonical: impl Into<String>,
) -> PageMeta {
    PageMeta {
        title: title.into(),
        description: description.into(),
        canonical: canonical.into(),
    }
}

impl PageMeta {
    pub fn pricing_table() -> Self {
        generate_meta(
            "Pricing Table",
            "Compare plans side by side and switch between monthly and yearly billing.",
            PRICING_TABLE_PATH,
        )
    }

    pub fn product_create() -> Self {
        generate_meta(
            "Add Product",
            "Add new products page. A fast and efficient product addition process with a user-friendly interface and easily editable form fields.",
            PRODUCT_CREATE_PATH,
        )
    }

    /// Metadata for a known route; a trailing slash is ignored
    pub fn for_path(path: &str) -> Result<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            PRICING_TABLE_PATH => Ok(Self::pricing_table()),
            PRODUCT_CREATE_PATH => Ok(Self::product_create()),
            _ => Err(DashboardError::UnknownPage(path.to_string())),
        }
    }

    pub fn document_title(&self, site: &SiteMeta) -> String {
        format!("{} - {}", self.title, site.name)
    }

    pub fn canonical_url(&self, site: &SiteMeta) -> String {
        format!(
            "{}/{}",
            site.base_url.trim_end_matches('/'),
            self.canonical.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_create_meta() {
        let meta = PageMeta::product_create();
        assert_eq!(meta.title, "Add Product");
        assert_eq!(meta.canonical, "/pages/products/create");
        assert!(!meta.description.is_empty());
    }

    #[test]
    fn test_compose_with_site() {
        let site = SiteMeta {
            name: "Acme".into(),
            base_url: "https://acme.test/".into(),
        };
        let meta = PageMeta::product_create();
        assert_eq!(meta.document_title(&site), "Add Product - Acme");
        assert_eq!(meta.canonical_url(&site), "https://acme.test/pages/products/create");
    }

    #[test]
    fn test_lookup_by_path() {
        assert_eq!(PageMeta::for_path("/pages/pricing/table/").unwrap(), PageMeta::pricing_table());
        assert!(matches!(
            PageMeta::for_path("/nope"),
            Err(DashboardError::UnknownPage(p)) if p == "/nope"
        ));
    }
}
