//! Product drafts submitted from the "add product" form

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{DashboardError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

impl ProductStatus {
    pub const ALL: [Self; 3] = [Self::Draft, Self::Active, Self::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Archived => "Archived",
        }
    }
}

impl FromStr for ProductStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            other => Err(DashboardError::InvalidProduct {
                field: "status",
                reason: format!("unknown status '{other}'"),
            }),
        }
    }
}

/// Raw form input, every field as typed by the user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub status: String,
}

/// A draft that passed validation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub stock: u32,
    pub status: ProductStatus,
}

/// A stored product
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(flatten)]
    pub details: NewProduct,
    pub created_at: DateTime<Utc>,
}

fn invalid(field: &'static str, reason: impl Into<String>) -> DashboardError {
    DashboardError::InvalidProduct {
        field,
        reason: reason.into(),
    }
}

impl ProductDraft {
    /// Validate and normalize; reports the first offending field
    pub fn validate(&self) -> Result<NewProduct> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(invalid("name", "is required"));
        }

        let sku = self.sku.trim();
        if sku.is_empty() {
            return Err(invalid("sku", "is required"));
        }
        if sku.chars().any(char::is_whitespace) {
            return Err(invalid("sku", "must not contain spaces"));
        }

        let price = Decimal::from_str(self.price.trim())
            .map_err(|_| invalid("price", "must be a number"))?;
        if price.is_sign_negative() && !price.is_zero() {
            return Err(invalid("price", "must not be negative"));
        }

        let stock = match self.stock.trim() {
            "" => 0,
            raw => raw
                .parse::<u32>()
                .map_err(|_| invalid("stock", "must be a whole number"))?,
        };

        let status = match self.status.trim() {
            "" => ProductStatus::default(),
            raw => raw.parse()?,
        };

        let category = Some(self.category.trim())
            .filter(|c| !c.is_empty())
            .map(ToString::to_string);

        Ok(NewProduct {
            name: name.to_string(),
            sku: sku.to_uppercase(),
            description: self.description.trim().to_string(),
            category,
            price: price.round_dp(2),
            stock,
            status,
        })
    }
}

impl NewProduct {
    pub fn into_product(self, id: impl Into<String>, created_at: DateTime<Utc>) -> Product {
        Product {
            id: id.into(),
            details: self,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "  Desk Lamp ".into(),
            sku: "lamp-01".into(),
            description: "Warm light".into(),
            category: "".into(),
            price: "24.5".into(),
            stock: "12".into(),
            status: "Active".into(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let product = draft().validate().unwrap();
        assert_eq!(product.name, "Desk Lamp");
        assert_eq!(product.sku, "LAMP-01");
        assert_eq!(product.price, dec!(24.50));
        assert_eq!(product.stock, 12);
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.category, None);
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let product = ProductDraft {
            stock: String::new(),
            status: String::new(),
            ..draft()
        }
        .validate()
        .unwrap();
        assert_eq!(product.stock, 0);
        assert_eq!(product.status, ProductStatus::Draft);
    }

    #[test]
    fn test_rejects_bad_fields() {
        let cases = [
            (ProductDraft { name: " ".into(), ..draft() }, "name"),
            (ProductDraft { sku: "".into(), ..draft() }, "sku"),
            (ProductDraft { sku: "a b".into(), ..draft() }, "sku"),
            (ProductDraft { price: "abc".into(), ..draft() }, "price"),
            (ProductDraft { price: "-3".into(), ..draft() }, "price"),
            (ProductDraft { stock: "-1".into(), ..draft() }, "stock"),
            (ProductDraft { status: "sold".into(), ..draft() }, "status"),
        ];
        for (input, expected) in cases {
            match input.validate() {
                Err(DashboardError::InvalidProduct { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {expected} error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_product_serializes_flat() {
        let product = draft()
            .validate()
            .unwrap()
            .into_product("p-1", DateTime::from_timestamp(0, 0).unwrap());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "p-1");
        assert_eq!(json["sku"], "LAMP-01");
        assert_eq!(json["status"], "active");
    }
}
