//! Error Types for the dashboard core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// Savings requested for a tier whose monthly price is zero
    #[error("Division by zero: monthly price is 0")]
    DivisionByZero,

    #[error("Price arithmetic overflowed: {0}")]
    Overflow(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Feature keys of tier {tier} do not match: expected {expected:?}, found {found:?}")]
    FeatureKeysMismatch {
        tier: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid product {field}: {reason}")]
    InvalidProduct {
        field: &'static str,
        reason: String,
    },

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashboardError {
    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidProduct { field, reason } => format!("{field}: {reason}"),
            Self::UnknownPage(_) => "Page not found.".into(),
            Self::DivisionByZero
            | Self::Overflow(_)
            | Self::InvalidCatalog(_)
            | Self::FeatureKeysMismatch { .. } => "Pricing is currently unavailable.".into(),
            Self::Io(_) | Self::Serialization(_) => "An error occurred processing your request.".into(),
        }
    }
}
