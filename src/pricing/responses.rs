//! Response DTOs for quote pricing.
//!
//! Monetary outputs are two-decimal strings, never floats.

use rust_decimal::Decimal;
use serde::Serialize;

use super::validation::ValidationError;

/// A priced line item, in request order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemTotal {
    pub kind: String,
    pub name: String,
    #[serde(rename = "qty", with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    pub unit: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub line_total: String,
}

/// Computed quote totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteTotals {
    pub items: Vec<LineItemTotal>,
    pub subtotal: String,
    pub total: String,
    pub currency: String,
}

/// Intermediate amounts of a quote, rounded for display only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteBreakdown {
    pub items_sum: String,
    pub labor_cost: String,
    pub base: String,
    pub margin_amount: String,
    pub tax_amount: String,
}

/// Quote totals with an optional breakdown
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub totals: QuoteTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<QuoteBreakdown>,
}

/// Validation error response
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&ValidationError> for ValidationErrorResponse {
    fn from(err: &ValidationError) -> Self {
        Self {
            error_type: err.error_type().to_string(),
            message: err.to_string(),
            details: err.index().map(|index| serde_json::json!({ "index": index })),
        }
    }
}
