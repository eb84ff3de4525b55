//! Request DTOs for quote pricing.
//!
//! Numeric fields accept JSON numbers or strings and are held as exact
//! decimals. Range and sign checks happen in validation, not here.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A line item in the request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItemRequest {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "qty", alias = "quantity")]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub unit_price: Decimal,
}

impl LineItemRequest {
    pub fn new(name: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            kind: String::new(),
            name: name.into(),
            quantity,
            unit: String::new(),
            unit_price,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// Request to price a quote
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub items: Vec<LineItemRequest>,
    #[serde(default)]
    pub labor_hours: Decimal,
    #[serde(default)]
    pub labor_rate: Decimal,
    #[serde(default)]
    pub margin_pct: Decimal,
    #[serde(default)]
    pub tax_pct: Decimal,
    #[serde(rename = "currency", alias = "currency_code", default)]
    pub currency_code: String,
}

impl QuoteRequest {
    /// Quote with no labor, margin or tax
    pub fn new(items: Vec<LineItemRequest>, currency_code: impl Into<String>) -> Self {
        Self {
            items,
            labor_hours: Decimal::ZERO,
            labor_rate: Decimal::ZERO,
            margin_pct: Decimal::ZERO,
            tax_pct: Decimal::ZERO,
            currency_code: currency_code.into(),
        }
    }

    pub fn with_labor(mut self, hours: Decimal, rate: Decimal) -> Self {
        self.labor_hours = hours;
        self.labor_rate = rate;
        self
    }

    pub fn with_margin(mut self, margin_pct: Decimal) -> Self {
        self.margin_pct = margin_pct;
        self
    }

    pub fn with_tax(mut self, tax_pct: Decimal) -> Self {
        self.tax_pct = tax_pct;
        self
    }

    pub fn with_currency(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = currency_code.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_numbers_and_strings() {
        let json = r#"{
            "items": [
                {"kind": "material", "name": "Cable", "qty": 2, "unit": "m", "unit_price": 10.5},
                {
                    "kind": "material",
                    "name": "Breaker",
                    "quantity": "1",
                    "unit": "pc",
                    "unit_price": "0.335"
                }
            ],
            "labor_hours": 1.5,
            "labor_rate": "40",
            "margin_pct": 12.5,
            "tax_pct": 16,
            "currency": "mxn"
        }"#;

        let req: QuoteRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.items.len(), 2);
        assert_eq!(req.items[0].quantity, dec!(2));
        assert_eq!(req.items[0].unit_price, dec!(10.5));
        assert_eq!(req.items[1].quantity, dec!(1));
        assert_eq!(req.items[1].unit_price, dec!(0.335));
        assert_eq!(req.labor_hours, dec!(1.5));
        assert_eq!(req.labor_rate, dec!(40));
        assert_eq!(req.margin_pct, dec!(12.5));
        assert_eq!(req.tax_pct, dec!(16));
        assert_eq!(req.currency_code, "mxn");
    }

    #[test]
    fn test_deserialize_numbers_without_float_loss() {
        let json = r#"{
            "items": [
                {"name": "Transformer", "qty": 1, "unit_price": 1234567890123456.78},
                {"name": "Fuse", "qty": 0.33500000000000000001, "unit_price": 3}
            ],
            "margin_pct": 100.00000000000000001,
            "currency": "usd"
        }"#;

        let req: QuoteRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.items[0].unit_price, dec!(1234567890123456.78));
        assert_eq!(req.items[1].quantity, dec!(0.33500000000000000001));
        assert_eq!(req.margin_pct, dec!(100.00000000000000001));
        assert!(req.margin_pct > Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"items": [{"name": "Visit"}], "currency_code": "USD"}"#;

        let req: QuoteRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.currency_code, "USD");
        assert_eq!(req.labor_hours, Decimal::ZERO);
        assert_eq!(req.margin_pct, Decimal::ZERO);
        assert_eq!(req.items[0].kind, "");
        assert_eq!(req.items[0].quantity, Decimal::ZERO);
    }

    #[test]
    fn test_missing_items_deserializes_empty() {
        let req: QuoteRequest = serde_json::from_str(r#"{"currency": "USD"}"#).unwrap();
        assert!(req.items.is_empty());
    }

    #[test]
    fn test_builders() {
        let req = QuoteRequest::new(
            vec![LineItemRequest::new("Cable", dec!(2), dec!(3))
                .with_kind("material")
                .with_unit("m")],
            "eur",
        )
        .with_labor(dec!(2), dec!(30))
        .with_margin(dec!(10))
        .with_tax(dec!(21));

        assert_eq!(req.items[0].kind, "material");
        assert_eq!(req.items[0].unit, "m");
        assert_eq!(req.labor_rate, dec!(30));
        assert_eq!(req.tax_pct, dec!(21));
        assert_eq!(req.currency_code, "eur");
    }
}
