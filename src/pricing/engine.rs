//! Quote pricing engine.
//!
//! `compute` validates a request, prices every line item, adds labor, then
//! applies margin and tax. All arithmetic is exact; rounding to cents happens
//! only when rendering output strings.
//!
//! Line totals are display values. By default the subtotal is built from the
//! exact item products, so the displayed line totals can differ from the
//! subtotal by a few cents. `Aggregation::RoundedLineTotals` sums the
//! displayed values instead.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::calculators::{
    calculate_totals, cents_to_amount, format_cents, line_amount, round2, round_cents,
};
use super::requests::QuoteRequest;
use super::responses::{LineItemTotal, QuoteBreakdown, QuoteTotals};
use super::validation::{validate, ValidationError};

/// How line items are summed into the quote base
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Aggregation {
    /// Sum the exact `quantity * unit_price` products
    #[default]
    ExactProducts,
    /// Sum the per-item totals after rounding to cents
    RoundedLineTotals,
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::ExactProducts => write!(f, "exact"),
            Aggregation::RoundedLineTotals => write!(f, "rounded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown aggregation mode '{0}', expected 'exact' or 'rounded'")]
pub struct UnknownAggregation(pub String);

impl FromStr for Aggregation {
    type Err = UnknownAggregation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Aggregation::ExactProducts),
            "rounded" => Ok(Aggregation::RoundedLineTotals),
            _ => Err(UnknownAggregation(s.to_string())),
        }
    }
}

/// Engine options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingOptions {
    pub aggregation: Aggregation,
}

impl PricingOptions {
    pub fn new(aggregation: Aggregation) -> Self {
        Self { aggregation }
    }
}

/// Price a quote with the default options.
///
/// # Examples
/// ```
/// use quote_pricing::pricing::{compute, LineItemRequest, QuoteRequest};
/// use rust_decimal::Decimal;
///
/// let request = QuoteRequest::new(
///     vec![LineItemRequest::new("Cable", Decimal::from(2), Decimal::new(1000, 2))],
///     "usd",
/// )
/// .with_labor(Decimal::ONE, Decimal::new(500, 2))
/// .with_margin(Decimal::from(10))
/// .with_tax(Decimal::from(8));
///
/// let totals = compute(&request).unwrap();
/// assert_eq!(totals.subtotal, "27.50");
/// assert_eq!(totals.total, "29.70");
/// assert_eq!(totals.currency, "USD");
/// ```
pub fn compute(request: &QuoteRequest) -> Result<QuoteTotals, ValidationError> {
    compute_with(request, &PricingOptions::default())
}

/// Price a quote with explicit options.
pub fn compute_with(
    request: &QuoteRequest,
    options: &PricingOptions,
) -> Result<QuoteTotals, ValidationError> {
    compute_breakdown(request, options).map(|(totals, _)| totals)
}

/// Price a quote and also return its intermediate amounts.
///
/// The breakdown is rounded for display only; it never feeds back into the
/// totals.
pub fn compute_breakdown(
    request: &QuoteRequest,
    options: &PricingOptions,
) -> Result<(QuoteTotals, QuoteBreakdown), ValidationError> {
    let currency = validate(request)?;

    let mut items_sum = BigDecimal::from(0);
    let mut items = Vec::with_capacity(request.items.len());

    for item in &request.items {
        let amount = line_amount(item.quantity, item.unit_price);
        let cents = round_cents(&amount);
        let line_total = format_cents(&cents);

        items_sum += match options.aggregation {
            Aggregation::ExactProducts => amount,
            Aggregation::RoundedLineTotals => cents_to_amount(cents),
        };

        items.push(LineItemTotal {
            kind: item.kind.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            unit_price: item.unit_price,
            line_total,
        });
    }

    let exact = calculate_totals(
        items_sum,
        request.labor_hours,
        request.labor_rate,
        request.margin_pct,
        request.tax_pct,
    );

    let totals = QuoteTotals {
        items,
        subtotal: round2(&exact.subtotal),
        total: round2(&exact.total),
        currency,
    };

    let breakdown = QuoteBreakdown {
        items_sum: round2(&exact.items_sum),
        labor_cost: round2(&exact.labor_cost),
        base: round2(&exact.base),
        margin_amount: round2(&exact.margin_amount),
        tax_amount: round2(&exact.tax_amount),
    };

    Ok((totals, breakdown))
}
