//! Core pricing calculation functions.
//!
//! Pure functions for quote money math - no I/O, no logging.
//! Inputs arrive as exact `rust_decimal::Decimal` values and are lifted into
//! arbitrary-precision `BigDecimal` so no intermediate value is ever rounded.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use rust_decimal::Decimal;

/// Lift an input decimal into the arbitrary-precision domain without loss.
pub fn to_exact(value: Decimal) -> BigDecimal {
    BigDecimal::new(BigInt::from(value.mantissa()), i64::from(value.scale()))
}

/// Convert a percentage (0-100) into its exact ratio (0-1).
///
/// `12.5` becomes `0.125`. Division by 100 only moves the decimal point,
/// so the result is exact.
pub fn percent_ratio(pct: Decimal) -> BigDecimal {
    let ratio = to_exact(pct);
    let (digits, scale) = ratio.as_bigint_and_exponent();
    BigDecimal::new(digits, scale + 2)
}

/// Exact product of a quantity and a unit price.
pub fn line_amount(quantity: Decimal, unit_price: Decimal) -> BigDecimal {
    to_exact(quantity) * to_exact(unit_price)
}

/// Round a non-negative amount to whole cents using half-up rounding.
///
/// The amount is scaled by 100, exactly one half is added, and the result is
/// floored. `0.125` becomes `13`, `0.005` becomes `1`.
pub fn round_cents(amount: &BigDecimal) -> BigInt {
    debug_assert!(amount >= &BigDecimal::from(0), "round_cents expects a non-negative amount");

    let half = BigDecimal::new(BigInt::from(5), 1);
    let shifted = amount.clone() * BigDecimal::from(100) + half;

    // Dropping the fraction truncates toward zero, which is the floor here.
    let (cents, _) = shifted.with_scale(0).as_bigint_and_exponent();
    cents
}

/// Render a count of cents as a two-decimal string.
///
/// Always at least one integer digit and exactly two fractional digits:
/// `5` -> `"0.05"`, `45` -> `"0.45"`, `1234` -> `"12.34"`.
pub fn format_cents(cents: &BigInt) -> String {
    let digits = format!("{:0>3}", cents.to_string());
    let (whole, fraction) = digits.split_at(digits.len() - 2);
    format!("{}.{}", whole, fraction)
}

/// Amount represented by a count of cents.
pub fn cents_to_amount(cents: BigInt) -> BigDecimal {
    BigDecimal::new(cents, 2)
}

/// Round to two decimals (half-up) and render for display.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
/// use quote_pricing::pricing::round2;
/// use std::str::FromStr;
///
/// assert_eq!(round2(&BigDecimal::from_str("0.125").unwrap()), "0.13");
/// assert_eq!(round2(&BigDecimal::from_str("0.005").unwrap()), "0.01");
/// assert_eq!(round2(&BigDecimal::from_str("12.3449").unwrap()), "12.34");
/// ```
pub fn round2(amount: &BigDecimal) -> String {
    format_cents(&round_cents(amount))
}

/// Exact amounts of the quote pipeline, before any display rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactTotals {
    pub items_sum: BigDecimal,
    pub labor_cost: BigDecimal,
    pub base: BigDecimal,
    pub margin_amount: BigDecimal,
    pub subtotal: BigDecimal,
    pub tax_amount: BigDecimal,
    pub total: BigDecimal,
}

/// Calculate quote totals from the item sum.
///
/// Labor is added to the items, margin is applied to that base, then tax is
/// applied to base plus margin. Nothing is rounded.
pub fn calculate_totals(
    items_sum: BigDecimal,
    labor_hours: Decimal,
    labor_rate: Decimal,
    margin_pct: Decimal,
    tax_pct: Decimal,
) -> ExactTotals {
    let labor_cost = to_exact(labor_hours) * to_exact(labor_rate);
    let base = items_sum.clone() + labor_cost.clone();
    let margin_amount = base.clone() * percent_ratio(margin_pct);
    let subtotal = base.clone() + margin_amount.clone();
    let tax_amount = subtotal.clone() * percent_ratio(tax_pct);
    let total = subtotal.clone() + tax_amount.clone();

    ExactTotals {
        items_sum,
        labor_cost,
        base,
        margin_amount,
        subtotal,
        tax_amount,
        total,
    }
}
