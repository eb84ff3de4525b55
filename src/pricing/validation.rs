//! Input validation for quote requests.
//!
//! Checks run in a fixed order and the first violation wins, so a given
//! request always reports the same error.

use rust_decimal::Decimal;

use super::requests::QuoteRequest;

/// Quote validation error types.
///
/// Every variant is a caller input error. Retrying the same request always
/// reproduces the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("items: at least one item is required")]
    EmptyItems,

    #[error("margin_pct and tax_pct must be between 0 and 100")]
    PercentageOutOfRange,

    #[error("currency must be a valid 3-letter ISO code")]
    InvalidCurrency,

    #[error("items[{0}].name is required")]
    MissingItemName(usize),

    #[error("items[{0}] qty/unit_price must be >= 0")]
    NegativeAmount(usize),

    #[error("labor_hours and labor_rate must be >= 0")]
    NegativeLabor,
}

impl ValidationError {
    /// Stable machine-readable code for this error
    pub fn error_type(&self) -> &'static str {
        match self {
            ValidationError::EmptyItems => "empty_items",
            ValidationError::PercentageOutOfRange => "percentage_out_of_range",
            ValidationError::InvalidCurrency => "invalid_currency",
            ValidationError::MissingItemName(_) => "missing_item_name",
            ValidationError::NegativeAmount(_) => "negative_amount",
            ValidationError::NegativeLabor => "negative_labor",
        }
    }

    /// Index of the offending line item, if the error concerns one
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::MissingItemName(index) | ValidationError::NegativeAmount(index) => {
                Some(*index)
            }
            _ => None,
        }
    }
}

/// Validate a quote request and return its upper-cased currency code.
///
/// Order of checks:
/// 1. at least one item
/// 2. margin and tax percentages within [0, 100]
/// 3. currency is exactly three ASCII letters
/// 4. each item, lowest index first: non-blank name, then non-negative amounts
/// 5. non-negative labor hours and rate
pub fn validate(request: &QuoteRequest) -> Result<String, ValidationError> {
    if request.items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }

    if !is_percentage(request.margin_pct) || !is_percentage(request.tax_pct) {
        return Err(ValidationError::PercentageOutOfRange);
    }

    let currency = normalize_currency(&request.currency_code)?;

    for (index, item) in request.items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(ValidationError::MissingItemName(index));
        }
        if item.quantity < Decimal::ZERO || item.unit_price < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(index));
        }
    }

    if request.labor_hours < Decimal::ZERO || request.labor_rate < Decimal::ZERO {
        return Err(ValidationError::NegativeLabor);
    }

    Ok(currency)
}

fn is_percentage(pct: Decimal) -> bool {
    pct >= Decimal::ZERO && pct <= Decimal::ONE_HUNDRED
}

/// Check a currency code and upper-case it (`"usd"` -> `"USD"`).
pub fn normalize_currency(code: &str) -> Result<String, ValidationError> {
    if code.chars().count() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidCurrency);
    }
    Ok(code.to_ascii_uppercase())
}
