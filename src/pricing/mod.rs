//! Quote pricing module.
//!
//! Computes line totals, subtotal and total of a quote with exact
//! arithmetic. Callers hand in an already-deserialized `QuoteRequest` and
//! serialize the resulting `QuoteTotals` themselves.

pub mod calculators;
pub mod engine;
pub mod requests;
pub mod responses;
pub mod validation;

// Re-export commonly used items
pub use calculators::round2;
pub use engine::{compute, compute_breakdown, compute_with, Aggregation, PricingOptions};
pub use requests::{LineItemRequest, QuoteRequest};
pub use responses::{
    LineItemTotal, QuoteBreakdown, QuoteResponse, QuoteTotals, ValidationErrorResponse,
};
pub use validation::ValidationError;
