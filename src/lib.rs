//! Exact-arithmetic pricing for quotes.
//!
//! The [`pricing`] module holds the engine; the remaining modules are the
//! command-line caller around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pricing;

pub use pricing::{compute, compute_with, QuoteRequest, QuoteTotals, ValidationError};
