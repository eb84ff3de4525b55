//! Command-line caller for the pricing engine
//!
//! Reads a quote request as JSON, prices it and renders the result as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::pricing::{compute_breakdown, Aggregation, PricingOptions, QuoteRequest, QuoteResponse};

#[derive(Debug, Parser)]
#[command(
    name = "quote-pricing",
    version,
    about = "Price a quote (line items, labor, margin, tax) with exact arithmetic"
)]
pub struct Cli {
    /// Quote request JSON file; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// How line items are summed: "exact" or "rounded"
    #[arg(long)]
    pub aggregation: Option<Aggregation>,

    /// Include intermediate amounts (labor, margin, tax) in the output
    #[arg(long)]
    pub breakdown: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Engine options, with the command line overriding the environment
    pub fn pricing_options(&self, config: &Config) -> PricingOptions {
        PricingOptions::new(self.aggregation.unwrap_or(config.aggregation))
    }

    pub fn pretty_output(&self, config: &Config) -> bool {
        self.pretty || config.pretty_json
    }
}

/// Read the raw request from a file, or from stdin when no path is given
pub fn read_request(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Decode a JSON quote request, price it and render the response
pub fn price_json(
    raw: &str,
    options: &PricingOptions,
    breakdown: bool,
    pretty: bool,
) -> Result<String> {
    let request: QuoteRequest = serde_json::from_str(raw)?;
    tracing::debug!(
        items = request.items.len(),
        aggregation = %options.aggregation,
        "Pricing quote"
    );

    let (totals, details) = compute_breakdown(&request, options)?;
    tracing::info!(
        currency = %totals.currency,
        subtotal = %totals.subtotal,
        total = %totals.total,
        "Quote priced"
    );

    let response = QuoteResponse {
        totals,
        breakdown: breakdown.then_some(details),
    };
    render(&response, pretty)
}

pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::pricing::ValidationError;

    const REFERENCE: &str = r#"{
        "items": [
            {"kind": "material", "name": "Cable", "qty": 2, "unit": "m", "unit_price": 10.00}
        ],
        "labor_hours": 1,
        "labor_rate": 5.00,
        "margin_pct": 10,
        "tax_pct": 8,
        "currency": "usd"
    }"#;

    #[test]
    fn test_price_json_reference() {
        let json = price_json(REFERENCE, &PricingOptions::default(), false, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["subtotal"], "27.50");
        assert_eq!(value["total"], "29.70");
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["items"][0]["line_total"], "20.00");
        assert!(value.get("breakdown").is_none());
    }

    #[test]
    fn test_price_json_with_breakdown() {
        let json = price_json(REFERENCE, &PricingOptions::default(), true, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["breakdown"]["labor_cost"], "5.00");
        assert_eq!(value["breakdown"]["margin_amount"], "2.50");
        assert_eq!(value["breakdown"]["tax_amount"], "2.20");
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_price_json_keeps_long_numbers_exact() {
        let raw = r#"{
            "items": [{"name": "Transformer", "qty": 1, "unit_price": 1234567890123456.78}],
            "currency": "usd"
        }"#;
        let json = price_json(raw, &PricingOptions::default(), false, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["items"][0]["qty"], "1");
        assert_eq!(value["items"][0]["unit_price"], "1234567890123456.78");
        assert_eq!(value["items"][0]["line_total"], "1234567890123456.78");
        assert_eq!(value["total"], "1234567890123456.78");
    }

    #[test]
    fn test_price_json_margin_just_above_range() {
        let raw = r#"{
            "items": [{"name": "Cable", "qty": 1, "unit_price": 1}],
            "margin_pct": 100.00000000000000001,
            "currency": "usd"
        }"#;
        let err = price_json(raw, &PricingOptions::default(), false, false).unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::PercentageOutOfRange)
        ));
    }

    #[test]
    fn test_price_json_validation_error() {
        let raw = r#"{"items": [], "currency": "USD"}"#;
        let err = price_json(raw, &PricingOptions::default(), false, false).unwrap_err();

        assert!(matches!(err, AppError::Validation(ValidationError::EmptyItems)));
    }

    #[test]
    fn test_price_json_bad_json() {
        let err = price_json("{\"items\": ", &PricingOptions::default(), false, false).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["quote-pricing", "--aggregation", "rounded"]);
        let config = Config {
            aggregation: Aggregation::ExactProducts,
            pretty_json: true,
        };

        assert_eq!(cli.pricing_options(&config).aggregation, Aggregation::RoundedLineTotals);
        assert!(cli.pretty_output(&config));

        let cli = Cli::parse_from(["quote-pricing"]);
        assert_eq!(cli.pricing_options(&config).aggregation, Aggregation::ExactProducts);
    }

    #[test]
    fn test_cli_rejects_unknown_aggregation() {
        let result = Cli::try_parse_from(["quote-pricing", "--aggregation", "banker"]);
        assert!(result.is_err());
    }
}
