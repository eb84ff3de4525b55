use anyhow::Context;
use clap::Parser;
use quote_pricing::cli::{self, Cli};
use quote_pricing::config::Config;
use quote_pricing::error::AppError;
use quote_pricing::logging;
use quote_pricing::pricing::ValidationErrorResponse;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logger(cli.verbose);

    let config = Config::load(cli.aggregation).context("failed to load configuration")?;
    let options = cli.pricing_options(&config);
    let pretty = cli.pretty_output(&config);

    tracing::debug!(aggregation = %options.aggregation, "Configuration loaded");

    let raw = cli::read_request(cli.input.as_deref()).context("failed to read quote request")?;

    match cli::price_json(&raw, &options, cli.breakdown, pretty) {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            let code = e.exit_code();
            match &e {
                AppError::Validation(err) => {
                    println!("{}", cli::render(&ValidationErrorResponse::from(err), pretty)?);
                }
                _ => eprintln!("{}", e),
            }
            std::process::exit(code);
        }
    }
}
