//! Utils

use clap::Parser;
use rust_decimal::Decimal;

use crate::config::MergePricing;

/// Arguments for the cart examples
#[derive(Debug, Parser)]
pub struct ExampleCartArgs {
    /// Fixture set to replay into the cart
    #[clap(short, long, default_value = "groceries")]
    pub fixture: String,

    /// Number of fixture lines to add to the cart
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Tax rate as a fraction (e.g. 0.2 for 20%)
    #[clap(short, long, default_value = "0.2")]
    pub tax_rate: Decimal,

    /// Override the fixture's merge pricing
    #[clap(short, long, value_enum)]
    pub merge_pricing: Option<MergePricing>,
}
