//! Cart Example
//!
//! Replays a fixture set into a cart and prints its lines and totals.
//!
//! Use `-f` to load a fixture set by name from `fixtures/carts`
//! Use `-n` to specify the number of fixture lines to add
//! Use `-t` to set the tax rate as a fraction
//! Use `-m` to override the fixture's merge pricing
//!
//! Set `RUST_LOG=panier=debug` to log every merge, removal and rejection.

use std::io;

use anyhow::Result;
use clap::Parser;
use panier::{fixtures::Fixture, summary::CartSummary, utils::ExampleCartArgs};
use tracing_subscriber::EnvFilter;

/// Cart Example
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("info")),
        )
        .compact()
        .with_writer(io::stderr)
        .init();

    let args = ExampleCartArgs::parse();

    let mut fixture = Fixture::from_set(&args.fixture)?;

    if let Some(merge_pricing) = args.merge_pricing {
        fixture.set_merge_pricing(merge_pricing);
    }

    let cart = fixture.cart(args.n)?;

    tracing::info!(
        fixture = %args.fixture,
        lines = cart.len(),
        merge_pricing = ?cart.merge_pricing(),
        "cart built"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    CartSummary::new(&cart, args.tax_rate).write_to(&mut handle)?;

    Ok(())
}
