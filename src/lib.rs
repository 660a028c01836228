//! Panier
//!
//! Panier is a small shopping-cart aggregate: it merges line items by product
//! name and computes totals excluding and including tax.

pub mod cart;
pub mod config;
pub mod fixtures;
pub mod lines;
pub mod prelude;
pub mod pricing;
pub mod summary;
pub mod utils;
