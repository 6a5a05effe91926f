//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct StorefrontArgs {
    /// Fixture set to use for the master catalogs
    #[clap(short, long, default_value = "storefront")]
    pub fixture: String,

    /// Filter: selected size
    #[clap(long)]
    pub size: Option<String>,

    /// Filter: selected category (case-sensitive)
    #[clap(long)]
    pub category: Option<String>,

    /// Filter: minimum price in rubles, inclusive
    #[clap(long)]
    pub min: Option<i64>,

    /// Filter: maximum price in rubles, inclusive
    #[clap(long)]
    pub max: Option<i64>,

    /// Filter: free-text search on product names
    #[clap(short, long)]
    pub query: Option<String>,

    /// Filter: only show in-stock products
    #[clap(long)]
    pub in_stock: bool,

    /// Star package id to walk through checkout
    #[clap(short, long)]
    pub order: Option<u32>,

    /// Telegram username for the order form
    #[clap(long, default_value = "@demo")]
    pub username: String,

    /// Email for the order form
    #[clap(long, default_value = "demo@example.com")]
    pub email: String,

    /// Payment method for the order form (card, qiwi, yoomoney, crypto)
    #[clap(long, default_value = "card")]
    pub payment: String,
}
