//! Vitrine
//!
//! Vitrine is a storefront engine modelling two single-page shop views: a
//! Telegram Stars package seller with a checkout dialog, and a filterable
//! product catalog.

pub mod catalog;
pub mod checkout;
pub mod filter;
pub mod fixtures;
pub mod packages;
pub mod prelude;
pub mod products;
pub mod promo;
pub mod render;
pub mod sizes;
pub mod utils;
