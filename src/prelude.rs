//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{CatalogPage, CatalogView, SortOrder},
    checkout::{CheckoutDialog, CheckoutError, OrderConfirmation, OrderForm, PaymentMethod},
    filter::{FilterCriteria, apply_filters},
    fixtures::{Fixture, FixtureError},
    packages::{PackageId, StarPackage},
    products::{Product, ProductId},
    promo::Promo,
    render::{RenderError, write_catalog_page, write_star_page},
    sizes::SizeList,
};
