//! Storefront Demo
//!
//! Renders both storefront pages and optionally walks a checkout.
//!
//! Use `-f` to load a fixture set by name
//! Use `--size` / `--category` / `--min` / `--max` / `-q` / `--in-stock` to filter the catalog
//! Use `-o` with a package id to submit a demo order for that package

use std::io;

use anyhow::Result;

use clap::Parser;
use rusty_money::{Money, iso::RUB};
use vitrine::{
    checkout::{CheckoutDialog, PaymentMethod},
    fixtures::Fixture,
    render::{write_catalog_page, write_star_page},
    utils::StorefrontArgs,
};

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = StorefrontArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_star_page(&mut handle, fixture.star_packages())?;

    let mut page = fixture.catalog_page();

    {
        let criteria = page.criteria_mut();
        criteria.size = args.size.clone();
        criteria.category = args.category.clone();

        if let Some(min) = args.min {
            criteria.price_min = Money::from_major(min, RUB);
        }

        if let Some(max) = args.max {
            criteria.price_max = Money::from_major(max, RUB);
        }

        if let Some(query) = args.query.clone() {
            criteria.query = query;
        }

        criteria.stock_only = args.in_stock;
    }

    write_catalog_page(&mut handle, &page)?;

    if let Some(package_id) = args.order {
        let package = fixture
            .star_packages()
            .iter()
            .find(|p| p.id().0 == package_id)
            .ok_or_else(|| anyhow::anyhow!("no package with id {package_id}"))?;

        let mut dialog = CheckoutDialog::new();
        dialog.open(package.clone());

        let form = dialog.form_mut();
        form.username = args.username.clone();
        form.email = args.email.clone();
        form.payment_method = Some(args.payment.parse::<PaymentMethod>()?);

        let confirmation = dialog.submit()?;

        println!("\n{confirmation}");
    }

    Ok(())
}
