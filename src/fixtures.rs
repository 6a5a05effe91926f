//! Fixtures
//!
//! Bundled YAML master data for both storefront pages, loaded once at startup
//! and treated as immutable for the session.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, RUB},
};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::CatalogPage,
    packages::{PackageId, StarPackage},
    products::{Product, ProductId},
    promo::Promo,
    sizes::SizeList,
};

/// The stars-page master data, as bundled.
pub const STARS_SET: &str = include_str!("../fixtures/stars.yaml");

/// The catalog-page master data, as bundled.
pub const CATALOG_SET: &str = include_str!("../fixtures/catalog.yaml");

/// Errors raised while loading fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The named fixture set is not bundled.
    #[error("unknown fixture set: {0}")]
    UnknownSet(String),

    /// A price string could not be parsed.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A percentage string could not be parsed.
    #[error("invalid percentage: {0}")]
    InvalidPercentage(String),

    /// A currency code outside the storefront's whitelist.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// An entry declares only one half of a promo (original price without a
    /// discount, or the reverse).
    #[error("incomplete promo on entry: {0}")]
    IncompletePromo(String),

    /// Wrapped YAML deserialization error.
    #[error(transparent)]
    Yaml(#[from] serde_norway::Error),
}

/// Wrapper for star packages in YAML.
#[derive(Debug, Deserialize)]
pub struct StarsFixture {
    /// Packages in card display order.
    pub packages: Vec<StarPackageFixture>,
}

/// One star package entry in YAML.
#[derive(Debug, Deserialize)]
pub struct StarPackageFixture {
    /// Unique integer identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Number of stars in the package.
    pub stars: u32,

    /// Price (e.g. "650 RUB").
    pub price: String,

    /// Optional strike-through price (e.g. "900 RUB").
    pub original_price: Option<String>,

    /// Optional discount badge (e.g. "28%").
    pub discount: Option<String>,

    /// Whether the card gets the "popular" highlight.
    #[serde(default)]
    pub popular: bool,

    /// Opaque image path.
    pub image: String,

    /// Marketing line under the title.
    pub description: String,
}

/// Wrapper for catalog products in YAML.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in master list order.
    pub products: Vec<ProductFixture>,
}

/// One catalog product entry in YAML.
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Unique integer identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Price (e.g. "2999 RUB").
    pub price: String,

    /// Optional strike-through price.
    pub original_price: Option<String>,

    /// Optional discount badge.
    pub discount: Option<String>,

    /// Opaque image path.
    pub image: String,

    /// Category tag.
    pub category: String,

    /// Available sizes in display order.
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Whether the product is in stock.
    pub in_stock: bool,
}

impl TryFrom<StarPackageFixture> for StarPackage<'static> {
    type Error = FixtureError;

    fn try_from(fixture: StarPackageFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let promo = parse_promo(
            &fixture.name,
            fixture.original_price.as_deref(),
            fixture.discount.as_deref(),
        )?;

        Ok(StarPackage::new(
            PackageId(fixture.id),
            fixture.name,
            fixture.stars,
            Money::from_minor(minor_units, currency),
            promo,
            fixture.popular,
            fixture.image,
            fixture.description,
        ))
    }
}

impl TryFrom<ProductFixture> for Product<'static> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let promo = parse_promo(
            &fixture.name,
            fixture.original_price.as_deref(),
            fixture.discount.as_deref(),
        )?;

        let size_refs: Vec<&str> = fixture.sizes.iter().map(String::as_str).collect();

        Ok(Product::new(
            ProductId(fixture.id),
            fixture.name,
            Money::from_minor(minor_units, currency),
            promo,
            fixture.image,
            fixture.category,
            SizeList::from_strs(&size_refs),
            fixture.in_stock,
        ))
    }
}

/// Both master catalogs of a bundled fixture set.
#[derive(Debug)]
pub struct Fixture {
    star_packages: Vec<StarPackage<'static>>,
    products: Vec<Product<'static>>,
}

impl Fixture {
    /// Load a bundled fixture set by name.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::UnknownSet`]: no bundled set has this name.
    /// - Any parse error from the set's YAML or price/percentage strings.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let sets = builtin_sets();

        let (stars_yaml, catalog_yaml) = sets
            .get(name)
            .ok_or_else(|| FixtureError::UnknownSet(name.to_string()))?;

        Ok(Self {
            star_packages: star_packages_from_str(stars_yaml)?,
            products: products_from_str(catalog_yaml)?,
        })
    }

    /// The stars-page master list, in card display order.
    #[must_use]
    pub fn star_packages(&self) -> &[StarPackage<'static>] {
        &self.star_packages
    }

    /// The catalog-page master list, in master list order.
    #[must_use]
    pub fn products(&self) -> &[Product<'static>] {
        &self.products
    }

    /// Build a fresh catalog page over this fixture's product list.
    #[must_use]
    pub fn catalog_page(&self) -> CatalogPage<'static> {
        CatalogPage::new(self.products.clone(), RUB)
    }
}

/// Bundled fixture sets by name.
fn builtin_sets() -> FxHashMap<&'static str, (&'static str, &'static str)> {
    let mut sets = FxHashMap::default();
    sets.insert("storefront", (STARS_SET, CATALOG_SET));

    sets
}

/// Parse the stars-page master list from YAML.
///
/// # Errors
///
/// Returns a [`FixtureError`] on malformed YAML or entry data.
pub fn star_packages_from_str(yaml: &str) -> Result<Vec<StarPackage<'static>>, FixtureError> {
    let fixture: StarsFixture = serde_norway::from_str(yaml)?;

    fixture
        .packages
        .into_iter()
        .map(StarPackage::try_from)
        .collect()
}

/// Parse the catalog-page master list from YAML.
///
/// # Errors
///
/// Returns a [`FixtureError`] on malformed YAML or entry data.
pub fn products_from_str(yaml: &str) -> Result<Vec<Product<'static>>, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect()
}

/// Parse a price string (e.g. "650 RUB") into minor units and currency.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code is
/// not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    // The storefront deals in rubles only.
    let currency = match *currency_code {
        "RUB" => RUB,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

/// Parse a percentage string (e.g. "25%" or "0.25") into a `Percentage`.
///
/// # Errors
///
/// Returns an error if the string cannot be parsed.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let value = percent_str
            .trim()
            .parse::<f64>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value / 100.0))
    } else {
        let value = trimmed
            .parse::<f64>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value))
    }
}

/// Build optional promo display data from an entry's optional fields.
///
/// Both halves must be present together; a lone original price or lone
/// discount is a data error.
fn parse_promo(
    entry_name: &str,
    original_price: Option<&str>,
    discount: Option<&str>,
) -> Result<Option<Promo<'static>>, FixtureError> {
    match (original_price, discount) {
        (Some(price), Some(percent)) => {
            let (minor_units, currency) = parse_price(price)?;

            Ok(Some(Promo::new(
                Money::from_minor(minor_units, currency),
                parse_percentage(percent)?,
            )))
        }
        (None, None) => Ok(None),
        _ => Err(FixtureError::IncompletePromo(entry_name.to_string())),
    }
}
