//! Star Packages
//!
//! The master catalog entries for the stars page: fixed bundles of Telegram
//! Stars at a fixed price. Defined once at startup and never mutated.

use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::promo::Promo;

/// Unique identifier of a star package, taken from the catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(pub u32);

/// A purchasable bundle of Telegram Stars.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPackage<'a> {
    id: PackageId,

    /// Display name shown on the card, e.g. "Популярный".
    name: String,

    /// Number of stars delivered by this package.
    stars: u32,

    /// Price of the package.
    price: Money<'a, Currency>,

    /// Optional strike-through price and discount badge.
    promo: Option<Promo<'a>>,

    /// Whether the card gets the "popular" highlight ring.
    popular: bool,

    /// Opaque path to the card image; never validated or loaded here.
    image: String,

    /// Short marketing line under the card title.
    description: String,
}

impl<'a> StarPackage<'a> {
    /// Create a star package catalog entry.
    #[expect(clippy::too_many_arguments, reason = "plain record constructor")]
    #[must_use]
    pub fn new(
        id: PackageId,
        name: impl Into<String>,
        stars: u32,
        price: Money<'a, Currency>,
        promo: Option<Promo<'a>>,
        popular: bool,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            stars,
            price,
            promo,
            popular,
            image: image.into(),
            description: description.into(),
        }
    }

    /// Package identifier.
    #[must_use]
    pub fn id(&self) -> PackageId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stars in the package.
    #[must_use]
    pub fn stars(&self) -> u32 {
        self.stars
    }

    /// Package price.
    #[must_use]
    pub fn price(&self) -> Money<'a, Currency> {
        self.price
    }

    /// Promotional display data, if the package is advertised with one.
    #[must_use]
    pub fn promo(&self) -> Option<&Promo<'a>> {
        self.promo.as_ref()
    }

    /// Whether the card gets the "popular" highlight.
    #[must_use]
    pub fn popular(&self) -> bool {
        self.popular
    }

    /// Opaque image path for the card.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Marketing line under the title.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price per single star in major units, rounded to two decimal places.
    ///
    /// Shown on the card as e.g. "1.30₽ за звезду". Returns zero for a
    /// zero-star package rather than dividing by zero.
    #[must_use]
    pub fn rate_per_star(&self) -> Decimal {
        if self.stars == 0 {
            return Decimal::ZERO;
        }

        let major = Decimal::new(self.price.to_minor_units(), self.price.currency().exponent);
        let stars = Decimal::from_u32(self.stars).unwrap_or(Decimal::ONE);

        (major / stars).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::RUB;

    use super::*;

    fn popular_package<'a>() -> StarPackage<'a> {
        StarPackage::new(
            PackageId(2),
            "Популярный",
            500,
            Money::from_major(650, RUB),
            None,
            true,
            "/img/1e601c17-90a9-4075-bf28-2990021b803f.jpg",
            "Лучшее соотношение цена/качество",
        )
    }

    #[test]
    fn accessors_return_constructor_values() {
        let package = popular_package();

        assert_eq!(package.id(), PackageId(2));
        assert_eq!(package.name(), "Популярный");
        assert_eq!(package.stars(), 500);
        assert_eq!(package.price(), Money::from_major(650, RUB));
        assert!(package.popular());
        assert!(package.promo().is_none());
    }

    #[test]
    fn rate_per_star_rounds_to_two_places() {
        let package = popular_package();

        // 650 / 500 = 1.30
        assert_eq!(package.rate_per_star(), Decimal::new(130, 2));
    }

    #[test]
    fn rate_per_star_handles_uneven_division() {
        let package = StarPackage::new(
            PackageId(4),
            "Мини",
            50,
            Money::from_major(80, RUB),
            None,
            false,
            "/img/mini.jpg",
            "Попробовать звёзды",
        );

        // 80 / 50 = 1.60
        assert_eq!(package.rate_per_star(), Decimal::new(160, 2));
    }

    #[test]
    fn rate_per_star_is_zero_for_zero_stars() {
        let package = StarPackage::new(
            PackageId(99),
            "Пустой",
            0,
            Money::from_major(10, RUB),
            None,
            false,
            "/img/none.jpg",
            "",
        );

        assert_eq!(package.rate_per_star(), Decimal::ZERO);
    }
}
