//! Products
//!
//! The master catalog entries for the product page. Defined once at startup
//! and never mutated; filtering only ever produces a derived view over them.

use rusty_money::{Money, iso::Currency};

use crate::{promo::Promo, sizes::SizeList};

/// Unique identifier of a catalog product, taken from the catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

/// A catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    id: ProductId,

    /// Display name shown on the card.
    name: String,

    /// Product price.
    price: Money<'a, Currency>,

    /// Optional strike-through price and discount badge.
    promo: Option<Promo<'a>>,

    /// Opaque path to the card image; never validated or loaded here.
    image: String,

    /// Category tag, matched case-sensitively by the filter panel.
    category: String,

    /// Available sizes in display order.
    sizes: SizeList,

    /// Whether the product is currently in stock.
    in_stock: bool,
}

impl<'a> Product<'a> {
    /// Create a catalog product entry.
    #[expect(clippy::too_many_arguments, reason = "plain record constructor")]
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        promo: Option<Promo<'a>>,
        image: impl Into<String>,
        category: impl Into<String>,
        sizes: SizeList,
        in_stock: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            promo,
            image: image.into(),
            category: category.into(),
            sizes,
            in_stock,
        }
    }

    /// Product identifier.
    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product price.
    #[must_use]
    pub fn price(&self) -> Money<'a, Currency> {
        self.price
    }

    /// Promotional display data, if the product is advertised with one.
    #[must_use]
    pub fn promo(&self) -> Option<&Promo<'a>> {
        self.promo.as_ref()
    }

    /// Opaque image path for the card.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Category tag.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Available sizes in display order.
    #[must_use]
    pub fn sizes(&self) -> &SizeList {
        &self.sizes
    }

    /// Whether the product is currently in stock.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}
