//! Filter Pipeline
//!
//! The conjunctive predicate chain of the catalog page: five independent
//! boolean predicates over a product, combined with logical AND. The pipeline
//! is a pure function over the immutable master list; it never mutates or
//! reorders the source.

use rusty_money::{Money, iso::Currency};

use crate::products::Product;

/// Transient filter state of the catalog page.
///
/// All fields default to permissive values, so a freshly-reset criteria record
/// matches every product. The record is plain UI state: mutated by the filter
/// panel, consumed synchronously by [`apply_filters`], never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria<'a> {
    /// Selected size, or `None` for "any size".
    pub size: Option<String>,

    /// Selected category, or `None` for "any category". Matched case-sensitively.
    pub category: Option<String>,

    /// Lower price bound, inclusive.
    pub price_min: Money<'a, Currency>,

    /// Upper price bound, inclusive.
    pub price_max: Money<'a, Currency>,

    /// Free-text query, matched case-insensitively against product names.
    pub query: String,

    /// When set, only in-stock products pass.
    pub stock_only: bool,
}

impl<'a> FilterCriteria<'a> {
    /// Create criteria with all fields at their "no filter" defaults.
    #[must_use]
    pub fn permissive(currency: &'a Currency) -> Self {
        Self {
            size: None,
            category: None,
            price_min: Money::from_minor(0, currency),
            price_max: Money::from_minor(i64::MAX, currency),
            query: String::new(),
            stock_only: false,
        }
    }

    /// Restore every field to its "no filter" default.
    pub fn reset(&mut self) {
        *self = Self::permissive(self.price_min.currency());
    }

    /// Whether every field is at its "no filter" default.
    #[must_use]
    pub fn is_permissive(&self) -> bool {
        *self == Self::permissive(self.price_min.currency())
    }

    /// Size membership: passes when no size is selected or the product offers
    /// the selected size.
    #[must_use]
    pub fn matches_size(&self, product: &Product<'a>) -> bool {
        self.size
            .as_deref()
            .is_none_or(|size| product.sizes().contains(size))
    }

    /// Category equality: passes when no category is selected or the product
    /// category equals it exactly (case-sensitive).
    #[must_use]
    pub fn matches_category(&self, product: &Product<'a>) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| product.category() == category)
    }

    /// Price range: passes when the product price lies within the bounds,
    /// inclusive at both ends.
    #[must_use]
    pub fn matches_price(&self, product: &Product<'a>) -> bool {
        let price = product.price().to_minor_units();

        self.price_min.to_minor_units() <= price && price <= self.price_max.to_minor_units()
    }

    /// Text search: passes when the query is empty or the case-folded product
    /// name contains the case-folded query as a substring.
    #[must_use]
    pub fn matches_query(&self, product: &Product<'a>) -> bool {
        if self.query.is_empty() {
            return true;
        }

        product
            .name()
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    /// Stock flag: passes when the stock-only toggle is off or the product is
    /// in stock.
    #[must_use]
    pub fn matches_stock(&self, product: &Product<'a>) -> bool {
        !self.stock_only || product.in_stock()
    }

    /// Whether the product satisfies all five predicates.
    #[must_use]
    pub fn matches(&self, product: &Product<'a>) -> bool {
        self.matches_size(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && self.matches_query(product)
            && self.matches_stock(product)
    }
}

/// Apply the filter criteria to the master product list.
///
/// Pure and deterministic: the result preserves the relative order of the
/// master list, and applying identical criteria twice yields identical sets.
#[must_use]
pub fn apply_filters<'b, 'a>(
    products: &'b [Product<'a>],
    criteria: &FilterCriteria<'a>,
) -> Vec<&'b Product<'a>> {
    let filtered: Vec<&Product<'a>> = products
        .iter()
        .filter(|product| criteria.matches(product))
        .collect();

    tracing::debug!(
        total = products.len(),
        kept = filtered.len(),
        "applied catalog filters"
    );

    filtered
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::RUB;

    use crate::{products::ProductId, sizes::SizeList};

    use super::*;

    fn product<'a>(name: &str, price_major: i64, category: &str, in_stock: bool) -> Product<'a> {
        Product::new(
            ProductId(0),
            name,
            Money::from_major(price_major, RUB),
            None,
            "/img/test.jpg",
            category,
            SizeList::from_strs(&["S", "M", "L"]),
            in_stock,
        )
    }

    #[test]
    fn permissive_criteria_match_everything() {
        let criteria = FilterCriteria::permissive(RUB);
        let candidate = product("Кроссовки", 2999, "Обувь", false);

        assert!(criteria.is_permissive());
        assert!(criteria.matches(&candidate));
    }

    #[test]
    fn size_predicate_requires_membership() {
        let mut criteria = FilterCriteria::permissive(RUB);
        criteria.size = Some("M".to_string());

        assert!(criteria.matches_size(&product("А", 100, "X", true)));

        criteria.size = Some("XXL".to_string());

        assert!(!criteria.matches_size(&product("А", 100, "X", true)));
    }

    #[test]
    fn category_predicate_is_case_sensitive() {
        let mut criteria = FilterCriteria::permissive(RUB);
        criteria.category = Some("Обувь".to_string());

        assert!(criteria.matches_category(&product("А", 100, "Обувь", true)));
        assert!(!criteria.matches_category(&product("А", 100, "обувь", true)));
    }

    #[test]
    fn price_predicate_is_inclusive_at_both_bounds() {
        let mut criteria = FilterCriteria::permissive(RUB);
        criteria.price_min = Money::from_major(1999, RUB);
        criteria.price_max = Money::from_major(2999, RUB);

        assert!(criteria.matches_price(&product("А", 1999, "X", true)));
        assert!(criteria.matches_price(&product("А", 2999, "X", true)));
        assert!(!criteria.matches_price(&product("А", 1998, "X", true)));
        assert!(!criteria.matches_price(&product("А", 3000, "X", true)));
    }

    #[test]
    fn query_predicate_is_case_insensitive_substring() {
        let mut criteria = FilterCriteria::permissive(RUB);
        criteria.query = "прем".to_string();

        assert!(criteria.matches_query(&product("Премиум модель", 100, "X", true)));
        assert!(!criteria.matches_query(&product("Базовая модель", 100, "X", true)));
    }

    #[test]
    fn stock_predicate_passes_everything_when_off() {
        let criteria = FilterCriteria::permissive(RUB);

        assert!(criteria.matches_stock(&product("А", 100, "X", false)));
    }

    #[test]
    fn stock_predicate_drops_out_of_stock_when_on() {
        let mut criteria = FilterCriteria::permissive(RUB);
        criteria.stock_only = true;

        assert!(criteria.matches_stock(&product("А", 100, "X", true)));
        assert!(!criteria.matches_stock(&product("А", 100, "X", false)));
    }

    #[test]
    fn apply_filters_preserves_master_order() {
        let products = [
            product("Первый", 2999, "X", true),
            product("Второй", 2499, "X", false),
            product("Третий", 1999, "X", true),
        ];

        let mut criteria = FilterCriteria::permissive(RUB);
        criteria.stock_only = true;

        let names: Vec<&str> = apply_filters(&products, &criteria)
            .iter()
            .map(|p| p.name())
            .collect();

        assert_eq!(names, vec!["Первый", "Третий"]);
    }

    #[test]
    fn apply_filters_is_idempotent() {
        let products = [
            product("Первый", 2999, "X", true),
            product("Второй", 2499, "X", false),
        ];

        let mut criteria = FilterCriteria::permissive(RUB);
        criteria.query = "перв".to_string();

        let first = apply_filters(&products, &criteria);
        let second = apply_filters(&products, &criteria);

        assert_eq!(first, second);
    }

    #[test]
    fn reset_works_behind_a_generic_lifetime() {
        // Criteria borrow their currency for 'a, not 'static; reset must be
        // callable from contexts that only know the generic lifetime.
        fn reset_any(criteria: &mut FilterCriteria<'_>) {
            criteria.reset();
        }

        let mut criteria = FilterCriteria::permissive(RUB);
        criteria.stock_only = true;

        reset_any(&mut criteria);

        assert!(criteria.is_permissive());
    }

    #[test]
    fn reset_restores_permissive_defaults() {
        let mut criteria = FilterCriteria::permissive(RUB);
        criteria.size = Some("M".to_string());
        criteria.query = "кросс".to_string();
        criteria.stock_only = true;

        criteria.reset();

        assert!(criteria.is_permissive());
    }
}
