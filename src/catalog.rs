//! Catalog Page
//!
//! View state of the product catalog page: the immutable master list, the
//! transient filter criteria, and the sort selector shown in the filter panel.

use rusty_money::iso::Currency;

use crate::{
    filter::{FilterCriteria, apply_filters},
    products::Product,
};

/// Entries of the sort-order selector.
///
/// The selector is display-only: the original page ships it with no handler
/// wired up, so no ordering is ever applied. Reproduced as-is rather than
/// inventing sort semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// "По умолчанию" — the master list order.
    #[default]
    Default,

    /// "Сначала дешевле".
    PriceAscending,

    /// "Сначала дороже".
    PriceDescending,
}

impl SortOrder {
    /// Label shown in the selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Default => "По умолчанию",
            SortOrder::PriceAscending => "Сначала дешевле",
            SortOrder::PriceDescending => "Сначала дороже",
        }
    }
}

/// The list a filtered catalog page displays.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView<'b, 'a> {
    /// Products matching the current criteria, in master-list order.
    Results(Vec<&'b Product<'a>>),

    /// No product matched; the page shows a banner with a reset action.
    NoResults,
}

impl<'b, 'a> CatalogView<'b, 'a> {
    /// Matched products, or an empty slice for the no-results state.
    #[must_use]
    pub fn products(&self) -> &[&'b Product<'a>] {
        match self {
            CatalogView::Results(products) => products,
            CatalogView::NoResults => &[],
        }
    }

    /// Whether this is the no-results state.
    #[must_use]
    pub fn is_no_results(&self) -> bool {
        matches!(self, CatalogView::NoResults)
    }
}

/// The product catalog page.
///
/// Owns the master list for the session. All state transitions happen
/// synchronously inside the caller's event handling; there is nothing to
/// clean up when the page is dropped.
#[derive(Debug)]
pub struct CatalogPage<'a> {
    products: Vec<Product<'a>>,
    criteria: FilterCriteria<'a>,
    sort_order: SortOrder,
}

impl<'a> CatalogPage<'a> {
    /// Create a catalog page over an immutable master product list.
    #[must_use]
    pub fn new(products: Vec<Product<'a>>, currency: &'static Currency) -> Self {
        Self {
            products,
            criteria: FilterCriteria::permissive(currency),
            sort_order: SortOrder::default(),
        }
    }

    /// The immutable master product list.
    #[must_use]
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// Current filter criteria.
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria<'a> {
        &self.criteria
    }

    /// Mutable access to the filter criteria, for the filter panel bindings.
    pub fn criteria_mut(&mut self) -> &mut FilterCriteria<'a> {
        &mut self.criteria
    }

    /// Currently selected sort order. Display-only; never applied.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Select a sort order in the panel. Has no effect on the view.
    pub fn select_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Apply the current criteria and return the view to display.
    ///
    /// Re-applying unchanged criteria yields the same view; an empty match
    /// set yields the distinct [`CatalogView::NoResults`] state.
    #[must_use]
    pub fn view(&self) -> CatalogView<'_, 'a> {
        let filtered = apply_filters(&self.products, &self.criteria);

        if filtered.is_empty() {
            CatalogView::NoResults
        } else {
            CatalogView::Results(filtered)
        }
    }

    /// The one-click reset action of the no-results banner: restores default
    /// criteria, so the next view shows the full master list.
    pub fn reset_filters(&mut self) {
        self.criteria.reset();

        tracing::debug!("catalog filters reset to defaults");
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::RUB};

    use crate::{products::ProductId, sizes::SizeList};

    use super::*;

    fn test_products<'a>() -> Vec<Product<'a>> {
        vec![
            Product::new(
                ProductId(1),
                "Премиум модель",
                Money::from_major(2999, RUB),
                None,
                "/img/1.jpg",
                "Обувь",
                SizeList::from_strs(&["40", "41"]),
                true,
            ),
            Product::new(
                ProductId(2),
                "Классика",
                Money::from_major(2499, RUB),
                None,
                "/img/2.jpg",
                "Обувь",
                SizeList::from_strs(&["42"]),
                false,
            ),
            Product::new(
                ProductId(3),
                "Базовая модель",
                Money::from_major(1999, RUB),
                None,
                "/img/3.jpg",
                "Одежда",
                SizeList::from_strs(&["S", "M"]),
                true,
            ),
        ]
    }

    #[test]
    fn default_view_is_full_master_list_in_order() {
        let page = CatalogPage::new(test_products(), RUB);

        let view = page.view();
        let ids: Vec<ProductId> = view.products().iter().map(|p| p.id()).collect();

        assert_eq!(ids, vec![ProductId(1), ProductId(2), ProductId(3)]);
    }

    #[test]
    fn empty_match_yields_no_results_state() {
        let mut page = CatalogPage::new(test_products(), RUB);
        page.criteria_mut().query = "несуществующий".to_string();

        assert!(page.view().is_no_results());
        assert!(page.view().products().is_empty());
    }

    #[test]
    fn reset_restores_full_list_after_no_results() {
        let mut page = CatalogPage::new(test_products(), RUB);
        page.criteria_mut().query = "несуществующий".to_string();
        assert!(page.view().is_no_results());

        page.reset_filters();

        assert_eq!(page.view().products().len(), 3);
    }

    #[test]
    fn sort_selection_does_not_change_the_view() {
        let mut page = CatalogPage::new(test_products(), RUB);

        let before: Vec<ProductId> = page.view().products().iter().map(|p| p.id()).collect();
        page.select_sort_order(SortOrder::PriceAscending);
        let after: Vec<ProductId> = page.view().products().iter().map(|p| p.id()).collect();

        assert_eq!(page.sort_order(), SortOrder::PriceAscending);
        assert_eq!(before, after);
    }

    #[test]
    fn view_does_not_mutate_master_list() {
        let mut page = CatalogPage::new(test_products(), RUB);
        page.criteria_mut().stock_only = true;

        let _ = page.view();

        assert_eq!(page.products().len(), 3);
    }
}
