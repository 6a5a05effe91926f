//! Rendering
//!
//! Console renderers for both storefront pages. The interactive page is the
//! only external surface of the system, so these writers are its stand-in:
//! package cards and the filtered catalog, written to any `io::Write`.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    catalog::{CatalogPage, CatalogView},
    packages::StarPackage,
    products::Product,
    promo::Promo,
};

/// Errors that can occur while writing a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Write the stars-page package cards as a table.
///
/// # Errors
///
/// Returns a [`RenderError`] if the table cannot be written.
pub fn write_star_page(
    mut out: impl io::Write,
    packages: &[StarPackage<'_>],
) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record([
        "",
        "Пакет",
        "Звёзд",
        "Цена",
        "Старая цена",
        "Скидка",
        "За звезду",
        "Описание",
    ]);

    for package in packages {
        let marker = if package.popular() { "🔥" } else { "" };

        let (original, badge) = package
            .promo()
            .map_or((String::new(), String::new()), |promo| {
                (format!("{}", promo.original_price()), promo.badge())
            });

        builder.push_record([
            marker.to_string(),
            package.name().to_string(),
            package.stars().to_string(),
            format!("{}", package.price()),
            original,
            badge,
            format!("{}₽", package.rate_per_star()),
            package.description().to_string(),
        ]);
    }

    write_table(&mut out, builder)
}

/// Write the catalog page: the filter panel summary, the decorative sort
/// selector, and either the filtered product table or the no-results banner.
///
/// # Errors
///
/// Returns a [`RenderError`] if the page cannot be written.
pub fn write_catalog_page(
    mut out: impl io::Write,
    page: &CatalogPage<'_>,
) -> Result<(), RenderError> {
    write_filter_panel(&mut out, page)?;

    match page.view() {
        CatalogView::Results(products) => write_product_table(&mut out, &products),
        CatalogView::NoResults => {
            writeln!(out, "\nНичего не найдено. [Сбросить фильтры]").map_err(|_err| RenderError::IO)
        }
    }
}

/// Write the filter panel summary line and the sort selector.
fn write_filter_panel(
    out: &mut impl io::Write,
    page: &CatalogPage<'_>,
) -> Result<(), RenderError> {
    let criteria = page.criteria();

    let mut active: Vec<String> = Vec::new();

    if let Some(size) = criteria.size.as_deref() {
        active.push(format!("размер {size}"));
    }

    if let Some(category) = criteria.category.as_deref() {
        active.push(format!("категория {category}"));
    }

    if !criteria.query.is_empty() {
        active.push(format!("поиск \"{}\"", criteria.query));
    }

    if criteria.stock_only {
        active.push("только в наличии".to_string());
    }

    let summary = if active.is_empty() {
        "без фильтров".to_string()
    } else {
        active.join(", ")
    };

    writeln!(out, "Фильтры: {summary}").map_err(|_err| RenderError::IO)?;

    // The selector is shown but its choice never reorders the table.
    writeln!(out, "Сортировка: {}", page.sort_order().label()).map_err(|_err| RenderError::IO)
}

/// Write the filtered products as a table.
fn write_product_table(
    out: &mut impl io::Write,
    products: &[&Product<'_>],
) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record(["Товар", "Категория", "Размеры", "Цена", "Скидка", "Наличие"]);

    for product in products {
        let badge = product.promo().map_or(String::new(), Promo::badge);

        let stock = if product.in_stock() {
            "В наличии"
        } else {
            "Нет в наличии"
        };

        builder.push_record([
            product.name().to_string(),
            product.category().to_string(),
            product.sizes().join(", "),
            format!("{}", product.price()),
            badge,
            stock.to_string(),
        ]);
    }

    write_table(out, builder)
}

/// Build and write a table in the storefront style.
fn write_table(out: &mut impl io::Write, builder: Builder) -> Result<(), RenderError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..5), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| RenderError::IO)
}
