//! Smart Search Engine
//!
//! Pure filter/sort recomputation over the product catalog. The view derives
//! its list from (query, filters, sort) via a `Memo`; nothing here mutates
//! the catalog.

use chrono::NaiveDate;

use crate::models::{CharityIssue, Product, ProductStyle, ProductType};

/// Sort order for the product grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first (default)
    #[default]
    DateDesc,
    SalesDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::DateDesc,
        SortKey::SalesDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    /// Value attribute used by the sort `<select>`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date_desc",
            SortKey::SalesDesc => "sales_desc",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
        }
    }

    pub fn from_str(value: &str) -> SortKey {
        match value {
            "sales_desc" => SortKey::SalesDesc,
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            _ => SortKey::DateDesc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "最新上架",
            SortKey::SalesDesc => "熱銷排行",
            SortKey::PriceAsc => "價格由低到高",
            SortKey::PriceDesc => "價格由高到低",
        }
    }
}

/// Three independent multi-select filter sets. An empty set imposes no
/// constraint on its category; non-empty sets are ANDed across categories.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFilters {
    pub types: Vec<ProductType>,
    pub styles: Vec<ProductStyle>,
    pub issues: Vec<CharityIssue>,
}

impl ProductFilters {
    /// Flip membership of `value` in the type set; other categories untouched
    pub fn toggle_type(&mut self, value: ProductType) {
        toggle(&mut self.types, value);
    }

    pub fn toggle_style(&mut self, value: ProductStyle) {
        toggle(&mut self.styles, value);
    }

    pub fn toggle_issue(&mut self, value: CharityIssue) {
        toggle(&mut self.issues, value);
    }

    fn matches(&self, product: &Product) -> bool {
        (self.types.is_empty() || self.types.contains(&product.product_type))
            && (self.styles.is_empty() || self.styles.contains(&product.style))
            && (self.issues.is_empty() || self.issues.contains(&product.issue))
    }
}

fn toggle<T: PartialEq>(set: &mut Vec<T>, value: T) {
    if let Some(pos) = set.iter().position(|v| *v == value) {
        set.remove(pos);
    } else {
        set.push(value);
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Apply query, filter sets, and sort order to the catalog. Query matches
/// case-insensitively against name OR organization. Sorts are stable, so
/// ties keep their prior relative order.
pub fn filter_and_sort(
    products: &[Product],
    query: &str,
    filters: &ProductFilters,
    sort: SortKey,
) -> Vec<Product> {
    let needle = query.to_lowercase();
    let mut results: Vec<Product> = products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.organization.to_lowercase().contains(&needle)
        })
        .filter(|p| filters.matches(p))
        .cloned()
        .collect();

    match sort {
        SortKey::DateDesc => {
            // unparsable dates sort last
            results.sort_by(|a, b| parse_date(&b.date_added).cmp(&parse_date(&a.date_added)));
        }
        SortKey::SalesDesc => results.sort_by(|a, b| b.sales.cmp(&a.sales)),
        SortKey::PriceAsc => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => results.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    results
}
