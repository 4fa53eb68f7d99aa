//! In-process search over the full catalog, used when the product index is
//! unreachable. Filter, then sort, then paginate.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use icu_collator::{Collator, CollatorOptions};

use crate::domain::product::Product;
use crate::domain::search::{SearchRequest, SearchResult, SortKey};
use crate::pagination::{page_slice, total_pages};

/// Runs `request` against `catalog` and returns the requested page.
pub fn search_catalog(catalog: Vec<Product>, request: &SearchRequest) -> SearchResult {
    let mut products = filter_products(catalog, request);
    sort_products(&mut products, request.sort);

    let total = products.len();
    SearchResult {
        items: page_slice(products, request.page, request.limit),
        total,
        page: request.page,
        total_pages: total_pages(total, request.limit),
        limit: request.limit,
        ..SearchResult::default()
    }
}

/// Keeps the products that match the text query and every active filter,
/// preserving catalog order.
pub fn filter_products(catalog: Vec<Product>, request: &SearchRequest) -> Vec<Product> {
    let terms = request.terms();
    let category = request.category.as_deref().map(str::to_lowercase);

    catalog
        .into_iter()
        .filter(|product| {
            let text = product.searchable_text();
            terms.iter().any(|term| text.contains(term.as_str()))
        })
        .filter(|product| match &category {
            Some(wanted) => product
                .category
                .as_deref()
                .is_some_and(|category| category.to_lowercase() == *wanted),
            None => true,
        })
        .filter(|product| {
            request
                .min_price
                .is_none_or(|min| product.effective_price() >= min)
        })
        .filter(|product| {
            request
                .max_price
                .is_none_or(|max| product.effective_price() <= max)
        })
        .filter(|product| !request.in_stock || product.effective_stock() > 0)
        .collect()
}

/// Stable sort by `sort`; [`SortKey::Relevance`] keeps the current order.
pub fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::Relevance => {}
        SortKey::PriceAsc => {
            products.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()))
        }
        SortKey::PriceDesc => {
            products.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()))
        }
        SortKey::NameAsc => sort_by_name(products, false),
        SortKey::NameDesc => sort_by_name(products, true),
        SortKey::Newest => products.sort_by(|a, b| created_at(b).cmp(&created_at(a))),
        SortKey::Popularity => products
            .sort_by(|a, b| b.sales_count.unwrap_or(0).cmp(&a.sales_count.unwrap_or(0))),
        SortKey::Rating => products.sort_by(|a, b| {
            b.rating_average
                .unwrap_or(0.0)
                .total_cmp(&a.rating_average.unwrap_or(0.0))
        }),
    }
}

fn created_at(product: &Product) -> DateTime<Utc> {
    product.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Orders by `name` using root-locale collation: accents sort next to their
/// base letter and, on a case-only difference, lowercase comes first.
fn sort_by_name(products: &mut [Product], descending: bool) {
    let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => collator,
        Err(err) => {
            log::warn!("Name collation unavailable, sorting by code point: {err}");
            products.sort_by(|a, b| directed(a.name.cmp(&b.name), descending));
            return;
        }
    };

    products.sort_by(|a, b| directed(collator.compare(&a.name, &b.name), descending));
}

fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}
