//! Review table analysis.
//!
//! The analyzer is a pure function over the in-memory review table:
//! [`analyze_category`] produces one [`CategoryReport`] per non-empty
//! category, and [`analyze_all`] runs it across every category in the order
//! the table first mentions them. No I/O, no shared state, no mutation.

pub mod category;
pub mod reports;

pub use category::{EXCERPT_LIMIT, TOP_PRODUCT_LIMIT, analyze_category};
pub use reports::{CategoryReport, RatingCount, SentimentCount, TopProduct, WorstProduct};

use crate::dataset::ReviewRecord;

/// Distinct categories in first-seen table order.
///
/// This is the order the rendered report presents categories in; no other
/// cross-category ordering guarantee exists.
pub fn category_order(records: &[ReviewRecord]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    for record in records {
        if !order.iter().any(|c| c == &record.category) {
            order.push(record.category.clone());
        }
    }
    order
}

/// Analyze every category present in the table.
///
/// Categories are visited in first-seen order; empty results never occur
/// here since only categories present in the table are visited.
#[tracing::instrument(skip_all, fields(records = records.len()))]
pub fn analyze_all(records: &[ReviewRecord]) -> Vec<CategoryReport> {
    category_order(records)
        .iter()
        .filter_map(|category| analyze_category(records, category))
        .collect()
}
