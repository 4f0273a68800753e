//! Per-category analysis: product ranking, excerpt selection, distributions.
//!
//! This is the one place selection policy lives: how many products rank,
//! how many excerpts each gets, and how ties resolve. Everything downstream
//! only formats what this module computes.

use std::cmp::Ordering;

use crate::dataset::ReviewRecord;

use super::reports::{CategoryReport, RatingCount, SentimentCount, TopProduct, WorstProduct};

/// Maximum number of top-ranked products per category.
pub const TOP_PRODUCT_LIMIT: usize = 3;

/// Maximum number of excerpt summaries per product.
pub const EXCERPT_LIMIT: usize = 5;

/// Sentiment label that feeds top-product excerpts.
const POSITIVE: &str = "Positive";

/// Sentiment label that feeds worst-product excerpts.
const NEGATIVE: &str = "Negative";

/// Per-product aggregate within one category, in first-seen order.
#[derive(Clone)]
struct ProductStats {
    name: String,
    mean_rating: f64,
}

/// Analyze one category of the review table.
///
/// Filters `records` to rows whose category equals `category` and computes
/// the full [`CategoryReport`]: counts, mean rating, ranked top products
/// with positive excerpts, the single worst product with negative excerpts,
/// and the two chart distributions.
///
/// Returns `None` when no row matches. An empty category is valid input,
/// not an error, and the renderer skips it entirely.
///
/// Ranking contract: sorts are stable, so products with equal mean ratings
/// keep their first-seen order. The worst product is ranked independently
/// by an ascending sort; in a category with fewer than 4 distinct products
/// it may also appear among the top products.
#[tracing::instrument(skip(records), fields(total_records = records.len()))]
pub fn analyze_category(records: &[ReviewRecord], category: &str) -> Option<CategoryReport> {
    let subset: Vec<&ReviewRecord> = records.iter().filter(|r| r.category == category).collect();
    if subset.is_empty() {
        return None;
    }

    let products = product_stats(&subset);

    let mut descending = products.clone();
    descending.sort_by(|a, b| {
        b.mean_rating
            .partial_cmp(&a.mean_rating)
            .unwrap_or(Ordering::Equal)
    });
    let top_products = descending
        .iter()
        .take(TOP_PRODUCT_LIMIT)
        .map(|p| TopProduct {
            name: p.name.clone(),
            rating: p.mean_rating,
            positive_summaries: excerpts(&subset, &p.name, POSITIVE),
        })
        .collect();

    let mut ascending = products;
    ascending.sort_by(|a, b| {
        a.mean_rating
            .partial_cmp(&b.mean_rating)
            .unwrap_or(Ordering::Equal)
    });
    let worst_product = ascending.first().map(|p| WorstProduct {
        name: p.name.clone(),
        rating: p.mean_rating,
        improvement_summaries: excerpts(&subset, &p.name, NEGATIVE),
    });

    let review_count = subset.len();
    let avg_rating = subset.iter().map(|r| r.rating).sum::<f64>() / review_count as f64;

    Some(CategoryReport {
        category: category.to_string(),
        product_count: ascending.len(),
        review_count,
        avg_rating,
        top_products,
        worst_product,
        sentiment_distribution: sentiment_counts(&subset),
        rating_distribution: rating_counts(&subset),
    })
}

/// Group the subset by product name (first-seen order) and average ratings.
fn product_stats(subset: &[&ReviewRecord]) -> Vec<ProductStats> {
    let mut totals: Vec<(String, f64, usize)> = Vec::new();
    for record in subset {
        match totals.iter_mut().find(|(name, ..)| *name == record.product) {
            Some((_, sum, count)) => {
                *sum += record.rating;
                *count += 1;
            }
            None => totals.push((record.product.clone(), record.rating, 1)),
        }
    }
    totals
        .into_iter()
        .map(|(name, sum, count)| ProductStats {
            name,
            mean_rating: sum / count as f64,
        })
        .collect()
}

/// First `EXCERPT_LIMIT` non-empty summaries for a product with the given
/// sentiment, in original table order. No re-ranking by quality or length.
fn excerpts(subset: &[&ReviewRecord], product: &str, sentiment: &str) -> Vec<String> {
    subset
        .iter()
        .filter(|r| r.product == product && r.sentiment == sentiment)
        .filter_map(|r| r.summary_text())
        .take(EXCERPT_LIMIT)
        .map(str::to_string)
        .collect()
}

/// Count rows per sentiment label, ordered by descending count.
/// Labels tied on count keep first-seen order.
fn sentiment_counts(subset: &[&ReviewRecord]) -> Vec<SentimentCount> {
    let mut counts: Vec<SentimentCount> = Vec::new();
    for record in subset {
        match counts.iter_mut().find(|c| c.sentiment == record.sentiment) {
            Some(c) => c.count += 1,
            None => counts.push(SentimentCount {
                sentiment: record.sentiment.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Count rows per rating value, keys in ascending numeric order.
fn rating_counts(subset: &[&ReviewRecord]) -> Vec<RatingCount> {
    let mut counts: Vec<RatingCount> = Vec::new();
    for record in subset {
        match counts.iter_mut().find(|c| c.rating == record.rating) {
            Some(c) => c.count += 1,
            None => counts.push(RatingCount {
                rating: record.rating,
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal));
    counts
}
