//! Report structs for per-category review analysis.
//!
//! All structs derive `Serialize` and `Deserialize` for use in CLI JSON
//! output. Values are computed once per run and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Full analysis for one product category.
///
/// Produced by [`analyze_category`](super::analyze_category) when the
/// category has at least one review row. Mean ratings are kept unrounded;
/// one-decimal formatting happens at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    /// Category identifier (the raw `product_category` value).
    pub category: String,
    /// Number of distinct product names in the category.
    pub product_count: usize,
    /// Number of review rows in the category.
    pub review_count: usize,
    /// Mean rating across every review in the category.
    pub avg_rating: f64,
    /// Up to 3 products ranked by descending mean rating.
    pub top_products: Vec<TopProduct>,
    /// The single lowest-rated product, when the category has any products.
    ///
    /// With fewer than 4 distinct products this may repeat an entry from
    /// `top_products`; that overlap is intentional and not deduplicated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_product: Option<WorstProduct>,
    /// Review counts per sentiment label, ordered by descending count.
    pub sentiment_distribution: Vec<SentimentCount>,
    /// Review counts per rating value, ordered by ascending rating.
    pub rating_distribution: Vec<RatingCount>,
}

/// A top-ranked product with its positive review excerpts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    /// Product name.
    pub name: String,
    /// Mean rating of this product within the category.
    pub rating: f64,
    /// Up to 5 non-empty summaries from Positive-sentiment reviews,
    /// in original table order. Empty when the product has none.
    pub positive_summaries: Vec<String>,
}

/// The lowest-rated product with its negative review excerpts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorstProduct {
    /// Product name.
    pub name: String,
    /// Mean rating of this product within the category.
    pub rating: f64,
    /// Up to 5 non-empty summaries from Negative-sentiment reviews,
    /// in original table order. Empty when the product has none.
    pub improvement_summaries: Vec<String>,
}

/// A sentiment label with its review count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCount {
    /// The sentiment label as it appears in the input.
    pub sentiment: String,
    /// Number of reviews carrying this label.
    pub count: usize,
}

/// A rating value with its review count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCount {
    /// The rating value as it appears in the input.
    pub rating: f64,
    /// Number of reviews with this rating.
    pub count: usize,
}
