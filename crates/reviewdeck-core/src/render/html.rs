//! HTML assembly for the interactive report.
//!
//! Builds the single `index.html` document: a card grid with one hidden
//! detail section per category. All interactivity lives in the static
//! script asset; this module only produces markup from [`CategoryReport`]
//! values. Every data-derived string is escaped.

use std::collections::HashMap;

use crate::analysis::{CategoryReport, TopProduct, WorstProduct};

use super::charts::{Bar, bar_chart};

/// Bar colors for the sentiment chart, cycled across labels.
const SENTIMENT_PALETTE: &[&str] = &["#440154", "#21908c", "#fde725"];

/// Bar color for the rating chart.
const RATING_PALETTE: &[&str] = &["#87ceeb"];

/// Escape a string for safe interpolation into HTML text or attributes.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Rating values print without a trailing `.0` (5 rather than 5.0).
fn format_rating(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Render the complete `index.html` document.
///
/// Categories appear in the given order; each gets a card in the grid and a
/// hidden detail section, linked by a 1-based index (`data-category` on the
/// card, `detail-{index}` on the section). Reports are expected to already
/// exclude empty categories, so every card has a backing detail section.
#[tracing::instrument(skip_all, fields(categories = reports.len()))]
pub fn render_index(
    reports: &[CategoryReport],
    title: &str,
    category_images: &HashMap<String, String>,
) -> String {
    let cards: String = reports
        .iter()
        .enumerate()
        .map(|(i, report)| render_card(report, i + 1, category_images))
        .collect();
    let details: String = reports
        .iter()
        .enumerate()
        .map(|(i, report)| render_detail(report, i + 1))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="assets/css/style.css">
</head>
<body>
    <header>
        <div class="container">
            <h1>{title}</h1>
            <p>Interactive report of product reviews by category</p>
        </div>
    </header>

    <div class="container">
        <div class="category-grid">
{cards}        </div>

{details}    </div>

    <script src="assets/js/script.js"></script>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// One clickable card in the category grid.
fn render_card(
    report: &CategoryReport,
    index: usize,
    category_images: &HashMap<String, String>,
) -> String {
    let name = escape_html(&report.category);
    let image = category_images
        .get(&report.category)
        .filter(|url| !url.is_empty())
        .map(|url| {
            format!(
                r#"                <img src="{src}" alt="{name}" class="category-image">
"#,
                src = escape_html(url),
            )
        })
        .unwrap_or_default();

    format!(
        r#"            <div class="category-card" data-category="{index}">
{image}                <div class="category-info">
                    <h2 class="category-name">{name}</h2>
                    <div class="category-stats">
                        <div class="stat">
                            <div class="stat-value">{products}</div>
                            <div class="stat-label">Products</div>
                        </div>
                        <div class="stat">
                            <div class="stat-value">{reviews}</div>
                            <div class="stat-label">Reviews</div>
                        </div>
                        <div class="stat">
                            <div class="stat-value">{avg:.1}</div>
                            <div class="stat-label">Avg Rating</div>
                        </div>
                    </div>
                    <p>Click to view detailed analysis</p>
                </div>
            </div>
"#,
        products = report.product_count,
        reviews = report.review_count,
        avg = report.avg_rating,
    )
}

/// The hidden detail section behind one card.
fn render_detail(report: &CategoryReport, index: usize) -> String {
    let top_products: String = report.top_products.iter().map(render_top_product).collect();
    let improvement = report
        .worst_product
        .as_ref()
        .map(render_worst_product)
        .unwrap_or_default();

    let sentiment_svg = bar_chart(
        &format!("Sentiment Distribution - {}", report.category),
        &report
            .sentiment_distribution
            .iter()
            .map(|c| Bar {
                label: c.sentiment.clone(),
                value: c.count,
            })
            .collect::<Vec<_>>(),
        SENTIMENT_PALETTE,
    );
    let rating_svg = bar_chart(
        &format!("Rating Distribution - {}", report.category),
        &report
            .rating_distribution
            .iter()
            .map(|c| Bar {
                label: format_rating(c.rating),
                value: c.count,
            })
            .collect::<Vec<_>>(),
        RATING_PALETTE,
    );

    format!(
        r#"        <div id="detail-{index}" class="category-detail">
            <div class="detail-header">
                <h2>{name} Analysis</h2>
                <button class="back-button">&larr; Back to Categories</button>
            </div>

            <div class="detail-section">
                <h3>Top 3 Products</h3>
{top_products}            </div>

{improvement}            <div class="chart-container">
                <div class="chart-box">
                    <h3>Sentiment Distribution</h3>
                    {sentiment_svg}
                </div>
                <div class="chart-box">
                    <h3>Rating Distribution</h3>
                    {rating_svg}
                </div>
            </div>
        </div>
"#,
        name = escape_html(&report.category),
    )
}

fn render_top_product(product: &TopProduct) -> String {
    let summaries = if product.positive_summaries.is_empty() {
        "                    <p>No positive summaries available.</p>\n".to_string()
    } else {
        let items: String = product
            .positive_summaries
            .iter()
            .map(|s| {
                format!(
                    "                        <li class=\"summary-item\">{}</li>\n",
                    escape_html(s)
                )
            })
            .collect();
        format!(
            "                    <h5>What Customers Love:</h5>\n                    <ul class=\"summary-list\">\n{items}                    </ul>\n"
        )
    };

    format!(
        r#"                <div class="product-card">
                    <h4 class="product-name">{name}</h4>
                    <div class="product-rating">&#9733; {rating:.1}</div>
{summaries}                </div>
"#,
        name = escape_html(&product.name),
        rating = product.rating,
    )
}

fn render_worst_product(worst: &WorstProduct) -> String {
    let summaries = if worst.improvement_summaries.is_empty() {
        "                    <p>No improvement suggestions available.</p>\n".to_string()
    } else {
        let items: String = worst
            .improvement_summaries
            .iter()
            .map(|s| {
                format!(
                    "                        <li class=\"summary-item\">{}</li>\n",
                    escape_html(s)
                )
            })
            .collect();
        format!(
            "                    <h5>Suggested Improvements:</h5>\n                    <ul class=\"summary-list\">\n{items}                    </ul>\n"
        )
    };

    format!(
        r#"            <div class="detail-section">
                <h3>Areas for Improvement</h3>
                <div class="improvement-card">
                    <h4 class="product-name">{name}</h4>
                    <div class="product-rating">&#9733; {rating:.1}</div>
{summaries}                </div>
            </div>

"#,
        name = escape_html(&worst.name),
        rating = worst.rating,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{RatingCount, SentimentCount};

    fn sample_report(category: &str) -> CategoryReport {
        CategoryReport {
            category: category.to_string(),
            product_count: 2,
            review_count: 5,
            avg_rating: 3.4,
            top_products: vec![
                TopProduct {
                    name: "Echo Dot".to_string(),
                    rating: 14.0 / 3.0,
                    positive_summaries: vec!["Great sound".to_string()],
                },
                TopProduct {
                    name: "Fire Stick".to_string(),
                    rating: 1.5,
                    positive_summaries: vec![],
                },
            ],
            worst_product: Some(WorstProduct {
                name: "Fire Stick".to_string(),
                rating: 1.5,
                improvement_summaries: vec!["Remote keeps disconnecting".to_string()],
            }),
            sentiment_distribution: vec![
                SentimentCount {
                    sentiment: "Positive".to_string(),
                    count: 3,
                },
                SentimentCount {
                    sentiment: "Negative".to_string(),
                    count: 2,
                },
            ],
            rating_distribution: vec![
                RatingCount {
                    rating: 1.0,
                    count: 1,
                },
                RatingCount {
                    rating: 5.0,
                    count: 4,
                },
            ],
        }
    }

    #[test]
    fn index_links_cards_to_detail_sections() {
        let reports = vec![sample_report("Smart Home & Speakers"), sample_report("Accessories")];
        let html = render_index(&reports, "Product Review Analysis", &HashMap::new());

        assert!(html.contains("<title>Product Review Analysis</title>"));
        assert!(html.contains(r#"data-category="1""#));
        assert!(html.contains(r#"data-category="2""#));
        assert!(html.contains(r#"id="detail-1""#));
        assert!(html.contains(r#"id="detail-2""#));
        assert!(html.contains("assets/css/style.css"));
        assert!(html.contains("assets/js/script.js"));
    }

    #[test]
    fn category_names_are_escaped() {
        let reports = vec![sample_report("Audio & <Video>")];
        let html = render_index(&reports, "Report", &HashMap::new());
        assert!(html.contains("Audio &amp; &lt;Video&gt;"));
        assert!(!html.contains("Audio & <Video>"));
    }

    #[test]
    fn card_shows_aggregate_stats() {
        let html = render_card(&sample_report("Accessories"), 1, &HashMap::new());
        assert!(html.contains(">2</div>"));
        assert!(html.contains(">5</div>"));
        assert!(html.contains(">3.4</div>"));
        assert!(html.contains("Click to view detailed analysis"));
    }

    #[test]
    fn card_image_comes_from_injected_mapping() {
        let mut images = HashMap::new();
        images.insert(
            "Accessories".to_string(),
            "https://example.com/acc.jpg".to_string(),
        );
        let with_image = render_card(&sample_report("Accessories"), 1, &images);
        assert!(with_image.contains(r#"src="https://example.com/acc.jpg""#));

        // No mapping entry: card renders without an <img> tag.
        let without_image = render_card(&sample_report("Gaming"), 1, &images);
        assert!(!without_image.contains("<img"));
    }

    #[test]
    fn detail_renders_products_and_charts() {
        let html = render_detail(&sample_report("Accessories"), 1);
        assert!(html.contains("Accessories Analysis"));
        assert!(html.contains("Top 3 Products"));
        assert!(html.contains("Echo Dot"));
        // Mean ratings are formatted to one decimal place
        assert!(html.contains("&#9733; 4.7"));
        assert!(html.contains("What Customers Love:"));
        assert!(html.contains("Great sound"));
        assert!(html.contains("Areas for Improvement"));
        assert!(html.contains("Suggested Improvements:"));
        assert!(html.contains("Remote keeps disconnecting"));
        assert!(html.contains("Sentiment Distribution - Accessories"));
        assert!(html.contains("Rating Distribution - Accessories"));
        assert!(html.contains("Back to Categories"));
    }

    #[test]
    fn product_without_positive_summaries_gets_placeholder() {
        let html = render_detail(&sample_report("Accessories"), 1);
        assert!(html.contains("No positive summaries available."));
    }

    #[test]
    fn worst_without_negative_summaries_gets_placeholder() {
        let mut report = sample_report("Accessories");
        report.worst_product.as_mut().unwrap().improvement_summaries.clear();
        let html = render_detail(&report, 1);
        assert!(html.contains("No improvement suggestions available."));
    }

    #[test]
    fn empty_report_list_renders_empty_grid() {
        let html = render_index(&[], "Report", &HashMap::new());
        assert!(!html.contains("category-card"));
        assert!(!html.contains("category-detail"));
        assert!(html.contains("category-grid"));
    }

    #[test]
    fn whole_ratings_lose_the_decimal_in_chart_labels() {
        assert_eq!(format_rating(5.0), "5");
        assert_eq!(format_rating(4.5), "4.5");
    }
}
