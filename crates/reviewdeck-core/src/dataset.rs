//! Review dataset loading and validation.
//!
//! Parses the input CSV into [`ReviewRecord`] values. The header row is
//! validated against [`REQUIRED_COLUMNS`] before any data row is parsed, so
//! a malformed input fails once, up front, with every missing column named.

use std::io::Read;

use camino::Utf8Path;
use serde::Deserialize;

use crate::error::{DatasetError, DatasetResult};

/// Column headers that must be present in the input CSV.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "name",
    "product_category",
    "reviews.rating",
    "rating_sentiment",
    "chatgpt_summary",
];

/// One row of the input table: a single annotated product review.
///
/// Field names map to the dataset's column headers. Ratings must be present
/// and numeric; a row with a missing or unparseable rating is rejected at
/// load time. Summaries are optional; an empty cell deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewRecord {
    /// Product name.
    #[serde(rename = "name")]
    pub product: String,
    /// Category the product belongs to.
    #[serde(rename = "product_category")]
    pub category: String,
    /// Numeric star rating (1–5 in the source data).
    #[serde(rename = "reviews.rating")]
    pub rating: f64,
    /// Sentiment label supplied by the upstream annotation step.
    ///
    /// Canonically one of `Positive`, `Negative`, `Neutral`, but the source
    /// data is uncontrolled, so any string is accepted and counted as-is.
    #[serde(rename = "rating_sentiment")]
    pub sentiment: String,
    /// Free-text review summary, if one was produced.
    #[serde(rename = "chatgpt_summary")]
    pub summary: Option<String>,
}

impl ReviewRecord {
    /// Returns the summary if it has any non-whitespace content.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Load review records from a CSV file on disk.
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn load_reviews(path: &Utf8Path) -> DatasetResult<Vec<ReviewRecord>> {
    let file = std::fs::File::open(path.as_std_path()).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_reviews(file)
}

/// Load review records from any CSV reader.
///
/// Validates the header row first: every name in [`REQUIRED_COLUMNS`] must
/// appear, otherwise [`DatasetError::MissingColumns`] lists all absent
/// columns and nothing is parsed. Unknown extra columns are ignored.
pub fn read_reviews<R: Read>(reader: R) -> DatasetResult<Vec<ReviewRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(DatasetError::Header)?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| (*col).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns { columns: missing });
    }

    let mut records = Vec::new();
    for result in csv_reader.deserialize::<ReviewRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                let line = e.position().map_or(0, csv::Position::line);
                return Err(DatasetError::Record { line, source: e });
            }
        }
    }

    tracing::debug!(records = records.len(), "dataset loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,product_category,reviews.rating,rating_sentiment,chatgpt_summary";

    #[test]
    fn parses_well_formed_rows() {
        let csv = format!(
            "{HEADER}\n\
             Echo Dot,Smart Home & Speakers,5,Positive,Great sound for the size\n\
             Echo Dot,Smart Home & Speakers,2,Negative,Stopped working after a week\n"
        );
        let records = read_reviews(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product, "Echo Dot");
        assert_eq!(records[0].category, "Smart Home & Speakers");
        assert_eq!(records[0].rating, 5.0);
        assert_eq!(records[0].sentiment, "Positive");
        assert_eq!(
            records[0].summary.as_deref(),
            Some("Great sound for the size")
        );
    }

    #[test]
    fn missing_columns_lists_every_absent_column() {
        let csv = "name,reviews.rating\nEcho Dot,5\n";
        let err = read_reviews(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::MissingColumns { columns } => {
                assert_eq!(
                    columns,
                    vec!["product_category", "rating_sentiment", "chatgpt_summary"]
                );
            }
            other => panic!("expected MissingColumns, got {other}"),
        }
    }

    #[test]
    fn missing_columns_message_is_user_facing() {
        let csv = "name,product_category,reviews.rating,rating_sentiment\nA,X,5,Positive\n";
        let err = read_reviews(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required columns: chatgpt_summary"
        );
    }

    #[test]
    fn empty_summary_is_none() {
        let csv = format!("{HEADER}\nKindle,E-readers,4,Neutral,\n");
        let records = read_reviews(csv.as_bytes()).unwrap();
        assert_eq!(records[0].summary, None);
        assert_eq!(records[0].summary_text(), None);
    }

    #[test]
    fn whitespace_summary_has_no_text() {
        let record = ReviewRecord {
            product: "Kindle".to_string(),
            category: "E-readers".to_string(),
            rating: 4.0,
            sentiment: "Neutral".to_string(),
            summary: Some("   ".to_string()),
        };
        assert_eq!(record.summary_text(), None);
    }

    #[test]
    fn missing_rating_fails_with_line_number() {
        let csv = format!(
            "{HEADER}\n\
             Kindle,E-readers,4,Positive,Crisp screen\n\
             Kindle,E-readers,,Negative,No rating here\n"
        );
        let err = read_reviews(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::Record { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Record error, got {other}"),
        }
    }

    #[test]
    fn extra_columns_and_reordering_are_tolerated() {
        let csv = "reviews.rating,name,extra,product_category,rating_sentiment,chatgpt_summary\n\
                   5,Fire HD,ignored,Tablets & Entertainment,Positive,Solid tablet\n";
        let records = read_reviews(csv.as_bytes()).unwrap();
        assert_eq!(records[0].product, "Fire HD");
        assert_eq!(records[0].rating, 5.0);
    }

    #[test]
    fn open_error_names_the_path() {
        let err = load_reviews(Utf8Path::new("/nonexistent/reviews.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/reviews.csv"));
    }
}
