//! Report command: load, analyze, render.

use anyhow::Context;
use camino::Utf8Path;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use reviewdeck_core::config::Config;
use reviewdeck_core::render::RenderOptions;
use reviewdeck_core::{analysis, dataset, render};

/// Report title used when neither `--title` nor config provides one.
pub const DEFAULT_TITLE: &str = "Product Review Analysis";

/// Output directory used when neither `--output-dir` nor config provides one.
pub const DEFAULT_OUTPUT_DIR: &str = "report";

/// Machine-readable run summary for `--json` output.
#[derive(Serialize)]
struct RunSummary<'a> {
    input: &'a Utf8Path,
    index_html: &'a Utf8Path,
    categories: usize,
    reviews: usize,
}

/// Generate the report artifact from a review CSV.
///
/// Flag values win over config values, which win over built-in defaults.
/// A missing required column halts before any analysis; an input category
/// with no rows is skipped, not an error.
#[instrument(name = "cmd_report", skip_all, fields(input = %input))]
pub fn cmd_report(
    input: &Utf8Path,
    flag_output_dir: Option<&Utf8Path>,
    flag_title: Option<&str>,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(output_dir = ?flag_output_dir, title = ?flag_title, "executing report command");

    let records = dataset::load_reviews(input)
        .with_context(|| format!("failed to load reviews from {input}"))?;

    let categories = analysis::category_order(&records);
    debug!(
        records = records.len(),
        categories = categories.len(),
        "dataset loaded"
    );

    let progress = ProgressBar::new(categories.len() as u64);
    let mut reports = Vec::with_capacity(categories.len());
    for category in &categories {
        if let Some(report) = analysis::analyze_category(&records, category) {
            reports.push(report);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let title = flag_title
        .or(config.title.as_deref())
        .unwrap_or(DEFAULT_TITLE);
    let output_dir = flag_output_dir
        .or(config.output_dir.as_deref())
        .unwrap_or(Utf8Path::new(DEFAULT_OUTPUT_DIR));

    let options = RenderOptions {
        output_dir: output_dir.to_path_buf(),
        title: title.to_string(),
        category_images: config.category_images(),
    };
    let index =
        render::write_report(&reports, &options).context("failed to write report artifact")?;

    if global_json {
        let summary = RunSummary {
            input,
            index_html: &index,
            categories: reports.len(),
            reviews: records.len(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {} ({} categories, {} reviews)",
            "Report written to".green(),
            index.as_str().bold(),
            reports.len(),
            records.len(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    const CSV: &str = "\
name,product_category,reviews.rating,rating_sentiment,chatgpt_summary
Echo Dot,Smart Home & Speakers,5,Positive,Great sound for the size
Echo Dot,Smart Home & Speakers,4,Positive,Easy to set up
Fire Stick,Smart Home & Speakers,2,Negative,Remote keeps disconnecting
Kindle,E-readers,5,Positive,Crisp screen
";

    fn write_input(dir: &std::path::Path) -> Utf8PathBuf {
        let path = dir.join("reviews.csv");
        std::fs::write(&path, CSV).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn generates_artifact_with_defaults_resolved_from_config() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_input(tmp.path());
        let out = Utf8PathBuf::try_from(tmp.path().join("out")).unwrap();

        let config = Config {
            title: Some("Config Title".to_string()),
            ..Config::default()
        };
        cmd_report(&input, Some(&out), None, false, &config).unwrap();

        let html = std::fs::read_to_string(out.join("index.html").as_std_path()).unwrap();
        assert!(html.contains("Config Title"));
        assert!(html.contains("Smart Home &amp; Speakers"));
        assert!(html.contains("E-readers"));
    }

    #[test]
    fn flag_title_wins_over_config() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_input(tmp.path());
        let out = Utf8PathBuf::try_from(tmp.path().join("out")).unwrap();

        let config = Config {
            title: Some("Config Title".to_string()),
            ..Config::default()
        };
        cmd_report(&input, Some(&out), Some("Flag Title"), false, &config).unwrap();

        let html = std::fs::read_to_string(out.join("index.html").as_std_path()).unwrap();
        assert!(html.contains("Flag Title"));
        assert!(!html.contains("Config Title"));
    }

    #[test]
    fn missing_column_fails_before_writing_output() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.csv");
        std::fs::write(&path, "name,reviews.rating\nEcho Dot,5\n").unwrap();
        let input = Utf8PathBuf::try_from(path).unwrap();
        let out = Utf8PathBuf::try_from(tmp.path().join("out")).unwrap();

        let err = cmd_report(&input, Some(&out), None, false, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("missing required columns"));
        assert!(!out.exists());
    }
}
