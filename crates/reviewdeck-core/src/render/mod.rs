//! Report artifact generation.
//!
//! Writes the browsable output tree: `index.html` plus the static CSS/JS
//! assets, with an empty `assets/img/` directory reserved for deployments
//! that ship their own imagery. Consumes [`CategoryReport`] values; all
//! analysis has already happened by the time this module runs.

mod assets;
pub mod charts;
pub mod html;

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};

use crate::analysis::CategoryReport;
use crate::error::{RenderError, RenderResult};

pub use html::render_index;

/// Where and how to write the report artifact.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Root output directory, created if absent.
    pub output_dir: Utf8PathBuf,
    /// Report title shown in the page header and `<title>`.
    pub title: String,
    /// Category → image URL mapping for the category cards.
    pub category_images: HashMap<String, String>,
}

/// Write the full report artifact and return the path to `index.html`.
///
/// Creates the output directory tree (`assets/css`, `assets/js`,
/// `assets/img`), writes the static assets, renders the document, and
/// writes it. Categories already filtered out as empty never reach this
/// function, so every report gets a card and a detail section.
#[tracing::instrument(skip(reports), fields(output_dir = %options.output_dir, categories = reports.len()))]
pub fn write_report(
    reports: &[CategoryReport],
    options: &RenderOptions,
) -> RenderResult<Utf8PathBuf> {
    let css_dir = options.output_dir.join("assets/css");
    let js_dir = options.output_dir.join("assets/js");
    let img_dir = options.output_dir.join("assets/img");
    for dir in [&css_dir, &js_dir, &img_dir] {
        create_dir(dir)?;
    }

    write_file(&css_dir.join("style.css"), assets::STYLE_CSS)?;
    write_file(&js_dir.join("script.js"), assets::SCRIPT_JS)?;

    let html = html::render_index(reports, &options.title, &options.category_images);
    let index_path = options.output_dir.join("index.html");
    write_file(&index_path, &html)?;

    tracing::info!(index = %index_path, "report written");
    Ok(index_path)
}

fn create_dir(path: &Utf8Path) -> RenderResult<()> {
    std::fs::create_dir_all(path.as_std_path()).map_err(|source| RenderError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Utf8Path, content: &str) -> RenderResult<()> {
    std::fs::write(path.as_std_path(), content).map_err(|source| RenderError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
