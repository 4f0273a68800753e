//! Core library for reviewdeck.
//!
//! Turns a CSV table of annotated product reviews into per-category
//! analysis reports and renders them as a static interactive HTML artifact.
//! The `reviewdeck` CLI is a thin shell over this crate.
//!
//! # Modules
//!
//! - [`dataset`] - Input CSV loading and header validation
//! - [`analysis`] - Per-category grouping, ranking, and distributions
//! - [`render`] - HTML/CSS/JS artifact generation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use reviewdeck_core::{analysis, dataset, render};
//!
//! let records = dataset::load_reviews(Utf8Path::new("reviews.csv")).expect("readable input");
//! let reports = analysis::analyze_all(&records);
//! let options = render::RenderOptions {
//!     output_dir: "report".into(),
//!     title: "Product Review Analysis".to_string(),
//!     category_images: Default::default(),
//! };
//! let index = render::write_report(&reports, &options).expect("writable output");
//! println!("report at {index}");
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod dataset;

pub mod error;

pub mod render;

pub use analysis::{CategoryReport, analyze_all, analyze_category};

pub use config::{Config, ConfigLoader, LogLevel};

pub use dataset::{REQUIRED_COLUMNS, ReviewRecord, load_reviews};

pub use error::{ConfigError, ConfigResult, DatasetError, DatasetResult, RenderError, RenderResult};

pub use render::{RenderOptions, write_report};
