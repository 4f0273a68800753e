//! Configuration discovery and merging.
//!
//! Settings come from up to four layers, merged lowest to highest:
//!
//! 1. Built-in defaults
//! 2. User config at `~/.config/reviewdeck/config.<ext>`
//! 3. Project config found by walking up from the working directory
//!    (`reviewdeck.<ext>` or `.reviewdeck.<ext>`, stopping at a `.git`
//!    boundary)
//! 4. Explicit `--config` files, then `REVIEWDECK_`-prefixed environment
//!    variables
//!
//! `<ext>` is any of `toml`, `yaml`, `yml`, `json`. When one directory holds
//! several matching files they all merge, dotfiles first, so
//! `reviewdeck.json` beats `.reviewdeck.toml`.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use reviewdeck_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Built-in category image URLs, keyed by category name.
///
/// The rendered category cards reference these as external URLs; nothing is
/// downloaded or copied into the artifact. Deployments override or extend
/// the mapping through the `category_images` config field.
pub const DEFAULT_CATEGORY_IMAGES: &[(&str, &str)] = &[
    (
        "Accessories",
        "https://images-na.ssl-images-amazon.com/images/G/01/AmazonBasics/landing/electronics._CB485921693_.jpg",
    ),
    (
        "Tablets & Entertainment",
        "https://images-na.ssl-images-amazon.com/images/G/01/kindle/journeys/YTNiNWIyZTgt/YTNiNWIyZTgt-ZjZmMzY2Yjct-w1500._CB417267304_.jpg",
    ),
    (
        "Smart Home & Speakers",
        "https://images-na.ssl-images-amazon.com/images/G/01/kindle/journeys/Nzg3NzIxZDct/Nzg3NzIxZDct-YzA3MzI3Yjgt-w1500._CB418667506_.jpg",
    ),
    (
        "E-readers",
        "https://images-na.ssl-images-amazon.com/images/G/01/kindle/journeys/Yzg5NWM0MDQt/Yzg5NWM0MDQt-YTJmMDQzMWIt-w1500._CB418667506_.jpg",
    ),
];

/// Merged settings for a reviewdeck run.
///
/// Every field has a default, so an absent config file is never an error.
/// CLI flags sit above all of this; resolution happens in the CLI crate.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (file logging is off when unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Default report title when `--title` is not given.
    pub title: Option<String>,
    /// Default output directory when `--output-dir` is not given.
    pub output_dir: Option<Utf8PathBuf>,
    /// Category → image URL overrides for the category cards.
    ///
    /// Merged over [`DEFAULT_CATEGORY_IMAGES`]; an entry here wins for its
    /// category, and unknown categories simply render without an image.
    pub category_images: Option<HashMap<String, String>>,
}

impl Config {
    /// The category image mapping with config overrides applied.
    pub fn category_images(&self) -> HashMap<String, String> {
        let mut images: HashMap<String, String> = DEFAULT_CATEGORY_IMAGES
            .iter()
            .map(|(category, url)| ((*category).to_string(), (*url).to_string()))
            .collect();
        if let Some(ref overrides) = self.category_images {
            for (category, url) in overrides {
                images.insert(category.clone(), url.clone());
            }
        }
        images
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-step diagnostics.
    Debug,
    /// Normal operational messages (default).
    #[default]
    Info,
    /// Suspicious conditions only.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// The level as the lowercase string tracing filters expect.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which files actually contributed to the merged [`Config`].
///
/// [`ConfigLoader::load()`] hands this back so the CLI can report where
/// settings came from without repeating the discovery walk.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project files from the walk-up search, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// The XDG user config file, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files passed explicitly (e.g., via `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The single highest-precedence file among everything loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Recognized config file extensions, in merge order.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Name used for config files and the XDG directory.
const APP_NAME: &str = "reviewdeck";

/// Builder assembling the figment from every configured source.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Where the project walk-up search starts; `None` skips it.
    search_from: Option<Utf8PathBuf>,
    /// Whether the XDG user config participates.
    user_config: bool,
    /// Directory entry that ends the walk-up search.
    boundary: Option<String>,
    /// Files to merge unconditionally, in the order given.
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// A loader with user config enabled and a `.git` search boundary.
    pub fn new() -> Self {
        Self {
            search_from: None,
            user_config: true,
            boundary: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Enable the project search, walking up from `path`.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.search_from = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or exclude `~/.config/reviewdeck/` from the merge.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Change the directory entry that stops the walk-up search.
    ///
    /// The default boundary is `.git`, so discovery never escapes the
    /// repository the run started in.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary = Some(marker.into());
        self
    }

    /// Remove the search boundary entirely (walk to the filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary = None;
        self
    }

    /// Queue a file to merge after all discovered sources.
    ///
    /// Calling this repeatedly stacks files; the last one added wins on
    /// conflicting keys.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every source and extract the final [`Config`].
    ///
    /// Precedence, highest first: `REVIEWDECK_*` environment variables,
    /// explicit files, project files, user config, defaults.
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let mut sources = ConfigSources::default();
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if self.user_config {
            sources.user_file = Self::user_config_file();
            if let Some(ref user_file) = sources.user_file {
                figment = Self::merge_file(figment, user_file);
            }
        }

        if let Some(ref start) = self.search_from {
            sources.project_files = self.discover_project_files(start);
            for file in &sources.project_files {
                figment = Self::merge_file(figment, file);
            }
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // REVIEWDECK_TITLE="Q3 Review Roundup", REVIEWDECK_LOG_LEVEL=debug, ...
        figment = figment.merge(Env::prefixed("REVIEWDECK_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(log_level = config.log_level.as_str(), "configuration loaded");
        Ok((config, sources))
    }

    /// Walk up from `start` until a directory yields config files.
    ///
    /// Only the closest matching directory contributes; its files come back
    /// dotfiles-first so figment's last-wins merge gives regular files
    /// precedence. The walk ends at the boundary marker, but a config
    /// sitting next to the marker itself still counts.
    fn discover_project_files(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut dir = Some(start.to_path_buf());

        while let Some(current) = dir {
            let mut found = Vec::new();
            for stem in [format!(".{APP_NAME}"), APP_NAME.to_string()] {
                for ext in CONFIG_EXTENSIONS {
                    let candidate = current.join(format!("{stem}.{ext}"));
                    if candidate.is_file() {
                        found.push(candidate);
                    }
                }
            }
            if !found.is_empty() {
                return found;
            }

            let at_boundary = self
                .boundary
                .as_ref()
                .is_some_and(|marker| current.join(marker.as_str()).exists() && current.as_path() != start);
            if at_boundary {
                break;
            }
            dir = current.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// `config.<ext>` under the XDG config directory, if present.
    fn user_config_file() -> Option<Utf8PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| dirs.config_dir().join(format!("config.{ext}")))
            .find(|candidate| candidate.is_file())
            .and_then(|found| Utf8PathBuf::from_path_buf(found).ok())
    }

    /// Merge one file into the figment, picking the provider by extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}
