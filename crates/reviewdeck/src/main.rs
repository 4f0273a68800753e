//! reviewdeck CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use reviewdeck::{Cli, report};
use reviewdeck_core::config::ConfigLoader;
use tracing::debug;

mod observability;

/// Convert a std path into a [`Utf8PathBuf`], naming it in the error.
fn utf8_path(what: &str, path: std::path::PathBuf) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = utf8_path("current directory", cwd)?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        loader = loader.with_file(utf8_path("config path", config_path.clone())?);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to set up logging")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        config_file = ?config_sources.primary_file(),
        "CLI initialized"
    );

    // required_unless_present guarantees input is set once --version-only
    // is handled above; this is unreachable in practice.
    let Some(ref input) = cli.input else {
        anyhow::bail!("--input is required");
    };

    let result = report::cmd_report(
        input,
        cli.output_dir.as_deref(),
        cli.title.as_deref(),
        cli.json,
        &config,
    );
    if let Err(ref err) = result {
        tracing::error!(error = %err, "report generation failed");
    }
    result
}
