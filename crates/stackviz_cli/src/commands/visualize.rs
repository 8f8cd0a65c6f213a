//! Visualize command - print the dependency diagram of a template.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use stackviz_core::{DependencyGraph, GraphConfig, Report};

use super::Cli;

pub fn execute(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    info!(
        "Scanning {:?} with {} ownership",
        cli.template, config.ownership
    );

    let graph = DependencyGraph::from_file(&cli.template, &config).with_context(|| {
        format!("Failed to build dependency graph for {}", cli.template.display())
    })?;

    let report = Report::new(&graph).with_summary(config.show_summary);

    // Rendered in full before writing so a failure never leaves partial output
    let rendered = report.to_string();
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write report")?;

    Ok(())
}

/// Merge the optional config file with command-line overrides.
fn resolve_config(cli: &Cli) -> Result<GraphConfig> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => GraphConfig::default(),
    };

    if let Some(ownership) = cli.ownership {
        config = config.with_ownership(ownership.into());
    }
    if cli.no_summary {
        config = config.with_summary(false);
    }

    Ok(config)
}
