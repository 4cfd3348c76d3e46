//! Copies a category's workbook file out of the data directory.

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::PathBuf;

use crate::cli::ExportArgs;
use crate::config::Config;

pub fn run(config: &Config, args: ExportArgs) -> Result<()> {
    let source = config.workbook_path(args.category.file_name());
    if !source.exists() {
        println!(
            "  {} No {} entries recorded yet, nothing to export.",
            "⚠".bright_yellow().bold(),
            args.category.label()
        );
        return Ok(());
    }

    let destination = args
        .to
        .unwrap_or_else(|| PathBuf::from(args.category.file_name()));

    if same_file(&source, &destination) {
        println!(
            "  {} Source and destination are the same file: {}",
            "⚠".bright_yellow().bold(),
            source.display()
        );
        return Ok(());
    }

    fs::copy(&source, &destination)
        .with_context(|| format!("Failed to copy {:?} to {:?}", source, destination))?;

    println!(
        "{} Exported {} to {}",
        "✓".bright_green().bold(),
        args.category.label(),
        destination.display().to_string().cyan()
    );
    Ok(())
}

fn same_file(a: &std::path::Path, b: &std::path::Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
