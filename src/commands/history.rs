//! Displays saved entries for a category, one table per sheet.

use anyhow::Result;
use colored::*;

use crate::cli::HistoryArgs;
use crate::config::Config;
use crate::store::{Cell, Sheet, Workbook};

pub fn run(config: &Config, args: HistoryArgs) -> Result<()> {
    let path = config.workbook_path(args.category.file_name());
    if !path.exists() {
        println!(
            "  {} No {} entries recorded yet.",
            "⚠".bright_yellow().bold(),
            args.category.label()
        );
        return Ok(());
    }

    let workbook = Workbook::open_or_create(&path)?;
    for sheet in &workbook.sheets {
        println!();
        println!("  {}", sheet.name.bright_white().bold());
        print_sheet(sheet, None);
    }

    println!();
    println!("Workbook file: {}", path.display().to_string().cyan());
    Ok(())
}

/// Prints a sheet as an aligned table, sized with the same column-width
/// rule the workbook writer uses. `limit` keeps only the most recent rows.
pub(crate) fn print_sheet(sheet: &Sheet, limit: Option<usize>) {
    let widths: Vec<usize> = sheet.column_widths().iter().map(|w| *w as usize).collect();
    let Some(header) = sheet.header() else {
        println!("  (empty sheet)");
        return;
    };

    println!("  {}", render_row(header, &widths).bold());

    let rows = sheet.data_rows();
    let skip = match limit {
        Some(n) => rows.len().saturating_sub(n),
        None => 0,
    };
    if skip > 0 {
        println!("  {}", format!("... {} earlier rows", skip).dimmed());
    }
    for row in &rows[skip..] {
        println!("  {}", render_row(row, &widths));
    }
}

fn render_row(row: &[Cell], widths: &[usize]) -> String {
    row.iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(0);
            format!("{:<1$}", cell.to_string(), width)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
