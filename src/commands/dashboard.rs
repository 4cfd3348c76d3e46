//! Interactive dashboard: a single-selection menu over the four tools.

use anyhow::Result;
use colored::*;
use dialoguer::Select;

use crate::cli::{ChillerArgs, CompressorArgs, ExportArgs, HistoryArgs, PanelArgs, ReportArgs};
use crate::config::Config;
use crate::units::Category;

use super::{chiller, compressor, export, history, panel, report};

pub async fn run(config: &Config) -> Result<()> {
    println!();
    println!("{}", "Maintenance Dashboard".bright_white().bold());

    loop {
        println!();
        let items = [
            "Report Generator",
            "LT Panel Entry",
            "Compressor Readings",
            "Chiller Readings",
            "History",
            "Export workbook",
            "Quit",
        ];
        let selection = Select::new()
            .with_prompt("Select function")
            .items(&items)
            .default(0)
            .interact()?;

        let result = match selection {
            0 => report::run(config, ReportArgs::default()).await,
            1 => panel::run(config, PanelArgs::default()),
            2 => compressor::run(config, CompressorArgs::default()),
            3 => chiller::run(config, ChillerArgs::default()),
            4 => select_category().and_then(|category| {
                history::run(config, HistoryArgs { category })
            }),
            5 => select_category().and_then(|category| {
                export::run(config, ExportArgs { category, to: None })
            }),
            _ => break,
        };

        // A failed tool returns to the menu; nothing here is fatal.
        if let Err(err) = result {
            log::error!("Tool failed: {:#}", err);
            println!("{} {:#}", "❌".bright_red().bold(), err);
        }
    }

    Ok(())
}

fn select_category() -> Result<Category> {
    let categories = [
        Category::Report,
        Category::Panel,
        Category::Compressor,
        Category::Chiller,
    ];
    let items: Vec<&str> = categories.iter().map(|c| c.label()).collect();
    let selection = Select::new()
        .with_prompt("Select category")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(categories[selection])
}
