//! Maintenance work order entry with a generated one-line report.

use anyhow::Result;
use chrono::Local;
use colored::*;
use log::info;
use std::path::Path;

use crate::cli::ReportArgs;
use crate::config::Config;
use crate::report::ReportClient;
use crate::store::Workbook;
use crate::ui::prompts;
use crate::units::{self, Category};

use super::{history, submit_with_retry};

/// One submitted work order, generated report line included.
pub struct WorkOrder {
    pub unit: String,
    pub machine: String,
    pub technician: String,
    pub issue: String,
    pub report: String,
}

pub async fn run(config: &Config, args: ReportArgs) -> Result<()> {
    println!();
    println!("{}", "Maintenance Report Generator".bright_white().bold());

    let (unit, machine, technician, issue) = collect_fields(args)?;

    let client = ReportClient::new(config.inference_url.clone());
    println!("Generating report...");
    let report = client.generate(&unit, &machine, &technician, &issue).await;
    info!("Generated report for {} / {}", unit, machine);

    let order = WorkOrder {
        unit,
        machine,
        technician,
        issue,
        report,
    };

    let path = config.workbook_path(units::WORK_ORDER_FILE);
    if !submit_with_retry(|| save_work_order(&path, &order))? {
        return Ok(());
    }

    println!("{} Report generated and saved!", "✓".bright_green().bold());
    println!();
    println!("{}", "Generated Report:".bright_white().bold());
    println!("{}", order.report);

    print_recent_history(&path, config.settings.history_rows)?;
    println!();
    println!("Workbook file: {}", path.display().to_string().cyan());
    Ok(())
}

/// Appends the work order to the "Work Orders" sheet, stamping the save
/// time, and writes the workbook back.
pub fn save_work_order(path: &Path, order: &WorkOrder) -> Result<()> {
    let mut workbook = Workbook::open_with_policy(path, Category::Report.corrupt_policy())?;
    let sheet = workbook.sheet_mut(units::WORK_ORDER_SHEET, &units::WORK_ORDER_HEADER);

    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    sheet.append_row(vec![
        stamp.into(),
        order.unit.as_str().into(),
        order.machine.as_str().into(),
        order.technician.as_str().into(),
        order.issue.as_str().into(),
        order.report.as_str().into(),
    ])?;

    workbook.save(path)
}

/// Prompts for the four work order fields until all are non-empty. Values
/// already entered (or passed as arguments) are kept between rounds.
fn collect_fields(args: ReportArgs) -> Result<(String, String, String, String)> {
    let mut unit = args.unit.unwrap_or_default().trim().to_string();
    let mut machine = args.machine.unwrap_or_default().trim().to_string();
    let mut technician = args.technician.unwrap_or_default().trim().to_string();
    let mut issue = args.issue.unwrap_or_default().trim().to_string();

    loop {
        if unit.is_empty() {
            unit = prompts::optional_text_input("Unit (e.g. Unit 5)")?;
        }
        if machine.is_empty() {
            machine = prompts::optional_text_input("Machine name (e.g. Compressor A1)")?;
        }
        if technician.is_empty() {
            technician = prompts::optional_text_input("Technician name (e.g. John Doe)")?;
        }
        if issue.is_empty() {
            issue = prompts::optional_text_input("Issue reported (e.g. High temperature issue)")?;
        }

        if !unit.is_empty() && !machine.is_empty() && !technician.is_empty() && !issue.is_empty() {
            return Ok((unit, machine, technician, issue));
        }

        println!(
            "{} Please fill in all fields before generating the report.",
            "⚠".bright_yellow().bold()
        );
    }
}

fn print_recent_history(path: &Path, rows: usize) -> Result<()> {
    let workbook = Workbook::open_or_create(path)?;
    if let Some(sheet) = workbook.sheet(units::WORK_ORDER_SHEET) {
        println!();
        println!("{}", "Report History".bright_white().bold());
        history::print_sheet(sheet, Some(rows));
    }
    Ok(())
}
