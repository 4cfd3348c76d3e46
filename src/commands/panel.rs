//! LT panel readings entry: one row per panel per submission.

use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use colored::*;
use std::path::Path;

use crate::cli::PanelArgs;
use crate::config::Config;
use crate::store::Workbook;
use crate::ui::prompts;
use crate::units::{self, Category, Shift};

use super::submit_with_retry;

pub struct PanelReading {
    pub volt: f64,
    pub amp: f64,
    pub pf: f64,
    pub temp: f64,
}

pub struct PanelEntry {
    pub date: NaiveDate,
    pub shift: Shift,
    pub time: NaiveTime,
    pub technician: String,
    pub readings: Vec<(&'static str, PanelReading)>,
}

pub fn run(config: &Config, args: PanelArgs) -> Result<()> {
    println!();
    println!("{}", "LT Panel Readings Entry".bright_white().bold());

    let date = prompts::date_input("Date", Local::now().date_naive())?;
    let shift = prompts::shift_select()?;
    let time = prompts::time_input("Time", Local::now().time())?;
    let technician = match args.technician {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => prompts::text_input("Technician name / reader", None)?,
    };

    let mut readings = Vec::new();
    for panel in units::PANELS {
        println!();
        println!("{}", panel.bright_white().bold());
        let volt = prompts::number_input(&format!("{} - Volt", panel), 0.0)?;
        let amp = prompts::number_input(&format!("{} - Amp", panel), 0.0)?;
        let pf = prompts::number_input(&format!("{} - PF", panel), 0.98)?;
        let temp = prompts::number_input(&format!("{} - Temp", panel), 0.0)?;
        readings.push((panel, PanelReading { volt, amp, pf, temp }));
    }

    let entry = PanelEntry {
        date,
        shift,
        time,
        technician,
        readings,
    };

    let path = config.workbook_path(units::PANEL_FILE);
    if submit_with_retry(|| save_panel_entry(&path, &entry))? {
        println!("{} LT panel data saved successfully!", "✓".bright_green().bold());
        println!("Workbook file: {}", path.display().to_string().cyan());
    }
    Ok(())
}

/// Appends one row to every panel's sheet and writes the workbook back.
pub fn save_panel_entry(path: &Path, entry: &PanelEntry) -> Result<()> {
    let mut workbook = Workbook::open_with_policy(path, Category::Panel.corrupt_policy())?;

    for (panel, reading) in &entry.readings {
        let sheet = workbook.sheet_mut(panel, &units::PANEL_HEADER);
        sheet.append_row(vec![
            entry.date.format("%Y-%m-%d").to_string().into(),
            entry.shift.as_str().into(),
            entry.time.format("%H:%M").to_string().into(),
            entry.technician.as_str().into(),
            reading.volt.into(),
            reading.amp.into(),
            reading.pf.into(),
            reading.temp.into(),
        ])?;
    }

    workbook.save(path)
}
