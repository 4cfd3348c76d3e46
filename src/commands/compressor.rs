//! Compressor readings entry: one row per unit per submission.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use colored::*;
use std::path::Path;

use crate::cli::CompressorArgs;
use crate::config::Config;
use crate::store::Workbook;
use crate::ui::prompts;
use crate::units::{self, Category, Shift};

use super::submit_with_retry;

pub struct CompressorReading {
    pub amps: f64,
    pub temp_c: f64,
    pub pressure_bar: f64,
}

pub struct CompressorEntry {
    pub date: NaiveDate,
    pub shift: Shift,
    pub readings: Vec<(&'static str, CompressorReading)>,
}

pub fn run(config: &Config, _args: CompressorArgs) -> Result<()> {
    println!();
    println!("{}", "Compressor Data Logger".bright_white().bold());

    let date = prompts::date_input("Log date", Local::now().date_naive())?;
    let shift = prompts::shift_select()?;

    let mut readings = Vec::new();
    for unit in units::COMPRESSORS {
        println!();
        println!("{}", unit.bright_white().bold());
        let amps = prompts::number_input(&format!("{} - Amperes", unit), 0.0)?;
        let temp_c = prompts::number_input(&format!("{} - Temperature (°C)", unit), 0.0)?;
        let pressure_bar = prompts::number_input(&format!("{} - Pressure (bar)", unit), 0.0)?;
        readings.push((
            unit,
            CompressorReading {
                amps,
                temp_c,
                pressure_bar,
            },
        ));
    }

    let entry = CompressorEntry {
        date,
        shift,
        readings,
    };

    let path = config.workbook_path(units::COMPRESSOR_FILE);
    if submit_with_retry(|| save_compressor_entry(&path, &entry))? {
        println!("{} Compressor log saved successfully!", "✓".bright_green().bold());
        println!("Workbook file: {}", path.display().to_string().cyan());
    }
    Ok(())
}

/// Appends one row to every unit's sheet and writes the workbook back.
/// An unreadable existing file is discarded and the log starts over.
pub fn save_compressor_entry(path: &Path, entry: &CompressorEntry) -> Result<()> {
    let mut workbook = Workbook::open_with_policy(path, Category::Compressor.corrupt_policy())?;

    for (unit, reading) in &entry.readings {
        let sheet_name = units::compressor_sheet_name(unit);
        let sheet = workbook.sheet_mut(&sheet_name, &units::COMPRESSOR_HEADER);
        sheet.append_row(vec![
            entry.date.format("%Y-%m-%d").to_string().into(),
            entry.shift.as_str().into(),
            reading.amps.into(),
            reading.temp_c.into(),
            reading.pressure_bar.into(),
        ])?;
    }

    workbook.save(path)
}
