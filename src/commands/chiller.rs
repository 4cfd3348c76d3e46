//! Daily chiller checklist: one row per chiller per submission.
//!
//! Chiller readings are recorded as the operator wrote them, free text,
//! so partial checklists and annotations like "OK" or "low" survive.

use anyhow::{Context, Result};
use chrono::{Local, NaiveTime};
use colored::*;
use std::path::Path;

use crate::cli::ChillerArgs;
use crate::config::Config;
use crate::store::Workbook;
use crate::ui::prompts;
use crate::units::{self, Category, Shift};

use super::submit_with_retry;

pub struct ChillerReading {
    pub amp: String,
    pub cooling_temp: String,
    pub pressure: String,
    pub oil_level: String,
}

pub struct ChillerEntry {
    pub shift: Shift,
    pub time: NaiveTime,
    pub readings: Vec<(&'static str, ChillerReading)>,
}

pub fn run(config: &Config, _args: ChillerArgs) -> Result<()> {
    println!();
    println!("{}", "Daily Chillers Checklist".bright_white().bold());

    let shift = prompts::shift_select()?;
    let time = prompts::time_input("Time", Local::now().time())?;

    let mut readings = Vec::new();
    for (label, _) in units::CHILLERS {
        println!();
        println!("{}", label.bright_white().bold());
        let amp = prompts::optional_text_input(&format!("{} - Amp", label))?;
        let cooling_temp = prompts::optional_text_input(&format!("{} - Cooling Temp", label))?;
        let pressure = prompts::optional_text_input(&format!("{} - Pressure", label))?;
        let oil_level = prompts::optional_text_input(&format!("{} - Oil Level", label))?;
        readings.push((
            label,
            ChillerReading {
                amp,
                cooling_temp,
                pressure,
                oil_level,
            },
        ));
    }

    let entry = ChillerEntry {
        shift,
        time,
        readings,
    };

    let path = config.workbook_path(units::CHILLER_FILE);
    if submit_with_retry(|| save_chiller_entry(&path, &entry))? {
        println!(
            "{} Chiller readings saved to separate sheets!",
            "✓".bright_green().bold()
        );
        println!("Workbook file: {}", path.display().to_string().cyan());
    }
    Ok(())
}

/// Appends one row to every chiller's sheet and writes the workbook back.
pub fn save_chiller_entry(path: &Path, entry: &ChillerEntry) -> Result<()> {
    let mut workbook = Workbook::open_with_policy(path, Category::Chiller.corrupt_policy())?;
    let time = entry.time.format("%I:%M %p").to_string();

    for (label, reading) in &entry.readings {
        let sheet_name = units::chiller_sheet_name(label)
            .with_context(|| format!("Unknown chiller '{}'", label))?;
        let sheet = workbook.sheet_mut(sheet_name, &units::CHILLER_HEADER);
        sheet.append_row(vec![
            entry.shift.as_str().into(),
            time.as_str().into(),
            reading.amp.as_str().into(),
            reading.cooling_temp.as_str().into(),
            reading.pressure.as_str().into(),
            reading.oil_level.as_str().into(),
        ])?;
    }

    workbook.save(path)
}
