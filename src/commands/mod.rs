use anyhow::Result;
use colored::*;

use crate::ui::prompts;

pub mod chiller;
pub mod compressor;
pub mod dashboard;
pub mod export;
pub mod history;
pub mod panel;
pub mod report;

/// Runs `save` until it succeeds or the operator gives up. The entered
/// values stay with the caller, so a retry re-submits the same entry.
/// Returns whether the entry was saved.
pub(crate) fn submit_with_retry(mut save: impl FnMut() -> Result<()>) -> Result<bool> {
    loop {
        match save() {
            Ok(()) => return Ok(true),
            Err(err) => {
                log::error!("Save failed: {:#}", err);
                println!("{} Failed to save: {:#}", "❌".bright_red().bold(), err);
                if !prompts::confirm("Try saving again?", true)? {
                    println!("{} Entry was not saved.", "⚠".bright_yellow().bold());
                    return Ok(false);
                }
            }
        }
    }
}
