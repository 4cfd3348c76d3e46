use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use dialoguer::{Confirm, Input, Select};

use crate::units::Shift;

/// Simple text input prompt with optional default value
///
/// # Arguments
/// * `prompt` - The prompt message to display
/// * `default` - Optional default value
///
/// # Returns
/// * `Ok(String)` - User input or default value
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_prompt = Input::<String>::new().with_prompt(prompt);

    if let Some(default_val) = default {
        input_prompt = input_prompt.default(default_val.to_string());
    }

    Ok(input_prompt.interact()?)
}

/// Text input that accepts an empty answer.
pub fn optional_text_input(prompt: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact()?;
    Ok(value.trim().to_string())
}

/// Numeric input with a default; dialoguer re-prompts on unparseable input.
pub fn number_input(prompt: &str, default: f64) -> Result<f64> {
    let value = Input::<f64>::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(value)
}

/// Date input in `YYYY-MM-DD` form, defaulting to `default`.
pub fn date_input(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .default(default.format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "Expected a date like 2024-03-01")
        })
        .interact()?;
    Ok(NaiveDate::parse_from_str(&value, "%Y-%m-%d")?)
}

/// Time input in `HH:MM` form, defaulting to `default`.
pub fn time_input(prompt: &str, default: NaiveTime) -> Result<NaiveTime> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .default(default.format("%H:%M").to_string())
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            NaiveTime::parse_from_str(input, "%H:%M")
                .map(|_| ())
                .map_err(|_| "Expected a time like 14:30")
        })
        .interact()?;
    Ok(NaiveTime::parse_from_str(&value, "%H:%M")?)
}

/// Shift selector over the fixed A/B/C codes.
pub fn shift_select() -> Result<Shift> {
    let items: Vec<&str> = Shift::ALL.iter().map(|s| s.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Shift")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Shift::ALL[selection])
}

/// Simple confirmation prompt
///
/// # Arguments
/// * `message` - The question to ask the user
/// * `default` - Whether "yes" should be the default answer
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(answer)
}
