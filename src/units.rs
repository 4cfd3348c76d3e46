//! Fixed unit tables for each data category.
//!
//! Every category writes to a fixed set of physical units, and each unit
//! maps to one worksheet. Sheet name derivation is a pure function of the
//! unit label so repeated submissions always target the same sheet.

use clap::ValueEnum;

use crate::store::CorruptPolicy;

pub const WORK_ORDER_FILE: &str = "generated_reports.xlsx";
pub const PANEL_FILE: &str = "lt_panel_log.xlsx";
pub const COMPRESSOR_FILE: &str = "compressor_log.xlsx";
pub const CHILLER_FILE: &str = "chiller_readings.xlsx";

pub const WORK_ORDER_SHEET: &str = "Work Orders";

pub const WORK_ORDER_HEADER: [&str; 6] = [
    "Date",
    "Unit",
    "Machine",
    "Technician Name",
    "Issue",
    "Generated Report",
];

pub const PANEL_HEADER: [&str; 8] = [
    "Date", "Shift", "Time", "Technician", "Volt", "Amp", "PF", "Temp",
];

pub const COMPRESSOR_HEADER: [&str; 5] =
    ["Date", "Shift", "Amps", "Temp (°C)", "Pressure (bar)"];

pub const CHILLER_HEADER: [&str; 6] =
    ["SHIFT", "TIME", "AMP", "COOLING TEMP", "PRESSURE", "OIL LEVEL"];

/// LT panels; the sheet name is the label itself.
pub const PANELS: [&str; 6] = [
    "LT Panel 1",
    "LT Panel 2",
    "LT Panel 3",
    "LT Panel 4",
    "Tapline",
    "Looms Panel",
];

/// Compressor units; see [`compressor_sheet_name`] for sheet naming.
pub const COMPRESSORS: [&str; 5] = [
    "Unit 1 (37 KW)",
    "Unit 2 (37 KW)",
    "Unit 3 (55 KW)",
    "Unit 4 (55 KW)",
    "Unit 5 (22 KW)",
];

/// Chiller display labels and their short sheet names.
pub const CHILLERS: [(&str, &str); 11] = [
    ("CHILLER NO 1 (UNIT NO 1)", "Chiller 1"),
    ("CHILLER NO 2 (BACKUP FOR UNIT NO 1)", "Chiller 2"),
    ("CHILLER NO 3 (UNIT NO 2)", "Chiller 3"),
    ("CHILLER NO 4 (UNIT NO 3)", "Chiller 4"),
    ("CHILLER NO 5 (BACKUP FOR UNIT NO 3)", "Chiller 5"),
    ("CHILLER NO 6 (UNIT NO 3)", "Chiller 6"),
    ("CHILLER NO 7 (UNIT NO 4)", "Chiller 7"),
    ("CHILLER NO 8 (BACKUP FOR UNIT NO 6)", "Chiller 8"),
    ("CHILLER NO 9 (UNIT NO 6)", "Chiller 9"),
    ("CHILLER NO 10 (UNIT NO 8)", "Chiller 10"),
    ("CHILLER NO 11 (UNIT NO 8)", "Chiller 11"),
];

/// Worksheet name for a compressor unit label: spaces become underscores,
/// parentheses are dropped. "Unit 1 (37 KW)" -> "Unit_1_37_KW".
pub fn compressor_sheet_name(unit: &str) -> String {
    unit.replace(' ', "_").replace(['(', ')'], "")
}

/// Short sheet name for a chiller display label.
pub fn chiller_sheet_name(label: &str) -> Option<&'static str> {
    CHILLERS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, sheet)| *sheet)
}

/// Work shift during which a reading was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    A,
    B,
    C,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::A, Shift::B, Shift::C];

    pub fn as_str(self) -> &'static str {
        match self {
            Shift::A => "A",
            Shift::B => "B",
            Shift::C => "C",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A data category, one workbook file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Report,
    Panel,
    Compressor,
    Chiller,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Report => "Report Generator",
            Category::Panel => "LT Panel Entry",
            Category::Compressor => "Compressor Readings",
            Category::Chiller => "Chiller Readings",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Category::Report => WORK_ORDER_FILE,
            Category::Panel => PANEL_FILE,
            Category::Compressor => COMPRESSOR_FILE,
            Category::Chiller => CHILLER_FILE,
        }
    }

    /// What to do when the category's workbook file cannot be parsed.
    /// The compressor log discards the corrupt file and starts over; every
    /// other category aborts the save and leaves the file untouched.
    pub fn corrupt_policy(self) -> CorruptPolicy {
        match self {
            Category::Compressor => CorruptPolicy::StartFresh,
            _ => CorruptPolicy::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressor_sheet_names_are_stable() {
        let expected = [
            ("Unit 1 (37 KW)", "Unit_1_37_KW"),
            ("Unit 2 (37 KW)", "Unit_2_37_KW"),
            ("Unit 3 (55 KW)", "Unit_3_55_KW"),
            ("Unit 4 (55 KW)", "Unit_4_55_KW"),
            ("Unit 5 (22 KW)", "Unit_5_22_KW"),
        ];
        for (label, sheet) in expected {
            assert_eq!(compressor_sheet_name(label), sheet);
        }
    }

    #[test]
    fn compressor_sheet_names_do_not_collide() {
        let mut names: Vec<String> = COMPRESSORS.iter().map(|u| compressor_sheet_name(u)).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), COMPRESSORS.len());
    }

    #[test]
    fn every_chiller_label_maps_to_its_sheet() {
        for (i, (label, _)) in CHILLERS.iter().enumerate() {
            let sheet = chiller_sheet_name(label).unwrap();
            assert_eq!(sheet, format!("Chiller {}", i + 1));
        }
        assert_eq!(chiller_sheet_name("CHILLER NO 12"), None);
    }

    #[test]
    fn corrupt_policy_is_category_keyed() {
        assert_eq!(Category::Compressor.corrupt_policy(), CorruptPolicy::StartFresh);
        assert_eq!(Category::Panel.corrupt_policy(), CorruptPolicy::Fail);
        assert_eq!(Category::Report.corrupt_policy(), CorruptPolicy::Fail);
        assert_eq!(Category::Chiller.corrupt_policy(), CorruptPolicy::Fail);
    }
}
