//! Workbook persistence for the per-category log files.
//!
//! Each category keeps one workbook file with one worksheet per physical
//! unit. The whole file is read into memory, mutated, and written back on
//! every save; the write goes to a temporary path and replaces the target
//! atomically so an interrupted save never corrupts the previous file.

use anyhow::{bail, Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use log::{debug, warn};
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::fs;
use std::path::{Path, PathBuf};

mod format;

pub use format::COLUMN_PADDING;

/// One cell value. Numeric readings stay numeric across a save/load cycle;
/// everything else is stored as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Character count of the cell as displayed, used for column sizing.
    pub fn display_len(&self) -> usize {
        self.to_string().chars().count()
    }

    fn from_data(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Empty => Cell::Text(String::new()),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// A named worksheet. Row 0 is the header row; it is written once when the
/// sheet is created and never rewritten.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn header(&self) -> Option<&[Cell]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Data rows, i.e. everything below the header.
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Appends one row after the last used row. The row must have exactly
    /// as many cells as the header.
    pub fn append_row(&mut self, values: Vec<Cell>) -> Result<()> {
        if let Some(header) = self.rows.first() {
            if values.len() != header.len() {
                bail!(
                    "Row has {} cells but sheet '{}' has {} columns",
                    values.len(),
                    self.name,
                    header.len()
                );
            }
        }
        self.rows.push(values);
        Ok(())
    }

    /// Column widths for this sheet: per column, the longest displayed cell
    /// plus [`COLUMN_PADDING`]. Recomputed over the full column, so the
    /// result is the same no matter how often it is evaluated.
    pub fn column_widths(&self) -> Vec<f64> {
        let columns = self.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                let longest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(Cell::display_len)
                    .max()
                    .unwrap_or(0);
                (longest + COLUMN_PADDING) as f64
            })
            .collect()
    }
}

/// What to do when an existing workbook file cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptPolicy {
    /// Propagate the failure; the file on disk is left untouched.
    Fail,
    /// Discard the unreadable file and continue with an empty workbook.
    StartFresh,
}

/// In-memory image of one workbook file.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the workbook at `path`, or returns an empty one (no default
    /// blank sheet) when the file does not exist.
    pub fn open_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Workbook {:?} does not exist yet, starting empty", path);
            return Ok(Self::new());
        }
        Self::read(path)
    }

    /// Like [`Workbook::open_or_create`], but an unreadable file is handled
    /// per the caller's category policy.
    pub fn open_with_policy(path: &Path, policy: CorruptPolicy) -> Result<Self> {
        match Self::open_or_create(path) {
            Ok(workbook) => Ok(workbook),
            Err(err) => match policy {
                CorruptPolicy::Fail => Err(err),
                CorruptPolicy::StartFresh => {
                    warn!("Discarding unreadable workbook {:?}: {:#}", path, err);
                    let _ = fs::remove_file(path);
                    Ok(Self::new())
                }
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let mut source: Xlsx<_> = open_workbook(path)
            .with_context(|| format!("Failed to open workbook: {:?}", path))?;

        let mut sheets = Vec::new();
        for name in source.sheet_names().to_owned() {
            let range = source
                .worksheet_range(&name)
                .with_context(|| format!("Failed to read sheet '{}' in {:?}", name, path))?;
            let rows = range
                .rows()
                .map(|row| row.iter().map(Cell::from_data).collect())
                .collect();
            sheets.push(Sheet { name, rows });
        }

        debug!("Loaded workbook {:?} with {} sheets", path, sheets.len());
        Ok(Self { sheets })
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Returns the named sheet, creating it with `header` as its first row
    /// when it does not exist yet. An existing sheet's header is left as it
    /// was written on creation.
    pub fn sheet_mut(&mut self, name: &str, header: &[&str]) -> &mut Sheet {
        let index = match self.sheets.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                let mut sheet = Sheet::new(name);
                sheet.rows.push(header.iter().map(|&h| Cell::text(h)).collect());
                self.sheets.push(sheet);
                self.sheets.len() - 1
            }
        };
        &mut self.sheets[index]
    }

    /// Writes the whole workbook to `path`, overwriting any existing file.
    ///
    /// Every used cell gets a thin border and centered word wrap, row 1 is
    /// bold, and each column is sized to its longest displayed value plus
    /// [`COLUMN_PADDING`]. The file is written to a temporary sibling path
    /// first and then renamed over the target.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut output = XlsxWorkbook::new();
        let header = format::header_format();
        let body = format::body_format();

        for sheet in &self.sheets {
            let worksheet = output.add_worksheet();
            worksheet
                .set_name(&sheet.name)
                .with_context(|| format!("Invalid sheet name '{}'", sheet.name))?;

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                let cell_format = if row_idx == 0 { &header } else { &body };
                for (col_idx, cell) in row.iter().enumerate() {
                    match cell {
                        Cell::Text(s) => worksheet.write_string_with_format(
                            row_idx as u32,
                            col_idx as u16,
                            s.as_str(),
                            cell_format,
                        )?,
                        Cell::Number(n) => worksheet.write_number_with_format(
                            row_idx as u32,
                            col_idx as u16,
                            *n,
                            cell_format,
                        )?,
                    };
                }
            }

            for (col_idx, width) in sheet.column_widths().iter().enumerate() {
                worksheet.set_column_width(col_idx as u16, *width)?;
            }
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create data directory: {:?}", parent))?;
            }
        }

        let tmp = tmp_path(path);
        output
            .save(&tmp)
            .with_context(|| format!("Failed to write workbook: {:?}", tmp))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("Failed to replace workbook: {:?}", path))?;

        debug!("Saved workbook {:?} ({} sheets)", path, self.sheets.len());
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> Sheet {
        let mut workbook = Workbook::new();
        let sheet = workbook.sheet_mut("Log", &["Date", "Amps"]);
        sheet
            .append_row(vec!["2024-03-01".into(), 12.5.into()])
            .unwrap();
        sheet.clone()
    }

    #[test]
    fn sheet_mut_writes_header_once() {
        let mut workbook = Workbook::new();
        workbook.sheet_mut("Log", &["Date", "Amps"]);
        // A later call with a different header must not rewrite row 0.
        workbook.sheet_mut("Log", &["Other", "Columns"]);

        let sheet = workbook.sheet("Log").unwrap();
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0], vec![Cell::text("Date"), Cell::text("Amps")]);
    }

    #[test]
    fn append_row_rejects_arity_mismatch() {
        let mut workbook = Workbook::new();
        let sheet = workbook.sheet_mut("Log", &["Date", "Amps"]);
        let result = sheet.append_row(vec!["2024-03-01".into()]);
        assert!(result.is_err());
        assert_eq!(sheet.data_rows().len(), 0);
    }

    #[test]
    fn column_widths_are_longest_cell_plus_padding() {
        let sheet = sample_sheet();
        // "2024-03-01" is 10 chars, "Amps" beats "12.5" at 4 chars.
        assert_eq!(sheet.column_widths(), vec![12.0, 6.0]);
    }

    #[test]
    fn column_widths_are_idempotent() {
        let sheet = sample_sheet();
        assert_eq!(sheet.column_widths(), sheet.column_widths());
    }

    #[test]
    fn number_cells_display_like_numbers() {
        assert_eq!(Cell::Number(415.0).to_string(), "415");
        assert_eq!(Cell::Number(0.97).to_string(), "0.97");
        assert_eq!(Cell::Number(12.5).display_len(), 4);
    }
}
