use anyhow::Result;
use tempfile::TempDir;

use plantlog::store::{Cell, CorruptPolicy, Workbook};

const HEADER: [&str; 3] = ["Date", "Shift", "Amps"];

fn scratch_path(dir: &TempDir, name: &str) -> std::path::PathBuf {
    dir.path().join(name)
}

#[test]
fn append_save_reload_preserves_last_row() -> Result<()> {
    let dir = TempDir::new()?;
    let path = scratch_path(&dir, "log.xlsx");

    let mut workbook = Workbook::open_or_create(&path)?;
    let sheet = workbook.sheet_mut("Unit_1", &HEADER);
    sheet.append_row(vec!["2024-03-01".into(), "A".into(), 12.5.into()])?;
    workbook.save(&path)?;

    let reloaded = Workbook::open_or_create(&path)?;
    let sheet = reloaded.sheet("Unit_1").expect("sheet exists");
    assert_eq!(
        sheet.header().unwrap(),
        &[Cell::text("Date"), Cell::text("Shift"), Cell::text("Amps")]
    );
    let last = sheet.data_rows().last().expect("one data row");
    assert_eq!(
        last,
        &vec![
            Cell::text("2024-03-01"),
            Cell::text("A"),
            Cell::Number(12.5)
        ]
    );
    Ok(())
}

#[test]
fn rows_accumulate_in_append_order_across_saves() -> Result<()> {
    let dir = TempDir::new()?;
    let path = scratch_path(&dir, "log.xlsx");

    // Three separate open-append-save cycles, like three submissions.
    for amps in [1.0, 2.0, 3.0] {
        let mut workbook = Workbook::open_or_create(&path)?;
        let sheet = workbook.sheet_mut("Unit_1", &HEADER);
        sheet.append_row(vec!["2024-03-01".into(), "A".into(), amps.into()])?;
        workbook.save(&path)?;
    }

    let reloaded = Workbook::open_or_create(&path)?;
    let sheet = reloaded.sheet("Unit_1").expect("sheet exists");
    let amps: Vec<&Cell> = sheet.data_rows().iter().map(|row| &row[2]).collect();
    assert_eq!(
        amps,
        vec![&Cell::Number(1.0), &Cell::Number(2.0), &Cell::Number(3.0)]
    );
    Ok(())
}

#[test]
fn saving_twice_produces_identical_formatting_metadata() -> Result<()> {
    let dir = TempDir::new()?;
    let path = scratch_path(&dir, "log.xlsx");

    let mut workbook = Workbook::open_or_create(&path)?;
    let sheet = workbook.sheet_mut("Unit_1", &HEADER);
    sheet.append_row(vec!["2024-03-01".into(), "A".into(), 12.5.into()])?;
    workbook.save(&path)?;

    let first = Workbook::open_or_create(&path)?;
    let first_widths = first.sheet("Unit_1").unwrap().column_widths();

    // Save the reloaded workbook untouched and read it back again.
    first.save(&path)?;
    let second = Workbook::open_or_create(&path)?;
    let second_sheet = second.sheet("Unit_1").unwrap();

    assert_eq!(second_sheet.column_widths(), first_widths);
    assert_eq!(second_sheet.rows, first.sheet("Unit_1").unwrap().rows);
    Ok(())
}

#[test]
fn header_row_is_never_rewritten() -> Result<()> {
    let dir = TempDir::new()?;
    let path = scratch_path(&dir, "log.xlsx");

    let mut workbook = Workbook::open_or_create(&path)?;
    workbook
        .sheet_mut("Unit_1", &HEADER)
        .append_row(vec!["2024-03-01".into(), "A".into(), 1.0.into()])?;
    workbook.save(&path)?;

    // A later submission asking for a different header must not touch row 0.
    let mut workbook = Workbook::open_or_create(&path)?;
    workbook
        .sheet_mut("Unit_1", &["X", "Y", "Z"])
        .append_row(vec!["2024-03-02".into(), "B".into(), 2.0.into()])?;
    workbook.save(&path)?;

    let reloaded = Workbook::open_or_create(&path)?;
    let sheet = reloaded.sheet("Unit_1").unwrap();
    assert_eq!(
        sheet.header().unwrap(),
        &[Cell::text("Date"), Cell::text("Shift"), Cell::text("Amps")]
    );
    assert_eq!(sheet.data_rows().len(), 2);
    Ok(())
}

#[test]
fn corrupt_file_fails_and_is_left_untouched_under_fail_policy() -> Result<()> {
    let dir = TempDir::new()?;
    let path = scratch_path(&dir, "log.xlsx");
    std::fs::write(&path, b"this is not a workbook")?;

    let result = Workbook::open_with_policy(&path, CorruptPolicy::Fail);
    assert!(result.is_err());

    let bytes = std::fs::read(&path)?;
    assert_eq!(bytes, b"this is not a workbook");
    Ok(())
}

#[test]
fn corrupt_file_is_discarded_under_start_fresh_policy() -> Result<()> {
    let dir = TempDir::new()?;
    let path = scratch_path(&dir, "log.xlsx");
    std::fs::write(&path, b"this is not a workbook")?;

    let workbook = Workbook::open_with_policy(&path, CorruptPolicy::StartFresh)?;
    assert!(workbook.sheets.is_empty());
    Ok(())
}

#[test]
fn interrupted_save_leaves_no_temp_debris_on_success() -> Result<()> {
    let dir = TempDir::new()?;
    let path = scratch_path(&dir, "log.xlsx");

    let mut workbook = Workbook::open_or_create(&path)?;
    workbook
        .sheet_mut("Unit_1", &HEADER)
        .append_row(vec!["2024-03-01".into(), "A".into(), 1.0.into()])?;
    workbook.save(&path)?;

    let entries: Vec<_> = std::fs::read_dir(dir.path())?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["log.xlsx".to_string()]);
    Ok(())
}
