use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

/// Extra characters added to the longest cell when sizing a column.
pub const COLUMN_PADDING: usize = 2;

/// Uniform cell format: thin border, centered, word wrap.
pub fn body_format() -> Format {
    Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
}

/// Header row format: the uniform cell format plus bold.
pub fn header_format() -> Format {
    body_format().set_bold()
}
