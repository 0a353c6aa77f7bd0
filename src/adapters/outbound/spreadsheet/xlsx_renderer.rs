use crate::inspection::domain::{ReportRow, REPORT_COLUMNS};
use crate::ports::outbound::ReportRenderer;
use crate::shared::Result;
use anyhow::Context;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};

pub const SHEET_NAME: &str = "Inspection Results";

const COLUMN_WIDTHS: [f64; 11] = [7.0, 14.0, 28.0, 14.0, 22.0, 10.0, 8.0, 10.0, 10.0, 10.0, 8.0];

/// Columns holding measurements: Value, Standard, Upper Limit, Lower Limit
const NUMERIC_COLUMNS: [usize; 4] = [5, 7, 8, 9];

const HEADER_FILL: u32 = 0x1F4E79;
const GROUP_FILL: u32 = 0x2F2F2F;

/// XlsxReportRenderer adapter writing the two-tier report as an xlsx workbook
///
/// One sheet, a styled header row frozen at the top, dark group rows and
/// plain detail rows. Measurement cells that parse as numbers are written
/// as numeric cells.
pub struct XlsxReportRenderer;

impl XlsxReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn banded(fill: u32, align: FormatAlign) -> Format {
        Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(fill))
            .set_align(align)
    }

    fn numeric(text: &str) -> Option<f64> {
        text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn write_header(sheet: &mut Worksheet) -> Result<()> {
        let header = Self::banded(HEADER_FILL, FormatAlign::Center);
        for (col, title) in REPORT_COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header)?;
        }
        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            sheet.set_column_width(col as u16, *width)?;
        }
        sheet.set_freeze_panes(1, 0)?;
        Ok(())
    }

    fn write_row(sheet: &mut Worksheet, row_num: u32, row: &ReportRow, group: &Format) -> Result<()> {
        for (col, text) in row.cells().iter().enumerate() {
            let c = col as u16;
            if row.is_group() {
                sheet.write_string_with_format(row_num, c, *text, group)?;
                continue;
            }
            match NUMERIC_COLUMNS
                .contains(&col)
                .then(|| Self::numeric(text))
                .flatten()
            {
                Some(number) => sheet.write_number(row_num, c, number)?,
                None => sheet.write_string(row_num, c, *text)?,
            };
        }
        Ok(())
    }
}

impl Default for XlsxReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for XlsxReportRenderer {
    fn render(&self, rows: &[ReportRow]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        {
            let sheet = workbook.add_worksheet();
            sheet.set_name(SHEET_NAME)?;
            Self::write_header(sheet)?;

            let group = Self::banded(GROUP_FILL, FormatAlign::Left);
            for (i, row) in rows.iter().enumerate() {
                Self::write_row(sheet, i as u32 + 1, row, &group)?;
            }
        }
        tracing::debug!(rows = rows.len(), "rendered report workbook");
        workbook
            .save_to_buffer()
            .context("Failed to serialize the report workbook")
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}
