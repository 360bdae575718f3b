use rust_xlsxwriter::{Format, Workbook};

use crate::core::models::export::Sheet;
use crate::core::ports::exporter::SheetWriter;
use crate::error::Error;

pub static XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Writes a single-sheet `.xlsx` workbook, header row in bold.
#[derive(Debug, Default)]
pub struct XlsxWriter;

impl SheetWriter for XlsxWriter {
    fn write(&self, sheet: &Sheet) -> Result<Vec<u8>, Error> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let bold = Format::new().set_bold();
        for (col, title) in sheet.header.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, title, &bold)?;
        }
        for (row, cells) in sheet.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                worksheet.write_string(row as u32 + 1, col as u16, cell)?;
            }
        }
        Ok(workbook.save_to_buffer()?)
    }
}
