//! XLSX text extraction via calamine. Cells are joined by spaces, rows by
//! newlines, and sheets separated by a blank line.

use crate::OfficeError;
use calamine::{Reader, Xlsx};
use std::io::Cursor;

pub(crate) fn extract(data: &[u8]) -> Result<String, OfficeError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))?;
    let mut sheets = Vec::new();

    for sheet_name in workbook.sheet_names().to_owned() {
        if let Some(Ok(range)) = workbook.worksheet_range(&sheet_name) {
            let mut text = String::new();
            for row in range.rows() {
                let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
                text.push_str(&cells.join(" "));
                text.push('\n');
            }
            sheets.push(text.trim_end().to_string());
        }
    }

    Ok(sheets.join("\n\n"))
}
