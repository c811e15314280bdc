//! Single-sheet workbook renderer.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook;

use super::error::ExportError;
use super::table::{Cell, Table};
use super::types::ExportKind;

/// Writes the header row and every data row to one sheet named after `kind`.
///
/// Amounts become numeric cells; absent values leave the cell blank.
///
/// # Errors
///
/// Returns [`ExportError::Workbook`] if the table exceeds sheet limits or
/// the encoder fails.
pub fn render_workbook(kind: ExportKind, table: &Table) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(kind.sheet_name())?;

    for (col, header) in table.headers.iter().enumerate() {
        sheet.write_string(0, column(col)?, *header)?;
    }

    for (index, row) in table.body().iter().enumerate() {
        let row_num = u32::try_from(index + 1)
            .map_err(|_| ExportError::Workbook(format!("row {index} out of range")))?;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    sheet.write_string(row_num, column(col)?, text.as_str())?;
                }
                Cell::Amount(amount) => {
                    let value = amount.to_f64().ok_or_else(|| {
                        ExportError::Workbook(format!("amount {amount} is not representable"))
                    })?;
                    sheet.write_number(row_num, column(col)?, value)?;
                }
                Cell::Empty => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn column(index: usize) -> Result<u16, ExportError> {
    u16::try_from(index).map_err(|_| ExportError::Workbook(format!("column {index} out of range")))
}
