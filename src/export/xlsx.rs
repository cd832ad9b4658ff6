//! Styled .xlsx export. The styling (header fill, frozen panes, shading,
//! column widths, wrapping) is cosmetic only and never changes cell values.

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};

use crate::models::Process;

use super::{row_values, ExportQuery, COLUMNS};

const HEADER_FILL: Color = Color::RGB(0x4472C4);
const STRIPE_FILL: Color = Color::RGB(0xD9E1F2);

const COLUMN_WIDTHS: [f64; 10] = [28.0, 14.0, 18.0, 16.0, 16.0, 10.0, 10.0, 16.0, 40.0, 40.0];

pub fn render(
    processes: &[Process],
    table_name: &str,
    query: &ExportQuery,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let title_format = Format::new().set_bold().set_font_size(13);
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_FILL)
        .set_border(FormatBorder::Thin);
    let stripe_format = Format::new().set_background_color(STRIPE_FILL);
    let stripe_wrap_format = Format::new()
        .set_background_color(STRIPE_FILL)
        .set_text_wrap();
    let wrap_format = Format::new().set_text_wrap();

    worksheet.write_with_format(0, 0, super::title(table_name, query), &title_format)?;

    for (col, label) in COLUMNS.iter().enumerate() {
        worksheet.write_with_format(1, col as u16, *label, &header_format)?;
    }

    for (i, process) in processes.iter().enumerate() {
        let row = 2 + i as u32;
        let striped = i % 2 == 1;
        for (col, value) in row_values(process).iter().enumerate() {
            // Assunto and Observações hold long text; wrap them.
            let wrapped = col >= 8;
            let format = match (striped, wrapped) {
                (true, true) => Some(&stripe_wrap_format),
                (true, false) => Some(&stripe_format),
                (false, true) => Some(&wrap_format),
                (false, false) => None,
            };
            match format {
                Some(format) => {
                    worksheet.write_with_format(row, col as u16, value.as_str(), format)?;
                }
                None => {
                    worksheet.write(row, col as u16, value.as_str())?;
                }
            }
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    // Keep title and header visible while scrolling.
    worksheet.set_freeze_panes(2, 0)?;

    workbook.save_to_buffer()
}
