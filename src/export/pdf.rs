//! Plain paginated PDF listing: name, process number, and status label,
//! one process per line. No table styling.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::fields;
use crate::models::Process;

use super::ExportQuery;

pub fn render(
    processes: &[Process],
    table_name: &str,
    query: &ExportQuery,
) -> Result<Vec<u8>, String> {
    // A4 portrait; y runs bottom-up.
    let (doc, first_page, first_layer) = PdfDocument::new(
        super::title(table_name, query),
        Mm(210.0),
        Mm(297.0),
        "listagem",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| e.to_string())?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| e.to_string())?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = 280.0;

    layer.use_text(super::title(table_name, query), 12.0, Mm(15.0), Mm(y), &bold);
    y -= 14.0;

    for process in processes {
        if y < 20.0 {
            let (page, page_layer) = doc.add_page(Mm(210.0), Mm(297.0), "listagem");
            layer = doc.get_page(page).get_layer(page_layer);
            y = 280.0;
        }
        let status = fields::status_label(process.status.as_deref());
        let line = format!("{} - {} - {}", process.name, process.process_number, status);
        layer.use_text(line, 10.0, Mm(15.0), Mm(y), &font);
        y -= 7.0;
    }

    doc.save_to_bytes().map_err(|e| e.to_string())
}
