//! Delimited-text export: `;` as field delimiter and a UTF-8 byte-order
//! mark so regional spreadsheet defaults open the file correctly.

use csv::{QuoteStyle, WriterBuilder};

use crate::models::Process;

use super::{row_values, ExportQuery, COLUMNS};

const BOM: &[u8] = b"\xef\xbb\xbf";

pub fn render(processes: &[Process], table_name: &str, query: &ExportQuery) -> Vec<u8> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    // Writer over a Vec never fails; errors are only possible mid-record.
    let _ = writer.write_record([super::title(table_name, query).as_str()]);
    let _ = writer.write_record(COLUMNS);
    for process in processes {
        let _ = writer.write_record(row_values(process));
    }

    let body = writer.into_inner().unwrap_or_default();
    let mut out = Vec::with_capacity(BOM.len() + body.len());
    out.extend_from_slice(BOM);
    out.extend_from_slice(&body);
    out
}
