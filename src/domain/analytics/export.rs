use chrono::{DateTime, Utc};

use crate::domain::errors::{AppError, ExportResult};
use crate::domain::sales::SalesRecord;
use crate::time_utils::report_date;

pub const CSV_HEADER: [&str; 5] = ["Date", "Revenue", "Category", "Department", "Quantity"];
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Serializes records as CSV: header row, then one row per record, lines
/// joined by `\n` with no newline after the last one
pub fn sales_to_csv(records: &[SalesRecord]) -> ExportResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(64 * (records.len() + 1)));

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.timestamp_iso(),
            record.revenue.value().to_string(),
            record.category.to_string(),
            record.department.to_string(),
            record.quantity.value().to_string(),
        ])?;
    }

    let mut bytes = writer.into_inner().map_err(|e| AppError::ExportError(e.to_string()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(|e| AppError::ExportError(e.to_string()))
}

/// `sales_report_<YYYY-MM-DD>.csv`
pub fn report_file_name(now: DateTime<Utc>) -> String {
    format!("sales_report_{}.csv", report_date(now))
}
