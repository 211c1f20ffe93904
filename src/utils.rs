use csv::{ReaderBuilder, Trim};

use crate::error::AppError;

// Only .csv uploads are accepted
pub fn is_csv_filename(filename: &str) -> bool {
    let bytes = filename.as_bytes();
    bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".csv")
}

/// Splits uploaded CSV bytes into trimmed records. There is no header row and
/// records may have any number of fields.
pub fn read_csv_rows(data: &[u8]) -> Result<Vec<Vec<String>>, AppError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
