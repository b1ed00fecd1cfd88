use crate::utils::error::{CleanError, Result};

/// 輸出欄位名稱：清洗後的電話附加在原始欄位之後
pub const CLEAN_PHONE_COLUMN: &str = "_clean_phone";

/// Header cell of the phones-only output file.
pub const PHONES_ONLY_HEADER: &str = "phone";

/// An input table materialized in memory. Header order is preserved and every
/// row carries exactly one value per header column.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV bytes into a table. Invalid UTF-8 is replaced rather than
    /// rejected, and ragged rows are padded/truncated to the header width.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(|v| v.to_string()).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| CleanError::IoError(e.into_error()))
    }

    /// 不分大小寫比對欄位名稱（前後空白視為相同），回傳第一個符合的索引
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.headers
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Outcome of one cleaning pass over a table.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Input headers plus the appended clean-phone column.
    pub headers: Vec<String>,
    /// Accepted rows in input order, each with the canonical phone appended.
    pub rows: Vec<Vec<String>>,
    /// Canonical phone values of the accepted rows, same order as `rows`.
    pub phones: Vec<String>,
    /// Number of input rows examined.
    pub scanned: usize,
}
