use crate::core::normalizer::{digit_count, normalize_phone, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
use crate::core::{CleanResult, ConfigProvider, Pipeline, Storage, Table};
use crate::domain::model::{CLEAN_PHONE_COLUMN, PHONES_ONLY_HEADER};
use crate::utils::error::{CleanError, Result};
use std::collections::HashSet;
use std::path::Path;

pub struct CleanPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CleanPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CleanPipeline<S, C> {
    async fn extract(&self) -> Result<Table> {
        let path = self.config.input_path();

        if !self.storage.exists(path).await {
            return Err(CleanError::InputNotFound {
                path: path.to_string(),
            });
        }

        tracing::debug!("Reading input CSV: {}", path);
        let bytes = self.storage.read_file(path).await?;
        let table = Table::from_csv_bytes(&bytes)?;

        tracing::debug!(
            "Parsed {} rows with {} columns",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    async fn transform(&self, table: Table) -> Result<CleanResult> {
        let phone_col = table
            .column_index(self.config.phone_column())
            .ok_or_else(|| CleanError::ColumnNotFound {
                column: self.config.phone_column().to_string(),
                available: table.headers.clone(),
            })?;

        let country = self.config.country_code();
        let max = self.config.max_rows();
        let scanned = table.rows.len();

        let mut seen: HashSet<String> = HashSet::new();
        let mut rows = Vec::new();
        let mut phones = Vec::new();

        // 逐列套用規則，順序固定：上限、空值、正規化、位數、去重
        for mut row in table.rows {
            if max > 0 && rows.len() >= max {
                break;
            }

            let raw = &row[phone_col];
            if raw.trim().is_empty() {
                continue;
            }

            let Some(normalized) = normalize_phone(raw, country) else {
                continue;
            };

            let ndigits = digit_count(&normalized);
            if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&ndigits) {
                continue;
            }

            if !seen.insert(normalized.clone()) {
                continue;
            }

            row.push(normalized.clone());
            rows.push(row);
            phones.push(normalized);
        }

        let mut headers = table.headers;
        headers.push(CLEAN_PHONE_COLUMN.to_string());

        tracing::debug!("Accepted {} of {} rows", rows.len(), scanned);

        Ok(CleanResult {
            headers,
            rows,
            phones,
            scanned,
        })
    }

    async fn load(&self, result: CleanResult) -> Result<String> {
        let output_path = expand_timestamp(self.config.output_path());

        let full = Table {
            headers: result.headers,
            rows: result.rows,
        };
        self.storage
            .write_file(&output_path, &full.to_csv_bytes()?)
            .await?;
        tracing::debug!("Wrote cleaned CSV to {}", output_path);

        if self.config.phones_only() {
            let phones_path = phones_only_path(&output_path);
            let phones = Table {
                headers: vec![PHONES_ONLY_HEADER.to_string()],
                rows: result.phones.into_iter().map(|p| vec![p]).collect(),
            };
            self.storage
                .write_file(&phones_path, &phones.to_csv_bytes()?)
                .await?;
            tracing::info!("📞 Phone-only list saved to: {}", phones_path);
        }

        Ok(output_path)
    }
}

/// 輸出路徑支援 {timestamp} 佔位符
fn expand_timestamp(path: &str) -> String {
    if path.contains("{timestamp}") {
        path.replace(
            "{timestamp}",
            &chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string(),
        )
    } else {
        path.to_string()
    }
}

/// Phones-only file sits next to the full output: `<stem>-phones.csv`.
fn phones_only_path(output: &str) -> String {
    let path = Path::new(output);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cleaned");
    path.with_file_name(format!("{}-phones.csv", stem))
        .to_string_lossy()
        .into_owned()
}
