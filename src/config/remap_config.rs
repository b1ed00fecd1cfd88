use crate::core::remap::ColumnMapping;
use crate::utils::error::{CleanError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML 欄位映射配置：
///
/// ```toml
/// [[columns]]
/// source = "Owner 1 First Name"
/// target = "First Name"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemapConfig {
    pub columns: Vec<ColumnConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub source: String,
    pub target: String,
}

impl RemapConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CleanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CleanError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn mappings(&self) -> Vec<ColumnMapping> {
        self.columns
            .iter()
            .map(|c| ColumnMapping::new(&c.source, &c.target))
            .collect()
    }
}

impl Validate for RemapConfig {
    fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(CleanError::MissingConfigError {
                field: "columns".to_string(),
            });
        }

        for (i, column) in self.columns.iter().enumerate() {
            validate_non_empty_string(&format!("columns[{}].source", i), &column.source)?;
            validate_non_empty_string(&format!("columns[{}].target", i), &column.target)?;
        }

        Ok(())
    }
}
