use crate::adapters::InputFormat;
use crate::core::{ColumnConfig, ColumnSet};
use crate::utils::error::{RenderError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub columns: ColumnsConfig,
    pub input: Option<InputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnsConfig {
    pub supported: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub format: Option<String>,
    /// 單一字元，`"\t"` 或 `"\\t"` 皆可
    pub delimiter: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading configuration from: {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RenderError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EXTRA_COLUMN})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn input_format(&self) -> Result<Option<InputFormat>> {
        self.input
            .as_ref()
            .and_then(|input| input.format.as_deref())
            .map(InputFormat::parse)
            .transpose()
    }

    pub fn delimiter(&self) -> Result<Option<u8>> {
        self.input
            .as_ref()
            .and_then(|input| input.delimiter.as_deref())
            .map(|d| validation::validate_delimiter("input.delimiter", d))
            .transpose()
    }
}

impl ColumnConfig for TomlConfig {
    fn supported_columns(&self) -> Result<ColumnSet> {
        ColumnSet::new(self.columns.supported.iter().cloned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_column_names("columns.supported", &self.columns.supported)?;
        if let Some(format) = self.input.as_ref().and_then(|i| i.format.as_deref()) {
            validation::validate_one_of(
                "input.format",
                &format.to_ascii_lowercase(),
                &InputFormat::NAMES,
            )?;
        }
        if let Some(delimiter) = self.delimiter()? {
            // 分隔符只對 CSV 有效：TSV 固定為 tab，JSON 沒有分隔符
            match self.input_format()? {
                Some(InputFormat::Tsv) | Some(InputFormat::Json) => {
                    return Err(RenderError::InvalidConfigValue {
                        field: "input.delimiter".to_string(),
                        value: (delimiter as char).escape_default().to_string(),
                        reason: "A delimiter can only be set when input.format is csv"
                            .to_string(),
                    });
                }
                Some(InputFormat::Csv) | None => {}
            }
        }
        Ok(())
    }
}
