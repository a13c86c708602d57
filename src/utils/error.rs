use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unsupported column: {column}")]
    UnsupportedColumn { column: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 請求的欄位不在允許清單中
    Domain,
    Configuration,
    /// 輸入檔案讀取或解析失敗
    Input,
}

impl RenderError {
    pub fn unsupported_column(column: impl Into<String>) -> Self {
        Self::UnsupportedColumn {
            column: column.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedColumn { .. } => ErrorCategory::Domain,
            Self::ConfigError { .. } | Self::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            Self::CsvError(_)
            | Self::IoError(_)
            | Self::SerializationError(_)
            | Self::ProcessingError { .. } => ErrorCategory::Input,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UnsupportedColumn { column } => {
                format!("Column '{}' is not in the supported column set", column)
            }
            Self::ConfigError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValue { field, value, .. } => {
                format!("'{}' is not a valid value for '{}'", value, field)
            }
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::CsvError(e) => format!("Input is not valid CSV: {}", e),
            Self::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            Self::ProcessingError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Domain => {
                "Request one of the supported columns, or add the column to [columns].supported"
            }
            ErrorCategory::Configuration => "Check the TOML file and command line flags",
            ErrorCategory::Input => "Check that the input file exists and matches --format",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Domain | ErrorCategory::Configuration => 1,
            ErrorCategory::Input => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
