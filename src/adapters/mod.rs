// Adapters layer: concrete record sources backed by files.

pub mod csv_source;
pub mod json_source;

pub use csv_source::CsvSource;
pub use json_source::JsonSource;

use crate::core::{RecordSource, Result};
use crate::utils::error::RenderError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    Json,
}

impl InputFormat {
    pub const NAMES: [&'static str; 3] = ["csv", "tsv", "json"];

    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            _ => Err(RenderError::InvalidConfigValue {
                field: "input.format".to_string(),
                value: name.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }

    /// 依副檔名推斷，無法判斷時使用 CSV
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| Self::parse(ext).ok())
            .unwrap_or(Self::Csv)
    }
}

/// `delimiter` 只對 CSV 有效；TSV 固定為 tab
pub fn open_source(
    path: &Path,
    format: InputFormat,
    delimiter: Option<u8>,
) -> Box<dyn RecordSource> {
    if let (Some(d), InputFormat::Tsv | InputFormat::Json) = (delimiter, format) {
        tracing::warn!(
            "Ignoring delimiter '{}' for {:?} input",
            (d as char).escape_default(),
            format
        );
    }

    match format {
        InputFormat::Csv => {
            Box::new(CsvSource::new(path).with_delimiter(delimiter.unwrap_or(b',')))
        }
        InputFormat::Tsv => Box::new(CsvSource::new(path).with_delimiter(b'\t')),
        InputFormat::Json => Box::new(JsonSource::new(path)),
    }
}
