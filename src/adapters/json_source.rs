use crate::core::{Record, RecordSource, Result};
use crate::utils::error::RenderError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse_str(content: &str) -> Result<Vec<Record>> {
        let json_data: serde_json::Value = serde_json::from_str(content)?;
        Self::from_value(json_data)
    }

    /// 物件陣列每個物件一筆；單一物件視為一筆
    pub fn from_value(json_data: serde_json::Value) -> Result<Vec<Record>> {
        match json_data {
            serde_json::Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    if let serde_json::Value::Object(obj) = item {
                        records.push(Record::from(obj));
                    } else {
                        tracing::warn!("Skipping non-object element at index {}", index);
                    }
                }
                Ok(records)
            }
            serde_json::Value::Object(obj) => Ok(vec![Record::from(obj)]),
            other => Err(RenderError::ProcessingError {
                message: format!(
                    "Expected a JSON object or an array of objects, found {}",
                    json_kind(&other)
                ),
            }),
        }
    }
}

impl RecordSource for JsonSource {
    fn read_records(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading JSON rows from: {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        let records = Self::parse_str(&content)?;
        tracing::info!("Read {} rows from {}", records.len(), self.path.display());
        Ok(records)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
