use crate::core::{Record, RecordSource, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

/// 以 CSV/TSV 檔案作為記錄來源，第一列為標題
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 從任意 reader 解析
    pub fn parse_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Record>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        tracing::debug!("CSV headers: {:?}", headers);

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let mut data = HashMap::with_capacity(headers.len());
            // 較短的列只帶出實際存在的欄位
            for (header, cell) in headers.iter().zip(row.iter()) {
                data.insert(header.to_string(), parse_cell(cell));
            }
            records.push(Record { data });
        }

        Ok(records)
    }
}

impl RecordSource for CsvSource {
    fn read_records(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading CSV rows from: {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        let records = Self::parse_reader(file, self.delimiter)?;
        tracing::info!("Read {} rows from {}", records.len(), self.path.display());
        Ok(records)
    }
}

/// 儲存格轉成 JSON 值：空字串保留、數字與布林轉型、其餘為字串
pub fn parse_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::String(String::new());
    }

    match cell {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(i) = cell.parse::<i64>() {
        return Value::Number(i.into());
    }

    if let Ok(f) = cell.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }

    Value::String(cell.to_string())
}
