use crate::core::truthy::is_truthy;
use crate::domain::model::{ColumnSet, Record};
use crate::utils::error::Result;
use serde_json::Value;

static EMPTY_CELL: Value = Value::String(String::new());

/// 依允許清單讀取單一欄位的渲染器。
///
/// 欄位不存在與欄位為假值（`0`、`""`、`null`、`false`）都渲染為空字串，
/// 呼叫端無法區分兩者。
#[derive(Debug, Clone, Default)]
pub struct ColumnRenderer {
    columns: ColumnSet,
}

impl ColumnRenderer {
    pub fn new(columns: ColumnSet) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// 回傳 `record[key]`，不存在或為假值時回傳空字串。
    ///
    /// `key` 不在允許清單內時回傳 `UnsupportedColumn`，不會讀取記錄。
    pub fn render<'r>(&self, record: &'r Record, key: &str) -> Result<&'r Value> {
        self.columns.ensure_supported(key)?;

        Ok(match record.get(key) {
            Some(value) if is_truthy(value) => value,
            _ => &EMPTY_CELL,
        })
    }

    /// 同 `render`，字串不加引號，其他值輸出為 JSON
    pub fn render_text(&self, record: &Record, key: &str) -> Result<String> {
        Ok(display_value(self.render(record, key)?))
    }

    /// 先檢查一次欄位，再依輸入順序渲染每一筆記錄
    pub fn render_all<'r>(&self, records: &'r [Record], key: &str) -> Result<Vec<&'r Value>> {
        self.columns.ensure_supported(key)?;
        records.iter().map(|record| self.render(record, key)).collect()
    }
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
