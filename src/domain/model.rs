use crate::utils::error::{RenderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// 預設允許渲染的欄位
pub const DEFAULT_COLUMNS: [&str; 4] = ["title", "age", "name", "referral"];

/// 一列試算表資料：欄位名稱對應任意值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&serde_json::Value> {
        self.data.get(column)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            data: map.into_iter().collect(),
        }
    }
}

/// 渲染器允許讀取的欄位集合。建立後不可修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: BTreeSet<String>,
}

impl ColumnSet {
    /// 從欄位名稱建立集合，名稱不可空白或重複
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = columns.into_iter().map(Into::into).collect();
        crate::utils::validation::validate_column_names("columns.supported", &names)?;

        Ok(Self {
            columns: names.into_iter().collect(),
        })
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    /// 不在集合內的欄位回傳 `UnsupportedColumn`
    pub fn ensure_supported(&self, column: &str) -> Result<()> {
        if self.contains(column) {
            Ok(())
        } else {
            Err(RenderError::unsupported_column(column))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_column_set() {
        let columns = ColumnSet::default();
        assert_eq!(columns.len(), 4);
        for column in DEFAULT_COLUMNS {
            assert!(columns.contains(column));
        }
        assert!(!columns.contains("zipcode"));
        assert!(!columns.contains("Title"));
    }

    #[test]
    fn test_ensure_supported() {
        let columns = ColumnSet::default();
        assert!(columns.ensure_supported("referral").is_ok());

        match columns.ensure_supported("zipcode") {
            Err(RenderError::UnsupportedColumn { column }) => assert_eq!(column, "zipcode"),
            other => panic!("expected UnsupportedColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_column_set_rejects_duplicates() {
        assert!(ColumnSet::new(["sku", "price"]).is_ok());
        assert!(ColumnSet::new(["sku", "sku"]).is_err());
        assert!(ColumnSet::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_record_from_json_object() {
        let value = json!({"title": "hello", "age": 30});
        let serde_json::Value::Object(map) = value else {
            panic!("expected object");
        };
        let record = Record::from(map);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("title"), Some(&json!("hello")));
        assert_eq!(record.get("referral"), None);
    }
}
