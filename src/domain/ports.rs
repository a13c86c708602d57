use crate::domain::model::{ColumnSet, Record};
use crate::utils::error::Result;

/// 具有封閉欄位集合的強型別記錄。
///
/// `Key` 列舉出所有欄位，因此 `pluck_field` 不需要執行期檢查：
/// 不存在的欄位無法被表達。
pub trait Fields {
    type Key: Copy;
    type Value<'a>
    where
        Self: 'a;

    fn field(&self, key: Self::Key) -> Self::Value<'_>;
}

/// 提供待渲染記錄的來源
pub trait RecordSource {
    fn read_records(&self) -> Result<Vec<Record>>;
}

pub trait ColumnConfig {
    /// 建立允許清單，只在啟動時呼叫一次
    fn supported_columns(&self) -> Result<ColumnSet>;
}
