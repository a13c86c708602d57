use crate::domain::ports::Fields;

/// 從每筆記錄取出同一欄位，保留順序與長度。
///
/// 欄位由 `field` 的型別保證存在，因此不會失敗。
pub fn pluck<'a, T, V, F>(records: &'a [T], field: F) -> Vec<V>
where
    F: FnMut(&'a T) -> V,
{
    records.iter().map(field).collect()
}

pub fn pluck_iter<'a, T, V, F>(records: &'a [T], field: F) -> impl Iterator<Item = V> + 'a
where
    F: FnMut(&'a T) -> V + 'a,
{
    records.iter().map(field)
}

/// 以封閉的欄位鍵取值，例如 `pluck_field(&songs, SongField::Title)`
pub fn pluck_field<T: Fields>(records: &[T], key: T::Key) -> Vec<T::Value<'_>> {
    records.iter().map(|record| record.field(key)).collect()
}
