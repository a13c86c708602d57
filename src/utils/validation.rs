use crate::utils::error::{RenderError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 欄位清單不可為空，名稱不可空白或重複
pub fn validate_column_names<S: AsRef<str>>(field_name: &str, columns: &[S]) -> Result<()> {
    if columns.is_empty() {
        return Err(RenderError::ConfigError {
            field: field_name.to_string(),
            message: "At least one supported column is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for column in columns {
        let column = column.as_ref();
        validate_non_empty_string(field_name, column)?;
        if !seen.insert(column) {
            return Err(RenderError::InvalidConfigValue {
                field: field_name.to_string(),
                value: column.to_string(),
                reason: "Duplicate column name".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// 分隔符必須是單一 ASCII 字元
pub fn validate_delimiter(field_name: &str, value: &str) -> Result<u8> {
    let unescaped = if value == "\\t" { "\t" } else { value };
    match unescaped.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Delimiter must be a single ASCII character".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_column_names() {
        assert!(validate_column_names("columns.supported", &["title", "age"]).is_ok());
        assert!(validate_column_names::<&str>("columns.supported", &[]).is_err());
        assert!(validate_column_names("columns.supported", &["title", "  "]).is_err());

        let err = validate_column_names("columns.supported", &["title", "title"]).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "rows.csv").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        assert_eq!(validate_delimiter("input.delimiter", ",").unwrap(), b',');
        assert_eq!(validate_delimiter("input.delimiter", "\\t").unwrap(), b'\t');
        assert!(validate_delimiter("input.delimiter", ";;").is_err());
        assert!(validate_delimiter("input.delimiter", "").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("format", "json", &["csv", "tsv", "json"]).is_ok());
        assert!(validate_one_of("format", "xlsx", &["csv", "tsv", "json"]).is_err());
    }
}
