use anyhow::Result;
use column_render::{ColumnRenderer, ColumnSet, Record, RenderError, DEFAULT_COLUMNS};
use serde_json::{json, Value};

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => Record::from(map),
        other => panic!("expected object, got {}", other),
    }
}

fn sample_rows() -> Vec<Record> {
    vec![
        Record::default(),
        record(json!({"title": "hello", "age": 30})),
        record(json!({"title": "", "age": 0, "name": null, "referral": false})),
        record(json!({"title": [1], "age": -2.5, "name": "x", "referral": {"by": "ann"}})),
        record(json!({"zipcode": "12345", "extra": true})),
    ]
}

/// 允許清單內的欄位對任何記錄都不會失敗
#[test]
fn test_supported_keys_never_fail() -> Result<()> {
    let renderer = ColumnRenderer::default();
    for row in &sample_rows() {
        for column in DEFAULT_COLUMNS {
            renderer.render(row, column)?;
        }
    }
    Ok(())
}

#[test]
fn test_unsupported_keys_always_fail() {
    let renderer = ColumnRenderer::default();
    for row in &sample_rows() {
        for column in ["zipcode", "extra", "", "Title", "title "] {
            match renderer.render(row, column) {
                Err(RenderError::UnsupportedColumn { column: rejected }) => {
                    assert_eq!(rejected, column)
                }
                other => panic!("expected UnsupportedColumn for {:?}, got {:?}", column, other),
            }
        }
    }
}

#[test]
fn test_truthy_returns_stored_value_and_falsy_returns_empty() -> Result<()> {
    let renderer = ColumnRenderer::default();
    for row in &sample_rows() {
        for column in DEFAULT_COLUMNS {
            let rendered = renderer.render(row, column)?;
            match row.get(column) {
                Some(value) if column_render::core::truthy::is_truthy(value) => {
                    assert_eq!(rendered, value)
                }
                _ => assert_eq!(rendered, &json!("")),
            }
        }
    }
    Ok(())
}

#[test]
fn test_concrete_scenarios() -> Result<()> {
    let renderer = ColumnRenderer::default();

    assert_eq!(
        renderer.render(&record(json!({"title": "hello", "age": 30})), "referral")?,
        &json!("")
    );
    assert_eq!(
        renderer.render(&record(json!({"title": "hello"})), "title")?,
        &json!("hello")
    );
    assert_eq!(renderer.render(&record(json!({"age": 0})), "age")?, &json!(""));
    assert!(matches!(
        renderer.render(&record(json!({"name": "x"})), "zipcode"),
        Err(RenderError::UnsupportedColumn { .. })
    ));
    Ok(())
}

#[test]
fn test_rendering_does_not_modify_record() -> Result<()> {
    let renderer = ColumnRenderer::default();
    let row = record(json!({"title": "hello", "age": 0}));
    let before = row.clone();

    renderer.render(&row, "age")?;
    renderer.render(&row, "referral")?;
    let _ = renderer.render(&row, "zipcode");

    assert_eq!(row, before);
    Ok(())
}

#[test]
fn test_custom_column_set_from_config_values() -> Result<()> {
    let renderer = ColumnRenderer::new(ColumnSet::new(["sku", "price"])?);
    let row = record(json!({"sku": "A-1", "price": 0, "title": "hello"}));

    assert_eq!(renderer.render_text(&row, "sku")?, "A-1");
    assert_eq!(renderer.render_text(&row, "price")?, "");
    assert!(renderer.render(&row, "title").is_err());
    Ok(())
}
