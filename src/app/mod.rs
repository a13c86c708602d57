use crate::adapters::open_source;
use crate::config::Settings;
use crate::core::render::{display_value, ColumnRenderer};
use crate::utils::error::Result;

/// 讀取輸入檔並渲染指定欄位，每列一個字串
pub fn render_column(settings: &Settings) -> Result<Vec<String>> {
    let renderer = ColumnRenderer::new(settings.columns.clone());

    // 讀檔前先確認欄位，不支援的欄位不需要觸碰輸入
    renderer.columns().ensure_supported(&settings.column)?;

    let source = open_source(&settings.input, settings.format, settings.delimiter);
    let records = source.read_records()?;

    let rendered = renderer.render_all(&records, &settings.column)?;
    tracing::info!(
        "Rendered column '{}' for {} rows",
        settings.column,
        rendered.len()
    );

    Ok(rendered.into_iter().map(display_value).collect())
}
