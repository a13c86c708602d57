#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::adapters::InputFormat;
use crate::core::ColumnSet;
use std::path::PathBuf;

/// 啟動時決定一次的執行設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub column: String,
    pub format: InputFormat,
    pub delimiter: Option<u8>,
    pub columns: ColumnSet,
}
