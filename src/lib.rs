pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::pluck::{pluck, pluck_field, pluck_iter};
pub use crate::core::render::ColumnRenderer;
pub use domain::model::{ColumnSet, Record, DEFAULT_COLUMNS};
pub use utils::error::{RenderError, Result};
