pub mod pluck;
pub mod render;
pub mod truthy;

pub use crate::domain::model::{ColumnSet, Record};
pub use crate::domain::ports::{ColumnConfig, Fields, RecordSource};
pub use crate::utils::error::Result;
