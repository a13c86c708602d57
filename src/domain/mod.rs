// Domain layer: records, the supported column set, typed catalog records and ports.

pub mod catalog;
pub mod model;
pub mod ports;
