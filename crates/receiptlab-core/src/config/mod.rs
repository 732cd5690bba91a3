//! Configuration module - receiptlab.toml loading and path resolution

pub mod consts;
mod model;

pub use model::{find_config, Config, OutputConfig, TemplateConfig};
