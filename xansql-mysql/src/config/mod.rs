//! Dialect configuration

pub mod defaults;
mod settings;

pub use settings::{ConnectionOptions, DialectConfig, FileConfig, PoolConfig};
