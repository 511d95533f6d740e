pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::GenEngine, pipeline::BoardPipeline};
pub use utils::error::{BoardGenError, Result};
