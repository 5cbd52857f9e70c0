pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{pipeline::CsvPipeline, transform::IdentityTransform};
pub use domain::model::{Header, Record};
pub use domain::ports::{ConfigProvider, RowTransform};
pub use utils::error::{PipelineError, Result};
