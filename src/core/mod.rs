pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{Header, Record};
pub use crate::domain::ports::{ConfigProvider, RowTransform};
pub use crate::utils::error::Result;
