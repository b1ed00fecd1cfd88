pub mod engine;
pub mod normalizer;
pub mod pipeline;
pub mod remap;

pub use crate::domain::model::{CleanResult, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
