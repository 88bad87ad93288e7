pub mod engine;
pub mod list_pipeline;

pub use crate::domain::model::{BuildResult, Profile};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
