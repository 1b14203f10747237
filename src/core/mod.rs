pub mod accumulator;
pub mod delimiter;

pub use crate::domain::model::{DelimiterSet, OutputFormat, Summary};
pub use crate::domain::ports::{ConfigProvider, InputSource};
pub use crate::utils::error::Result;
