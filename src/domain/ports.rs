use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

/// Where the raw accumulator input comes from.
pub trait InputSource: Send + Sync {
    fn read_input(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn max_value(&self) -> i64;
    fn output_format(&self) -> OutputFormat;
}
