//! Sums delimited integer strings such as `"1,2\n3"` or `"//;\n1;2"`.
//!
//! ```
//! assert_eq!(string_accumulator::sum("//*|%\n1*2%3").unwrap(), 6);
//! assert_eq!(string_accumulator::sum("2,1001").unwrap(), 2);
//! assert!(string_accumulator::sum("1,-2").is_err());
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{Settings, TomlConfig};

pub use core::accumulator::{sum, Accumulator, DEFAULT_MAX_VALUE};
pub use core::delimiter::tokenize;
pub use domain::model::{DelimiterSet, OutputFormat, Summary};
pub use domain::ports::{ConfigProvider, InputSource};
pub use utils::error::{AccumulatorError, Result};
