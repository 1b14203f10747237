#[cfg(feature = "cli")]
pub mod cli;
pub mod input;
pub mod toml_config;

use crate::core::accumulator::DEFAULT_MAX_VALUE;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Effective settings after merging the config file with command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_value: i64,
    pub output_format: OutputFormat,
    pub log_level: Option<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_value: DEFAULT_MAX_VALUE,
            output_format: OutputFormat::Text,
            log_level: None,
            json_logs: false,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            max_value: config.max_value(),
            output_format: config.output_format(),
            log_level: config.log_level().map(str::to_owned),
            json_logs: config.json_logs(),
            verbose: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn max_value(&self) -> i64 {
        self.max_value
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("max_value", self.max_value, 0, i64::MAX)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("logging.level", level, &toml_config::LOG_LEVELS)?;
        }
        Ok(())
    }
}
