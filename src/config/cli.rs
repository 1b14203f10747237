use crate::config::input::{FileInput, InlineInput, SelectedInput, StdinInput};
use crate::config::{Settings, TomlConfig};
use crate::core::OutputFormat;
use crate::utils::error::{AccumulatorError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "string-accumulator")]
#[command(about = "Sum delimited integers, with default or custom delimiters")]
pub struct CliConfig {
    /// Numbers to sum, e.g. "1,2\n3" or "//;\n1;2" (a typed \n is read as a newline)
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Read the numbers from a file
    #[arg(long)]
    pub file: Option<String>,

    /// Read the numbers from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Values above this are left out of the sum (default 1000)
    #[arg(long)]
    pub max_value: Option<i64>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Reads the config file, if any, and applies command-line overrides.
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                validation::validate_path("--config", path)?;
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                Settings::from_toml(&file_config)
            }
            None => Settings::default(),
        };

        if let Some(max_value) = self.max_value {
            settings.max_value = max_value;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }
        settings.json_logs |= self.json_logs;
        settings.verbose = self.verbose;

        settings.validate()?;
        Ok(settings)
    }

    /// Picks exactly one of the positional input, `--file` and `--stdin`.
    pub fn input_source(&self) -> Result<SelectedInput> {
        match (&self.input, &self.file, self.stdin) {
            (Some(raw), None, false) => Ok(SelectedInput::Inline(InlineInput::new(raw.clone()))),
            (None, Some(path), false) => {
                validation::validate_path("--file", path)?;
                Ok(SelectedInput::File(FileInput::new(path)))
            }
            (None, None, true) => Ok(SelectedInput::Stdin(StdinInput)),
            (None, None, false) => Err(AccumulatorError::MissingConfigError {
                field: "input".to_string(),
            }),
            _ => Err(AccumulatorError::ConfigError {
                message: "Choose only one of INPUT, --file or --stdin".to_string(),
            }),
        }
    }
}
