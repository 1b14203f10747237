use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccumulatorError {
    #[error("Negatives not allowed : {}", join_values(.values))]
    NegativeValues { values: Vec<i64> },

    #[error("Malformed token '{token}': {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Sum exceeds the supported integer range")]
    Overflow,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, AccumulatorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl AccumulatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NegativeValues { .. } => ErrorCategory::Validation,
            Self::Parse { .. } | Self::Overflow => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NegativeValues { .. } => self.to_string(),
            Self::Parse { token, .. } => format!("'{}' is not a whole number", token),
            Self::Overflow => "The numbers add up to more than a 64-bit integer can hold".to_string(),
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
            Self::ConfigError { message } => message.clone(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("No {} was given", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::NegativeValues { .. } => "Remove the negative numbers from the input",
            Self::Parse { .. } => {
                "Separate numbers with ',' or newline, or declare delimiters with a '//<delims>\\n' header"
            }
            Self::Overflow => "Lower --max-value or split the input",
            Self::IoError(_) => "Check that the input file exists and is readable",
            Self::SerializationError(_) => "Retry with --format text",
            Self::ConfigError { .. } | Self::MissingConfigError { .. } => {
                "Pass the numbers as an argument, with --file, or with --stdin"
            }
            Self::InvalidConfigValueError { .. } => "Fix the value in the config file or on the command line",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_message_keeps_encounter_order() {
        let err = AccumulatorError::NegativeValues {
            values: vec![-1000, -2000],
        };
        assert_eq!(err.to_string(), "Negatives not allowed : -1000,-2000");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_parse_error_names_token() {
        let source = "x1".parse::<i64>().unwrap_err();
        let err = AccumulatorError::Parse {
            token: "x1".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Malformed token 'x1'"));
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_severity_maps_to_exit_code() {
        let config = AccumulatorError::MissingConfigError {
            field: "input".to_string(),
        };
        assert_eq!(config.severity(), ErrorSeverity::Medium);
        assert_eq!(config.exit_code(), 2);

        let io = AccumulatorError::IoError(std::io::Error::other("boom"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }
}
