use serde::{Deserialize, Serialize};

/// Separators in effect for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "literals", rename_all = "snake_case")]
pub enum DelimiterSet {
    /// Comma and newline.
    Default,
    /// Literals declared in a `//<a>|<b>\n` header, in header order.
    Custom(Vec<String>),
}

/// Detailed outcome of a successful accumulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub sum: i64,
    pub values: Vec<i64>,
    pub ignored: Vec<i64>,
    pub delimiters: DelimiterSet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}
