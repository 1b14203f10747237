use crate::core::ConfigProvider;
use crate::domain::model::{DelimiterSet, Summary};
use crate::utils::error::{AccumulatorError, Result};

/// Values above this are left out of the sum unless configured otherwise.
pub const DEFAULT_MAX_VALUE: i64 = 1000;

/// Sums delimited integer strings.
///
/// Holds only its upper bound, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    max_value: i64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self::with_max_value(DEFAULT_MAX_VALUE)
    }

    pub fn with_max_value(max_value: i64) -> Self {
        Self { max_value }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::with_max_value(config.max_value())
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    /// Sums every value in `input` that does not exceed the upper bound.
    ///
    /// Blank input sums to 0. Any negative value fails the whole call with
    /// [`AccumulatorError::NegativeValues`], listing all of them in input
    /// order.
    pub fn sum(&self, input: &str) -> Result<i64> {
        self.summarize(input).map(|summary| summary.sum)
    }

    /// Like [`Accumulator::sum`], but also reports the parsed values, the
    /// values left out for exceeding the bound, and the delimiters used.
    pub fn summarize(&self, input: &str) -> Result<Summary> {
        if input.trim().is_empty() {
            return Ok(Summary {
                sum: 0,
                values: Vec::new(),
                ignored: Vec::new(),
                delimiters: DelimiterSet::Default,
            });
        }

        let (delimiters, body) = DelimiterSet::parse(input);
        let tokens = delimiters.split(body);
        tracing::debug!(
            "Split input into {} tokens using {:?}",
            tokens.len(),
            delimiters
        );

        let values = parse_values(&tokens)?;
        reject_negatives(&values)?;

        let mut sum: i64 = 0;
        let mut ignored = Vec::new();
        for &value in &values {
            if value > self.max_value {
                ignored.push(value);
                continue;
            }
            sum = sum.checked_add(value).ok_or(AccumulatorError::Overflow)?;
        }

        if !ignored.is_empty() {
            tracing::debug!("Left {} values above {} out of the sum", ignored.len(), self.max_value);
        }

        Ok(Summary {
            sum,
            values,
            ignored,
            delimiters,
        })
    }
}

fn parse_values(tokens: &[String]) -> Result<Vec<i64>> {
    tokens
        .iter()
        .map(|token| {
            token.parse::<i64>().map_err(|source| AccumulatorError::Parse {
                token: token.clone(),
                source,
            })
        })
        .collect()
}

fn reject_negatives(values: &[i64]) -> Result<()> {
    let negatives: Vec<i64> = values.iter().copied().filter(|v| *v < 0).collect();
    if negatives.is_empty() {
        Ok(())
    } else {
        Err(AccumulatorError::NegativeValues { values: negatives })
    }
}

/// Sums `input` with the default upper bound of 1000.
pub fn sum(input: &str) -> Result<i64> {
    Accumulator::new().sum(input)
}
