//! Word counting and target-range parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ArticleError;

/// Number of whitespace-separated tokens in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Inclusive target range for a section's length, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRange {
    pub min: usize,
    pub max: usize,
}

impl WordRange {
    pub fn new(min: usize, max: usize) -> Result<Self, ArticleError> {
        if max == 0 {
            return Err(ArticleError::InvalidWordCount(
                "maximum must be at least one word".to_string(),
            ));
        }
        if min > max {
            return Err(ArticleError::InvalidWordCount(format!(
                "minimum {min} is greater than maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// A single target value: both bounds are `count`.
    pub fn exact(count: usize) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl fmt::Display for WordRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{} to {}", self.min, self.max)
        }
    }
}

impl FromStr for WordRange {
    type Err = ArticleError;

    /// Accepts `"150"` or `"100 to 200"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ArticleError::InvalidWordCount(format!(
                "expected a number or \"<min> to <max>\", got {s:?}"
            ))
        };
        let parse_bound = |part: &str| part.trim().parse::<usize>().map_err(|_| invalid());

        match s.split_once("to") {
            Some((min, max)) => Self::new(parse_bound(min)?, parse_bound(max)?),
            None => parse_bound(s).and_then(|count| Self::new(count, count)),
        }
    }
}

/// A word count as callers send it: a bare number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordCountSpec {
    Count(u64),
    Text(String),
}

impl WordCountSpec {
    pub fn to_range(&self) -> Result<WordRange, ArticleError> {
        match self {
            WordCountSpec::Count(count) => {
                let count = usize::try_from(*count).map_err(|_| {
                    ArticleError::InvalidWordCount(format!("{count} is too large"))
                })?;
                WordRange::new(count, count)
            }
            WordCountSpec::Text(text) => text.parse(),
        }
    }
}

impl From<&str> for WordCountSpec {
    fn from(value: &str) -> Self {
        WordCountSpec::Text(value.to_string())
    }
}

impl From<u64> for WordCountSpec {
    fn from(value: u64) -> Self {
        WordCountSpec::Count(value)
    }
}
