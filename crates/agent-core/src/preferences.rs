//! User response-shaping preferences.
//!
//! Preferences are stored on the user record as a serialized JSON blob and
//! deserialized lazily. A missing or malformed blob yields the defaults
//! without raising; validation of explicitly supplied values is the
//! caller's responsibility, never the blob reader's.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How long a research summary should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    /// 2-3 terse bullet points.
    Short,
    /// 3-5 moderately detailed bullet points.
    #[default]
    Medium,
    /// Comprehensive detail with sources.
    Long,
}

impl SummaryLength {
    /// The lowercase wire form of this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a summary length is outside the enumerated values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSummaryLength(pub String);

impl fmt::Display for InvalidSummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary length must be 'short', 'medium', or 'long' (got '{}')",
            self.0
        )
    }
}

impl std::error::Error for InvalidSummaryLength {}

impl FromStr for SummaryLength {
    type Err = InvalidSummaryLength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(SummaryLength::Short),
            "medium" => Ok(SummaryLength::Medium),
            "long" => Ok(SummaryLength::Long),
            other => Err(InvalidSummaryLength(other.to_string())),
        }
    }
}

/// A user's stored response-shaping settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Desired summary length.
    #[serde(default)]
    pub summary_length: SummaryLength,
    /// Ordered list of topics to emphasize in responses.
    #[serde(default)]
    pub preferred_topics: Vec<String>,
}

impl Preferences {
    /// Create preferences with the given length and topics.
    pub fn new(summary_length: SummaryLength, preferred_topics: Vec<String>) -> Self {
        Self {
            summary_length,
            preferred_topics,
        }
    }

    /// Deserialize preferences from a stored blob.
    ///
    /// A missing or malformed blob yields the defaults. This is a
    /// silent-recovery contract, not an error path.
    pub fn from_blob(blob: Option<&str>) -> Self {
        blob.and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    /// Serialize preferences to the stored blob form.
    ///
    /// Persisting the blob is a separate explicit step owned by the caller.
    pub fn to_blob(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}
