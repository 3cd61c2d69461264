//! Activity model: the authored learning unit edited in the dashboard.
//!
//! An activity is a typed configuration map plus an ordered list of content
//! blocks. The editor owns and mutates it; validation only reads it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Free-form activity configuration (title, description, timing, ...).
pub type ActivityConfig = serde_json::Map<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Activity type
// ---------------------------------------------------------------------------

/// Kind of activity, which decides the per-block content rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Quiz,
    Flashcards,
    FillInBlank,
    Matching,
    Reading,
    Video,
}

/// Every activity type, in display order.
pub const ALL_ACTIVITY_TYPES: &[ActivityType] = &[
    ActivityType::Quiz,
    ActivityType::Flashcards,
    ActivityType::FillInBlank,
    ActivityType::Matching,
    ActivityType::Reading,
    ActivityType::Video,
];

impl ActivityType {
    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Flashcards => "flashcards",
            Self::FillInBlank => "fill_in_blank",
            Self::Matching => "matching",
            Self::Reading => "reading",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ACTIVITY_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown activity type '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Content blocks
// ---------------------------------------------------------------------------

/// One ordered piece of activity content (a question, a card, a text run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub content: serde_json::Value,
}

impl ContentBlock {
    pub fn new(id: impl Into<String>, block_type: impl Into<String>, content: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            content,
        }
    }

    /// Non-blank string field of the block content, if any.
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.content
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// An activity as held by an editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(default)]
    pub config: ActivityConfig,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}
