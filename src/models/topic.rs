//! Topic model: a forum post.

use serde::{Deserialize, Serialize};

use super::EntryDate;

/// A stored topic document. Topics are seeded, so any field may be missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub date: EntryDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Informal key shared with comments; not unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i64>,
}

/// Topic as it appears in a seed file, before an id is assigned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTopic {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: EntryDate,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub topic_id: Option<i64>,
}
