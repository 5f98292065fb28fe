//! Topic comment model.

use serde::{Deserialize, Serialize};

use super::{CalendarDate, EntryDate};

/// A stored comment on a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicComment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub date: EntryDate,
    /// Matches a topic's `topic_id` by value; the topic need not exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i64>,
}

/// Request body for posting a comment. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub date: Option<CalendarDate>,
    pub topic_id: i64,
}

impl CreateCommentRequest {
    /// Check required fields, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.author.trim().is_empty() {
            return Err("author is required".to_string());
        }
        if self.text.trim().is_empty() {
            return Err("text is required".to_string());
        }
        if let Some(date) = &self.date {
            date.validate()?;
        }
        Ok(())
    }

    /// Date to store, falling back to today.
    pub fn date_or_today(&self) -> CalendarDate {
        self.date.unwrap_or_else(CalendarDate::today)
    }
}
