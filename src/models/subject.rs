//! Subject model: a category label.

use serde::{Deserialize, Serialize};

/// A stored subject document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "_id")]
    pub id: String,
    /// Numeric subject id. Distinct from `_id` and not unique.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Subject as it appears in a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSubject {
    #[serde(default, rename = "id")]
    pub subject_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}
