use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A published job posting.
///
/// Serialized camelCase for the frontend; the hosted backend's snake_case
/// row shape lives in the infrastructure layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// RFC 3339, assigned at creation and never changed by updates.
    pub posted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Government,
    #[default]
    Private,
}

/// Requirements as submitted by clients: either a proper list or a single
/// comma-separated string (the public submission form sends the latter).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Requirements {
    List(Vec<String>),
    Text(String),
}

impl Default for Requirements {
    fn default() -> Self {
        Requirements::List(Vec::new())
    }
}

impl Requirements {
    /// Normalize to a list with trimmed, non-blank entries.
    pub fn normalize(self) -> Vec<String> {
        match self {
            Requirements::List(items) => items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
            Requirements::Text(text) => text
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect(),
        }
    }
}
