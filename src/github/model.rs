use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Issue record as returned by the GitHub REST API. Read-only input;
/// only the fields the normalizer consumes are deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub html_url: String,
    pub user: RawUser,
    pub assignee: Option<RawUser>,
    pub milestone: Option<RawMilestone>,
    #[serde(default)]
    pub labels: Vec<RawLabel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMilestone {
    pub id: u64,
    pub number: u64,
    pub state: String,
    pub title: String,
    pub description: Option<String>,
    pub due_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLabel {
    pub name: String,
    pub color: String,
}
