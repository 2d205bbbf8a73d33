use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Canonical internal issue record, flattened from the remote shape.
///
/// The assignee and milestone groups are all-or-nothing: either the whole
/// group is present or the issue carries no trace of it (absent groups are
/// omitted from serialized output entirely, never emitted as null keys).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedIssue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub body: Option<String>,
    pub url: String,
    pub date: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub user_login: String,
    pub user_avatar: String,
    pub user_url: String,
    #[serde(flatten)]
    pub assignee: Option<Assignee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,
    pub labels: Vec<Label>,
    /// Keyed by lowercased filter name.
    pub special_filter_value: BTreeMap<String, FilterValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignee {
    #[serde(rename = "assignee_login")]
    pub login: String,
    #[serde(rename = "assignee_avatar")]
    pub avatar: String,
    #[serde(rename = "assignee_url")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    pub id: u64,
    pub number: u64,
    pub state: String,
    pub title: String,
    pub description: Option<String>,
    pub due_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub name: String,
    pub color: String,
}

/// Value extracted for one configured filter on one issue. `value` is `None`
/// when no label matched the filter (distinct from a present-but-empty list).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterValue {
    /// Original-case filter name, for display.
    pub name: String,
    pub value: Option<Vec<String>>,
}

/// Cross-project aggregation of one filter's extracted values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialFilter {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectIssues {
    pub name: String,
    pub issues: Vec<NormalizedIssue>,
}

/// Everything a page gains from aggregation: per-project issue lists plus
/// the deduplicated, sorted cross-project collections. Rebuilt in full on
/// every run.
#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    /// Keyed by project identifier; projects with zero issues are absent.
    pub projects: BTreeMap<String, ProjectIssues>,
    pub titles: Vec<String>,
    pub authors: Vec<String>,
    pub assignees: Vec<String>,
    pub milestones: Vec<Milestone>,
    pub labels: Vec<Label>,
    /// Keyed by lowercased filter name.
    pub special_filters: BTreeMap<String, SpecialFilter>,
}
