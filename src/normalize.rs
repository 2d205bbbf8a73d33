use crate::filters::SpecialFilters;
use crate::github::model::RawIssue;
use crate::model::{Assignee, Label, Milestone, NormalizedIssue};

/// Convert one raw remote record into the internal flat schema. Label colors
/// are lowercased, special-filter labels are moved out of the label list and
/// into the per-filter value map.
pub fn normalize(raw: RawIssue, filters: &SpecialFilters) -> NormalizedIssue {
    let labels: Vec<Label> = raw
        .labels
        .into_iter()
        .map(|l| Label {
            name: l.name,
            color: l.color.to_lowercase(),
        })
        .collect();

    let (labels, special_filter_value) = filters.extract(labels);

    NormalizedIssue {
        number: raw.number,
        title: raw.title,
        state: raw.state,
        body: raw.body,
        url: raw.html_url,
        date: raw.created_at,
        closed_at: raw.closed_at,
        user_login: raw.user.login,
        user_avatar: raw.user.avatar_url,
        user_url: raw.user.html_url,
        assignee: raw.assignee.map(|a| Assignee {
            login: a.login,
            avatar: a.avatar_url,
            url: a.html_url,
        }),
        milestone: raw.milestone.map(|m| Milestone {
            id: m.id,
            number: m.number,
            state: m.state,
            title: m.title,
            description: m.description,
            due_on: m.due_on,
        }),
        labels,
        special_filter_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_issue(extra: serde_json::Value) -> RawIssue {
        let mut base = json!({
            "number": 7,
            "title": "Crash on startup",
            "state": "open",
            "body": "Stack trace attached",
            "created_at": "2024-03-01T09:30:00Z",
            "closed_at": null,
            "html_url": "https://github.com/acme/site/issues/7",
            "user": {
                "login": "alice",
                "avatar_url": "https://avatars.example/alice",
                "html_url": "https://github.com/alice"
            },
            "assignee": null,
            "milestone": null,
            "labels": []
        });
        base.as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn maps_user_and_scalar_fields() {
        let issue = normalize(raw_issue(json!({})), &SpecialFilters::default());

        assert_eq!(issue.number, 7);
        assert_eq!(issue.title, "Crash on startup");
        assert_eq!(issue.state, "open");
        assert_eq!(issue.url, "https://github.com/acme/site/issues/7");
        assert_eq!(issue.user_login, "alice");
        assert_eq!(issue.user_avatar, "https://avatars.example/alice");
        assert!(issue.closed_at.is_none());
    }

    #[test]
    fn assignee_and_milestone_are_all_or_nothing() {
        let issue = normalize(raw_issue(json!({})), &SpecialFilters::default());
        assert!(issue.assignee.is_none());
        assert!(issue.milestone.is_none());

        let issue = normalize(
            raw_issue(json!({
                "assignee": {
                    "login": "bob",
                    "avatar_url": "https://avatars.example/bob",
                    "html_url": "https://github.com/bob"
                },
                "milestone": {
                    "id": 1002,
                    "number": 3,
                    "state": "open",
                    "title": "v1.0",
                    "description": null,
                    "due_on": "2024-06-01T00:00:00Z"
                }
            })),
            &SpecialFilters::default(),
        );

        let assignee = issue.assignee.unwrap();
        assert_eq!(assignee.login, "bob");
        assert_eq!(assignee.url, "https://github.com/bob");

        let milestone = issue.milestone.unwrap();
        assert_eq!(milestone.number, 3);
        assert_eq!(milestone.title, "v1.0");
        assert!(milestone.description.is_none());
    }

    #[test]
    fn label_colors_are_lowercased() {
        let issue = normalize(
            raw_issue(json!({
                "labels": [{"name": "bug", "color": "FC2929"}]
            })),
            &SpecialFilters::default(),
        );

        assert_eq!(issue.labels[0].color, "fc2929");
    }

    #[test]
    fn filter_labels_move_into_the_value_map() {
        let filters = SpecialFilters::parse("Priority").unwrap();
        let issue = normalize(
            raw_issue(json!({
                "labels": [
                    {"name": "Priority - High", "color": "FF0000"},
                    {"name": "bug", "color": "fc2929"}
                ]
            })),
            &filters,
        );

        assert_eq!(issue.labels.len(), 1);
        assert_eq!(issue.labels[0].name, "bug");

        let fv = &issue.special_filter_value["priority"];
        assert_eq!(fv.name, "Priority");
        assert_eq!(fv.value, Some(vec!["High".to_string()]));
    }
}
