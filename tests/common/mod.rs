//! Common test utilities and fixtures

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_PROJECT: &str = "acme/site";
pub const OTHER_PROJECT: &str = "acme/tracker";

/// A fully-populated GitHub issue record as the list endpoint returns it.
pub fn issue_json(number: u64, title: &str, labels: Value) -> Value {
    json!({
        "number": number,
        "title": title,
        "state": "open",
        "body": format!("Body of issue {number}"),
        "created_at": "2024-02-10T08:00:00Z",
        "closed_at": null,
        "html_url": format!("https://github.com/{TEST_PROJECT}/issues/{number}"),
        "user": {
            "login": "alice",
            "avatar_url": "https://avatars.example/alice",
            "html_url": "https://github.com/alice"
        },
        "assignee": null,
        "milestone": null,
        "labels": labels
    })
}

pub fn with_assignee(mut issue: Value, login: &str) -> Value {
    issue["assignee"] = json!({
        "login": login,
        "avatar_url": format!("https://avatars.example/{login}"),
        "html_url": format!("https://github.com/{login}")
    });
    issue
}

pub fn with_milestone(mut issue: Value, number: u64, title: &str) -> Value {
    issue["milestone"] = json!({
        "id": 1000 + number,
        "number": number,
        "state": "open",
        "title": title,
        "description": "Planned release",
        "due_on": "2024-09-01T00:00:00Z"
    });
    issue
}

/// Mount the paginated issues endpoint for `project`: one mock per supplied
/// page, then an empty page for everything after. Earlier mounts win, so
/// the catch-all goes last.
pub async fn mount_issue_pages(server: &MockServer, project: &str, pages: &[Value]) {
    let route = format!("/repos/{}/issues", project);

    for (i, body) in pages.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path(route.clone()))
            .and(query_param("page", (i + 1).to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

/// Set up a mock server with one page of issues for [`TEST_PROJECT`].
pub async fn setup_mock_github(issues: Vec<Value>) -> MockServer {
    let server = MockServer::start().await;
    mount_issue_pages(&server, TEST_PROJECT, &[Value::Array(issues)]).await;
    server
}
