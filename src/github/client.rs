use crate::error::Result;
use crate::github::model::RawIssue;
use crate::github::transport::IssueTransport;
use async_trait::async_trait;
use serde::Serialize;

/// Number of issues requested per page.
const PER_PAGE: u32 = 100;

#[derive(Serialize)]
struct PageParams {
    page: u32,
    per_page: u32,
    state: &'static str,
}

pub struct GitHubClient {
    client: octocrab::Octocrab,
}

impl GitHubClient {
    pub fn new(login: &str, secret: &str) -> Result<Self> {
        Self::with_base_url(login, secret, None)
    }

    /// Create a client with an optional base URL (for testing with wiremock)
    pub fn with_base_url(login: &str, secret: &str, base_url: Option<&str>) -> Result<Self> {
        let mut builder =
            octocrab::Octocrab::builder().basic_auth(login.to_string(), secret.to_string());

        if let Some(url) = base_url {
            builder = builder.base_uri(url)?;
        }

        let client = builder.build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl IssueTransport for GitHubClient {
    async fn issues_page(&self, project: &str, page: u32) -> Result<Option<Vec<RawIssue>>> {
        let route = format!("/repos/{}/issues", project);
        let params = PageParams {
            page,
            per_page: PER_PAGE,
            state: "all",
        };

        let issues: Vec<RawIssue> = self.client.get(route, Some(&params)).await?;
        Ok(Some(issues))
    }
}
