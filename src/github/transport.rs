use crate::error::Result;
use crate::github::model::RawIssue;
use async_trait::async_trait;

/// Remote collaborator for listing a project's issues one page at a time.
///
/// `Ok(None)` means the service produced no result for the request (the
/// fetcher retries these); `Ok(Some(vec![]))` is a definitive empty page
/// and terminates pagination. Transport-level failures are `Err` and are
/// never retried here.
#[async_trait]
pub trait IssueTransport: Send + Sync {
    async fn issues_page(&self, project: &str, page: u32) -> Result<Option<Vec<RawIssue>>>;
}
