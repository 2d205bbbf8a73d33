use crate::error::Result;
use crate::github::model::RawIssue;
use crate::github::transport::IssueTransport;
use std::time::Duration;
use tracing::{debug, warn};

/// Bounded retry for a single page request: `max_attempts` tries separated
/// by a fixed backoff. Only "no result" responses are retried; transport
/// errors propagate immediately.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Retrieves all issues for one project, page by page, in server order.
pub struct IssueFetcher<'a, T: IssueTransport + ?Sized> {
    transport: &'a T,
    retry: RetryPolicy,
}

impl<'a, T: IssueTransport + ?Sized> IssueFetcher<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self::with_retry(transport, RetryPolicy::default())
    }

    pub fn with_retry(transport: &'a T, retry: RetryPolicy) -> Self {
        Self { transport, retry }
    }

    /// Fetch every page of issues for `project`, starting at page 1 and
    /// stopping at the first empty or absent page.
    pub async fn fetch_all(&self, project: &str) -> Result<Vec<RawIssue>> {
        let mut all = Vec::new();
        let mut page = 1;

        loop {
            match self.fetch_page(project, page).await? {
                Some(items) if !items.is_empty() => {
                    all.extend(items);
                    page += 1;
                }
                _ => break,
            }
        }

        debug!(project, total = all.len(), "fetched issues");
        Ok(all)
    }

    /// A page that yields no result after all attempts is reported as
    /// `None`, which the pagination loop reads as end-of-stream.
    async fn fetch_page(&self, project: &str, page: u32) -> Result<Option<Vec<RawIssue>>> {
        for attempt in 1..=self.retry.max_attempts {
            if let Some(items) = self.transport.issues_page(project, page).await? {
                return Ok(Some(items));
            }

            if attempt < self.retry.max_attempts {
                warn!(project, page, attempt, "no result from transport, retrying");
                tokio::time::sleep(self.retry.backoff).await;
            }
        }

        Ok(None)
    }
}
