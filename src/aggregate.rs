use crate::error::Result;
use crate::fetch::IssueFetcher;
use crate::filters::SpecialFilters;
use crate::github::transport::IssueTransport;
use crate::model::{Label, Milestone, NormalizedIssue, PageViewModel, ProjectIssues, SpecialFilter};
use crate::normalize::normalize;
use std::collections::BTreeMap;
use tracing::debug;

/// Fetches and normalizes every configured project's issues, then folds them
/// into the cross-project collections of a [`PageViewModel`].
pub struct ProjectAggregator<'a, T: IssueTransport + ?Sized> {
    fetcher: IssueFetcher<'a, T>,
    filters: &'a SpecialFilters,
}

impl<'a, T: IssueTransport + ?Sized> ProjectAggregator<'a, T> {
    pub fn new(transport: &'a T, filters: &'a SpecialFilters) -> Self {
        Self {
            fetcher: IssueFetcher::new(transport),
            filters,
        }
    }

    pub fn with_fetcher(fetcher: IssueFetcher<'a, T>, filters: &'a SpecialFilters) -> Self {
        Self { fetcher, filters }
    }

    /// Build the view model for one page's project list. Projects are
    /// processed strictly in order; a transport failure aborts the whole
    /// page. Projects with zero issues contribute nothing, not even an
    /// entry in the per-project map.
    pub async fn aggregate(&self, projects: &[String]) -> Result<PageViewModel> {
        let mut project_map = BTreeMap::new();
        let mut titles = Vec::new();
        let mut authors = Vec::new();
        let mut assignees = Vec::new();
        let mut milestones: Vec<Milestone> = Vec::new();
        let mut labels: Vec<Label> = Vec::new();
        let mut filter_values: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for project in projects {
            let raw = self.fetcher.fetch_all(project).await?;
            if raw.is_empty() {
                debug!(%project, "no issues, skipping project");
                continue;
            }

            let issues: Vec<NormalizedIssue> = raw
                .into_iter()
                .map(|issue| normalize(issue, self.filters))
                .collect();

            for issue in &issues {
                titles.push(issue.title.clone());
                authors.push(issue.user_login.clone());

                if let Some(assignee) = &issue.assignee {
                    assignees.push(assignee.login.clone());
                }

                if let Some(milestone) = &issue.milestone {
                    if !milestones.contains(milestone) {
                        milestones.push(milestone.clone());
                    }
                }

                for label in &issue.labels {
                    if !labels.contains(label) {
                        labels.push(label.clone());
                    }
                }

                for (key, fv) in &issue.special_filter_value {
                    if let Some(values) = &fv.value {
                        filter_values
                            .entry(key.clone())
                            .or_default()
                            .extend(values.iter().cloned());
                    }
                }
            }

            debug!(%project, issues = issues.len(), "aggregated project");
            project_map.insert(
                project.clone(),
                ProjectIssues {
                    name: project.clone(),
                    issues,
                },
            );
        }

        titles.sort();
        titles.dedup();
        authors.sort();
        authors.dedup();
        assignees.sort();
        assignees.dedup();
        milestones.sort_by_key(|m| m.number);
        labels.sort_by(|a, b| (&a.color, &a.name).cmp(&(&b.color, &b.name)));

        let special_filters = self
            .filters
            .names()
            .map(|(key, display)| {
                let mut values = filter_values.get(key).cloned().unwrap_or_default();
                values.sort();
                values.dedup();
                (
                    key.to_string(),
                    SpecialFilter {
                        name: display.to_string(),
                        values,
                    },
                )
            })
            .collect();

        Ok(PageViewModel {
            projects: project_map,
            titles,
            authors,
            assignees,
            milestones,
            labels,
            special_filters,
        })
    }
}
