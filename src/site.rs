use crate::aggregate::ProjectAggregator;
use crate::config::Config;
use crate::error::Result;
use crate::filters::SpecialFilters;
use crate::github::transport::IssueTransport;
use crate::model::PageViewModel;
use serde_json::{Map, Value};
use tracing::debug;

/// Page attribute naming the source projects.
pub const PROJECTS_KEY: &str = "issues";

/// Narrow view of a host page: its front-matter/data map. The host owns the
/// page itself; we only read the declared project list and write the
/// aggregated keys back.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub data: Map<String, Value>,
}

impl Page {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// The project identifiers this page declares, if any. A missing key or
    /// a value of the wrong shape means the page does not participate.
    pub fn declared_projects(&self) -> Option<Vec<String>> {
        let projects: Vec<String> = self
            .data
            .get(PROJECTS_KEY)?
            .as_array()?
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect();

        if projects.is_empty() {
            None
        } else {
            Some(projects)
        }
    }

    /// Extend the page data with the aggregated view model. The three plain
    /// string lists are serialized as JSON text for the host's template
    /// layer; the structured collections stay native for iteration.
    pub fn apply_view_model(&mut self, view: &PageViewModel) -> Result<()> {
        self.data.insert(
            "issues_titles".into(),
            Value::String(serde_json::to_string(&view.titles)?),
        );
        self.data.insert(
            "issues_authors".into(),
            Value::String(serde_json::to_string(&view.authors)?),
        );
        self.data.insert(
            "issues_assignees".into(),
            Value::String(serde_json::to_string(&view.assignees)?),
        );
        self.data
            .insert("issues_milestones".into(), serde_json::to_value(&view.milestones)?);
        self.data
            .insert("issues_labels".into(), serde_json::to_value(&view.labels)?);
        self.data
            .insert("issues_data".into(), serde_json::to_value(&view.projects)?);
        self.data.insert(
            "issues_special_filters".into(),
            serde_json::to_value(&view.special_filters)?,
        );
        Ok(())
    }
}

/// Run aggregation for every page that declares a project list, extending
/// each page's data in place. Pages and projects are processed strictly
/// sequentially; the first transport failure aborts the build.
pub async fn generate<T: IssueTransport + ?Sized>(
    pages: &mut [Page],
    transport: &T,
    config: &Config,
) -> Result<()> {
    let filters = SpecialFilters::parse(config.special_filter_names())?;
    let aggregator = ProjectAggregator::new(transport, &filters);

    for page in pages.iter_mut() {
        let Some(projects) = page.declared_projects() else {
            continue;
        };

        debug!(projects = projects.len(), "aggregating issues for page");
        let view = aggregator.aggregate(&projects).await?;
        page.apply_view_model(&view)?;
    }

    Ok(())
}
