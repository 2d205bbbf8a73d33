//! Build-time GitHub issue aggregation for static site pages.
//!
//! For every page that declares a list of source projects, this crate
//! fetches the projects' issues from the GitHub API, normalizes them into a
//! flat schema, extracts configured "special filter" facets from label
//! naming conventions (`Priority - High`), and attaches deduplicated,
//! sorted cross-project index structures to the page's data. It runs once
//! per site build with no state carried across runs.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod github;
pub mod model;
pub mod normalize;
pub mod site;

pub use aggregate::ProjectAggregator;
pub use config::Config;
pub use error::{Error, Result};
pub use fetch::{IssueFetcher, RetryPolicy};
pub use filters::SpecialFilters;
pub use github::{GitHubClient, IssueTransport};
pub use model::{NormalizedIssue, PageViewModel};
pub use site::{generate, Page};
