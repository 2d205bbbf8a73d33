pub mod client;
pub mod model;
pub mod transport;

pub use client::GitHubClient;
pub use model::{RawIssue, RawLabel, RawMilestone, RawUser};
pub use transport::IssueTransport;
