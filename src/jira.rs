//! JIRA REST API client and the trait abstracting it.
pub mod client;
pub mod traits;
pub mod types;
