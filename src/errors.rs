use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The planner closed `limit` nodes without reaching the goal
    #[error("expansion limit of {limit} nodes reached before the goal")]
    ExpansionLimitReached { limit: usize },
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}
