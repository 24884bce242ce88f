use crate::types::ids::EventId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Push,
    PullRequest,
    Merge,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Push => "PUSH",
            Self::PullRequest => "PULL_REQUEST",
            Self::Merge => "MERGE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PUSH" => Some(Self::Push),
            "PULL_REQUEST" => Some(Self::PullRequest),
            "MERGE" => Some(Self::Merge),
            _ => None,
        }
    }
}

/// A normalized event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewEventRecord {
    pub request_id: Option<String>,
    pub author: Option<String>,
    pub action: Action,
    pub from_branch: Option<String>,
    pub to_branch: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventRecord {
    pub id: EventId,
    pub request_id: Option<String>,
    pub author: Option<String>,
    pub action: Action,
    pub from_branch: Option<String>,
    pub to_branch: Option<String>,
    pub timestamp: Option<String>,
}

impl EventRecord {
    pub fn from_new(id: EventId, record: NewEventRecord) -> Self {
        Self {
            id,
            request_id: record.request_id,
            author: record.author,
            action: record.action,
            from_branch: record.from_branch,
            to_branch: record.to_branch,
            timestamp: record.timestamp,
        }
    }
}
