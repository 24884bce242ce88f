use crate::error::NormalizeError;
use crate::payload::{Field, Leaf};
use crate::timestamp::standardize_timestamp;
use crate::types::{Action, NewEventRecord};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    PullRequest,
    Unsupported,
}

impl EventKind {
    pub fn parse(value: &str) -> Self {
        match value {
            "push" => Self::Push,
            "pull_request" => Self::PullRequest,
            _ => Self::Unsupported,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestAction {
    Opened,
    Closed,
    Other,
}

impl PullRequestAction {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("opened") => Self::Opened,
            Some("closed") => Self::Closed,
            _ => Self::Other,
        }
    }
}

/// Maps one webhook delivery onto the canonical record shape.
///
/// `Ok(None)` means the delivery is not one we track. A malformed timestamp
/// fails the whole delivery; nothing partial is returned.
pub fn normalize(
    event_kind: &str,
    payload: &Value,
) -> Result<Option<NewEventRecord>, NormalizeError> {
    let root = Field::root(payload);
    match EventKind::parse(event_kind) {
        EventKind::Push => normalize_push(root),
        EventKind::PullRequest => normalize_pull_request(root),
        EventKind::Unsupported => Ok(None),
    }
}

fn normalize_push(root: Field<'_>) -> Result<Option<NewEventRecord>, NormalizeError> {
    let branch = root
        .get("ref")
        .as_str()
        .and_then(|value| value.rsplit('/').next())
        .unwrap_or_default()
        .to_string();

    let commit = root.get("head_commit");
    if commit.as_object().is_none_or(serde_json::Map::is_empty) {
        return Ok(None);
    }

    Ok(Some(NewEventRecord {
        request_id: commit.get("id").string(),
        author: commit.path("author.name").string(),
        action: Action::Push,
        from_branch: None,
        to_branch: Some(branch),
        timestamp: event_time(commit.get("timestamp"))?,
    }))
}

fn normalize_pull_request(root: Field<'_>) -> Result<Option<NewEventRecord>, NormalizeError> {
    let pr = root.get("pull_request");
    let action = PullRequestAction::parse(root.get("action").as_str());
    let merged = pr.get("merged").as_bool().unwrap_or(false);

    let record = match (action, merged) {
        (PullRequestAction::Opened, _) => NewEventRecord {
            request_id: pr.get("id").to_id_string(),
            author: pr.path("user.login").string(),
            action: Action::PullRequest,
            from_branch: pr.path("head.ref").string(),
            to_branch: pr.path("base.ref").string(),
            timestamp: event_time(pr.get("created_at"))?,
        },
        (PullRequestAction::Closed, true) => NewEventRecord {
            request_id: pr.get("merge_commit_sha").string(),
            author: pr.path("merged_by.login").string(),
            action: Action::Merge,
            from_branch: pr.path("head.ref").string(),
            to_branch: pr.path("base.ref").string(),
            timestamp: event_time(pr.get("merged_at"))?,
        },
        (PullRequestAction::Closed, false) | (PullRequestAction::Other, _) => return Ok(None),
    };
    Ok(Some(record))
}

/// Only an absent or `null` time may become a null timestamp; a number,
/// object or other non-string value is as malformed as an unreadable string.
fn event_time(field: Field<'_>) -> Result<Option<String>, NormalizeError> {
    match field.leaf() {
        Leaf::Missing => Ok(None),
        Leaf::Text(raw) => standardize_timestamp(Some(raw)),
        Leaf::Other(value) => Err(NormalizeError::MalformedTimestamp {
            value: value.to_string(),
        }),
    }
}
