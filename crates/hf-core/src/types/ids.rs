use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(as = String)]
pub struct EventId(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    InvalidPrefix { expected: &'static str, got: String },
    InvalidUlid { value: String },
    InvalidFormat { value: String },
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrefix { expected, got } => {
                write!(f, "invalid prefix: expected {expected}, got {got}")
            }
            Self::InvalidUlid { value } => write!(f, "invalid ulid: {value}"),
            Self::InvalidFormat { value } => write!(f, "invalid id format: {value}"),
        }
    }
}

impl std::error::Error for IdError {}

impl EventId {
    pub const PREFIX: &'static str = "evt_";

    /// Mints a fresh identifier. Only the store calls this, once per append.
    pub fn generate() -> Self {
        Self(format!("{}{}", Self::PREFIX, Ulid::new()))
    }

    pub fn new(value: String) -> Result<Self, IdError> {
        let Some(rest) = value.strip_prefix(Self::PREFIX) else {
            let got = value.split('_').next().unwrap_or("").to_string();
            return Err(IdError::InvalidPrefix {
                expected: Self::PREFIX,
                got,
            });
        };
        if rest.len() != 26 {
            return Err(IdError::InvalidFormat { value });
        }
        if Ulid::from_str(rest).is_err() {
            return Err(IdError::InvalidUlid { value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_parse_back() {
        let id = EventId::generate();
        assert!(id.as_str().starts_with("evt_"));
        assert_eq!(EventId::from_str(id.as_str()).unwrap(), id);
    }

    #[test]
    fn rejects_wrong_prefix() {
        let err = EventId::new("task_01HZY3K2Q8W7V6T5S4R3P2N1M0".to_string()).unwrap_err();
        assert_eq!(
            err,
            IdError::InvalidPrefix {
                expected: "evt_",
                got: "task".to_string(),
            }
        );
    }

    #[test]
    fn rejects_short_suffix() {
        let err = EventId::new("evt_123".to_string()).unwrap_err();
        assert!(matches!(err, IdError::InvalidFormat { .. }));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EventId::generate();
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }
}
