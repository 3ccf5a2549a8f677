use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Stage
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StageId(String);

/// Unique identifier for a Task
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

/// Unique identifier for a Step, unique across the whole catalog
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StepId(String);

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl ParseIdError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cannot be blank", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

fn normalize(raw: &str, kind: &'static str) -> Result<String, ParseIdError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseIdError { kind });
    }
    Ok(trimmed.to_owned())
}

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Creates a validated identifier (trimmed, non-empty).
            ///
            /// # Errors
            ///
            /// Returns `ParseIdError` if the value is blank.
            pub fn new(value: impl AsRef<str>) -> Result<Self, ParseIdError> {
                normalize(value.as_ref(), stringify!($name)).map(Self)
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id!(StageId);
string_id!(TaskId);
string_id!(StepId);

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_id_display() {
        let id = StepId::new("name-search").unwrap();
        assert_eq!(id.to_string(), "name-search");
    }

    #[test]
    fn test_step_id_is_trimmed() {
        let id: StepId = "  distributor ".parse().unwrap();
        assert_eq!(id.as_str(), "distributor");
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let err = "   ".parse::<TaskId>().unwrap_err();
        assert_eq!(err.kind(), "TaskId");
        assert_eq!(err.to_string(), "TaskId cannot be blank");
    }

    #[test]
    fn test_stage_id_debug() {
        let id = StageId::new("formation").unwrap();
        assert_eq!(format!("{id:?}"), "StageId(\"formation\")");
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id = StepId::new("file-trademark").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"file-trademark\"");
        let back: StepId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<StepId>("\"\"").is_err());
    }
}
