//! Shared types for the notes module service and its HTTP clients.

use serde::{Deserialize, Deserializer, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A single note as stored and returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /notes` and `PUT /notes/{id}`.
///
/// Both fields are optional on the wire so that a missing field reaches the
/// store's validation instead of failing extraction. Non-string values are
/// read as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteInput {
    #[serde(default, deserialize_with = "string_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub content: Option<String>,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

// =====================================================
// Response Types
// =====================================================

/// JSON error payload: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Service health status
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub note_count: usize,
    pub next_id: u64,
    pub total_requests: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_input_missing_fields() {
        let input: NoteInput = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("X"));
        assert!(input.content.is_none());
    }

    #[test]
    fn test_note_input_non_string_is_absent() {
        let input: NoteInput =
            serde_json::from_str(r#"{"title": 42, "content": null}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.content.is_none());
    }

    #[test]
    fn test_note_serialization_shape() {
        let note = Note {
            id: 4,
            title: "X".to_string(),
            content: "Y".to_string(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json, serde_json::json!({"id": 4, "title": "X", "content": "Y"}));
    }
}
