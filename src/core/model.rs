// Record types mirroring the hosted CRM tables.
//
// Field names serialize with the backend's camelCase spelling so records
// round-trip the table API unchanged. Date fields stay raw strings: the
// backend does not validate them, so parsing is deferred to the consumers
// that care (see dates.rs).

use serde::{Deserialize, Serialize};

pub type RecordId = u64;

/// A task row. `due_date` may be missing or hold an unparsable value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub contact_id: Option<RecordId>,
}

/// A logged interaction (call, email, meeting, note) tied to a contact
/// and optionally a deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub contact_id: Option<RecordId>,
    #[serde(default)]
    pub deal_id: Option<RecordId>,
}

/// A contact row. Only `name` matters to alert derivation; the rest ride
/// along for the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_uses_backend_field_names() {
        let json = r#"{"id":7,"title":"Send proposal","dueDate":"2026-03-10","contactId":3}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.due_date.as_deref(), Some("2026-03-10"));
        assert_eq!(task.contact_id, Some(3));
        assert!(!task.completed);

        let back = serde_json::to_string(&task).unwrap();
        assert!(back.contains("\"dueDate\""));
        assert!(back.contains("\"contactId\""));
    }

    #[test]
    fn test_activity_kind_serializes_as_type() {
        let activity = Activity {
            id: 1,
            kind: "call".to_string(),
            description: "Intro call".to_string(),
            timestamp: Some("2026-03-09T10:00:00Z".to_string()),
            contact_id: Some(3),
            deal_id: None,
        };
        let json = serde_json::to_string(&activity).unwrap();
        assert!(json.contains("\"type\":\"call\""));

        let round: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(round.kind, "call");
    }
}
