// Alert model types for the derived notification feed.
//
// Alerts are recomputed from scratch on every query and never persisted;
// the deterministic id is only used for dismissal tracking.

use serde::{Deserialize, Serialize};

use crate::core::model::{Activity, RecordId};

/// Kinds of alerts the feed can derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Task whose due date has already passed
    TaskOverdue,
    /// Task due on the current calendar day
    TaskDueToday,
    /// Task due on the next calendar day
    TaskDueTomorrow,
    /// Contact with recent activity that likely needs outreach
    ContactFollowUp,
}

impl AlertKind {
    /// Get the display title for this alert kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::TaskOverdue => "Overdue Task",
            Self::TaskDueToday => "Due Today",
            Self::TaskDueTomorrow => "Due Tomorrow",
            Self::ContactFollowUp => "Follow-up Needed",
        }
    }

    /// Get the fixed priority for this alert kind
    pub fn priority(&self) -> AlertPriority {
        match self {
            Self::TaskOverdue => AlertPriority::High,
            Self::TaskDueToday | Self::ContactFollowUp => AlertPriority::Medium,
            Self::TaskDueTomorrow => AlertPriority::Low,
        }
    }

    /// Get the id prefix for alerts of this kind
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::TaskOverdue => "overdue-",
            Self::TaskDueToday => "due-today-",
            Self::TaskDueTomorrow => "due-tomorrow-",
            Self::ContactFollowUp => "follow-up-",
        }
    }

    /// Get all alert kinds
    pub fn all() -> &'static [AlertKind] {
        &[
            Self::TaskOverdue,
            Self::TaskDueToday,
            Self::TaskDueTomorrow,
            Self::ContactFollowUp,
        ]
    }
}

/// Alert priority, lowest rank sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

impl AlertPriority {
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Action a user can take on an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Complete,
    Dismiss,
}

/// An action with its display label, in the order the UI renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertAction {
    pub kind: ActionKind,
    pub label: String,
}

impl AlertAction {
    pub fn complete() -> Self {
        Self {
            kind: ActionKind::Complete,
            label: "Mark Complete".to_string(),
        }
    }

    pub fn dismiss() -> Self {
        Self {
            kind: ActionKind::Dismiss,
            label: "Dismiss".to_string(),
        }
    }
}

/// References back to the records an alert was derived from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceRefs {
    #[serde(default)]
    pub task_id: Option<RecordId>,
    #[serde(default)]
    pub contact_id: Option<RecordId>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A derived alert.
///
/// `timestamp` is the raw backend string that motivated the alert (a
/// task's due date, or the newest grouped activity's timestamp) and may
/// be absent or unparsable; the feed's sort tolerates both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    pub source: SourceRefs,
    pub actions: Vec<AlertAction>,
}

impl Alert {
    /// True if this alert offers the given action.
    pub fn has_action(&self, kind: ActionKind) -> bool {
        self.actions.iter().any(|a| a.kind == kind)
    }
}
