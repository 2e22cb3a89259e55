// Alert feed - joins tasks, activities, and contacts into a prioritized,
// deduplicated notification list.
//
// The feed is recomputed from scratch on every query; the only state it
// keeps between queries is the set of dismissal keys. Dismissals live as
// long as the feed instance and are never persisted.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::model::{Alert, AlertAction, AlertKind, SourceRefs};
use crate::core::config::Settings;
use crate::core::dates;
use crate::core::model::{Activity, Contact, RecordId, Task};
use crate::core::sources::{ActivitySource, ContactSource, TaskSource};

lazy_static! {
    // Date-bucket alert ids: "overdue-7", "due-today-7", "due-tomorrow-7".
    static ref BUCKET_ID: Regex = Regex::new(r"^(?:overdue|due-today|due-tomorrow)-(.+)$")
        .expect("invalid bucket id pattern");
}

/// Failure surfaced by the feed. Underlying causes are logged, not returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlertFeedError {
    #[error("failed to load alerts")]
    LoadFailed,
    #[error("failed to complete task")]
    CompleteFailed,
}

/// Suppression key shared by all date buckets of one task.
fn task_key(id: RecordId) -> String {
    format!("task-{}", id)
}

/// Normalize an alert id into its dismissal key.
///
/// The three date-bucket ids for a task collapse onto the shared
/// `task-<id>` key, so dismissing one bucket suppresses the others for
/// that task as it drifts from due-tomorrow toward overdue. A follow-up
/// id is already its own key; anything unrecognized is stored as given.
fn dismissal_key(alert_id: &str) -> String {
    match BUCKET_ID.captures(alert_id) {
        Some(caps) => format!("task-{}", &caps[1]),
        None => alert_id.to_string(),
    }
}

/// Derives the alert feed from three injected record sources.
pub struct AlertFeed<T, A, C> {
    tasks: T,
    activities: A,
    contacts: C,
    follow_up_window: Duration,
    dismissed: HashSet<String>,
}

impl<T, A, C> AlertFeed<T, A, C>
where
    T: TaskSource,
    A: ActivitySource,
    C: ContactSource,
{
    /// Create a feed with the default 7-day follow-up window.
    pub fn new(tasks: T, activities: A, contacts: C) -> Self {
        Self::with_settings(tasks, activities, contacts, &Settings::default())
    }

    pub fn with_settings(tasks: T, activities: A, contacts: C, settings: &Settings) -> Self {
        Self {
            tasks,
            activities,
            contacts,
            follow_up_window: Duration::days(settings.follow_up_window_days),
            dismissed: HashSet::new(),
        }
    }

    /// Compute the current alert feed against the wall clock.
    pub async fn compute_alerts(&self) -> Result<Vec<Alert>, AlertFeedError> {
        self.compute_alerts_at(Utc::now()).await
    }

    /// Compute the alert feed against an injected reference instant.
    ///
    /// Fetches the three sources concurrently; the first failure aborts
    /// the whole call. Reads the dismissal set but mutates nothing.
    pub async fn compute_alerts_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Alert>, AlertFeedError> {
        let (tasks, activities, contacts) = tokio::try_join!(
            self.tasks.list_all(),
            self.activities.list_all(),
            self.contacts.list_all(),
        )
        .map_err(|err| {
            log::error!("Failed to load alert sources: {}", err);
            AlertFeedError::LoadFailed
        })?;

        Ok(self.derive(now, &tasks, &activities, &contacts))
    }

    /// Suppress an alert (and, for task alerts, its sibling date buckets)
    /// for the lifetime of this feed instance.
    pub fn dismiss(&mut self, alert_id: &str) {
        self.dismissed.insert(dismissal_key(alert_id));
    }

    /// Mark a task completed through the task collaborator, then suppress
    /// its reminders so they cannot reappear before the next reload
    /// reflects the completion.
    pub async fn complete_task(&mut self, task_id: RecordId) -> Result<(), AlertFeedError> {
        self.tasks.mark_completed(task_id).await.map_err(|err| {
            log::error!("Failed to complete task {}: {}", task_id, err);
            AlertFeedError::CompleteFailed
        })?;
        self.dismissed.insert(task_key(task_id));
        Ok(())
    }

    /// Drop every dismissal, restoring suppressed alerts on the next compute.
    pub fn clear_dismissed(&mut self) {
        self.dismissed.clear();
    }

    fn derive(
        &self,
        now: DateTime<Utc>,
        tasks: &[Task],
        activities: &[Activity],
        contacts: &[Contact],
    ) -> Vec<Alert> {
        let mut alerts = Vec::new();

        // Task reminders: exactly one date bucket per task, checked in
        // order overdue -> today -> tomorrow. Missing or unparsable due
        // dates skip the task, they are not an error.
        for task in tasks {
            let Some(due) = task.due_date.as_deref().and_then(dates::parse_timestamp) else {
                continue;
            };
            if self.dismissed.contains(&task_key(task.id)) {
                continue;
            }

            let (kind, message, actions) = if due < now {
                (
                    AlertKind::TaskOverdue,
                    format!("\"{}\" was due {}", task.title, dates::format_due_date(due)),
                    vec![AlertAction::complete(), AlertAction::dismiss()],
                )
            } else if dates::same_day(due, now) {
                (
                    AlertKind::TaskDueToday,
                    format!("\"{}\" is due today", task.title),
                    vec![AlertAction::complete(), AlertAction::dismiss()],
                )
            } else if dates::same_day(due, now + Duration::days(1)) {
                (
                    AlertKind::TaskDueTomorrow,
                    format!("\"{}\" is due tomorrow", task.title),
                    vec![AlertAction::dismiss()],
                )
            } else {
                continue;
            };

            alerts.push(Alert {
                id: format!("{}{}", kind.id_prefix(), task.id),
                kind,
                priority: kind.priority(),
                title: kind.title().to_string(),
                message,
                timestamp: task.due_date.clone(),
                source: SourceRefs {
                    task_id: Some(task.id),
                    ..SourceRefs::default()
                },
                actions,
            });
        }

        // Follow-up suggestions: recent activity grouped per contact.
        let cutoff = now - self.follow_up_window;
        let mut recent: Vec<(DateTime<Utc>, &Activity)> = activities
            .iter()
            .filter_map(|activity| {
                let ts = activity.timestamp.as_deref().and_then(dates::parse_timestamp)?;
                (ts > cutoff).then_some((ts, activity))
            })
            .collect();
        recent.sort_by(|a, b| b.0.cmp(&a.0));

        let mut by_contact: BTreeMap<RecordId, Vec<Activity>> = BTreeMap::new();
        for (_, activity) in recent {
            if let Some(contact_id) = activity.contact_id {
                by_contact.entry(contact_id).or_default().push(activity.clone());
            }
        }

        let contacts_by_id: HashMap<RecordId, &Contact> =
            contacts.iter().map(|c| (c.id, c)).collect();

        for (contact_id, group) in by_contact {
            let id = format!("{}{}", AlertKind::ContactFollowUp.id_prefix(), contact_id);
            if self.dismissed.contains(&id) {
                continue;
            }
            // Unknown contact: the activity references a deleted or
            // never-synced record, so there is nobody to follow up with.
            let Some(contact) = contacts_by_id.get(&contact_id) else {
                continue;
            };

            let noun = if group.len() == 1 { "activity" } else { "activities" };
            let message = format!("{} - {} recent {}", contact.name, group.len(), noun);
            // Groups keep the global newest-first order, so the head is
            // the latest touch point.
            let timestamp = group.first().and_then(|a| a.timestamp.clone());

            alerts.push(Alert {
                id,
                kind: AlertKind::ContactFollowUp,
                priority: AlertKind::ContactFollowUp.priority(),
                title: AlertKind::ContactFollowUp.title().to_string(),
                message,
                timestamp,
                source: SourceRefs {
                    contact_id: Some(contact_id),
                    activities: group,
                    ..SourceRefs::default()
                },
                actions: vec![AlertAction::dismiss()],
            });
        }

        sort_alerts(alerts)
    }
}

/// Order by priority rank, then newest first within a rank. An alert
/// whose timestamp is missing or unparsable sorts after every peer of
/// the same rank with a valid one; raw strings are never compared.
fn sort_alerts(alerts: Vec<Alert>) -> Vec<Alert> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, Alert)> = alerts
        .into_iter()
        .map(|alert| {
            let ts = alert.timestamp.as_deref().and_then(dates::parse_timestamp);
            (ts, alert)
        })
        .collect();

    keyed.sort_by(|(ts_a, a), (ts_b, b)| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| match (ts_a, ts_b) {
                (Some(x), Some(y)) => y.cmp(x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });

    keyed.into_iter().map(|(_, alert)| alert).collect()
}
