// In-memory record backend for tests and small offline datasets.

use std::sync::{Arc, Mutex};

use super::{ActivitySource, ContactSource, SourceError, TaskSource};
use crate::core::model::{Activity, Contact, RecordId, Task};

/// Shared in-memory implementation of all three source traits.
///
/// Clones share the same underlying records, so a backend can be handed
/// to an `AlertFeed` and still be inspected or seeded from the outside.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    tasks: Mutex<Vec<Task>>,
    activities: Mutex<Vec<Activity>>,
    contacts: Mutex<Vec<Contact>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_task(&self, task: Task) {
        self.inner.tasks.lock().unwrap().push(task);
    }

    pub fn insert_activity(&self, activity: Activity) {
        self.inner.activities.lock().unwrap().push(activity);
    }

    pub fn insert_contact(&self, contact: Contact) {
        self.inner.contacts.lock().unwrap().push(contact);
    }

    /// Snapshot a single task by id.
    pub fn task(&self, id: RecordId) -> Option<Task> {
        self.inner
            .tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }
}

impl TaskSource for MemoryBackend {
    async fn list_all(&self) -> Result<Vec<Task>, SourceError> {
        Ok(self.inner.tasks.lock().unwrap().clone())
    }

    async fn mark_completed(&self, id: RecordId) -> Result<(), SourceError> {
        let mut tasks = self.inner.tasks.lock().unwrap();
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = true;
                Ok(())
            }
            None => Err(SourceError::NotFound(id)),
        }
    }
}

impl ActivitySource for MemoryBackend {
    async fn list_all(&self) -> Result<Vec<Activity>, SourceError> {
        Ok(self.inner.activities.lock().unwrap().clone())
    }
}

impl ContactSource for MemoryBackend {
    async fn list_all(&self) -> Result<Vec<Contact>, SourceError> {
        Ok(self.inner.contacts.lock().unwrap().clone())
    }
}
