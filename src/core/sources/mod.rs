// Collaborator interfaces for the hosted record tables.
//
// The alert feed only needs bulk reads plus one write (task completion),
// so the traits stay that narrow. The embedding shell implements them
// over its backend client; `memory::MemoryBackend` covers tests and
// offline use.

use thiserror::Error;

use super::model::{Activity, Contact, RecordId, Task};

pub mod memory;

/// Failure reported by a source collaborator.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("backend request failed: {0}")]
    Backend(String),
    #[error("record {0} not found")]
    NotFound(RecordId),
}

/// Read/write access to the tasks table.
#[allow(async_fn_in_trait)]
pub trait TaskSource {
    /// Fetch every task record.
    async fn list_all(&self) -> Result<Vec<Task>, SourceError>;
    /// Flip the completion flag on one task.
    async fn mark_completed(&self, id: RecordId) -> Result<(), SourceError>;
}

/// Read access to the activities table.
#[allow(async_fn_in_trait)]
pub trait ActivitySource {
    async fn list_all(&self) -> Result<Vec<Activity>, SourceError>;
}

/// Read access to the contacts table.
#[allow(async_fn_in_trait)]
pub trait ContactSource {
    async fn list_all(&self) -> Result<Vec<Contact>, SourceError>;
}
