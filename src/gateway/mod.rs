//! Boundary to the remote task service.

mod http;

pub use http::HttpGateway;

use async_trait::async_trait;

use crate::error::TaskdeckError;
use crate::models::{NewTask, TaskId, TaskRecord, TaskStatus};

/// CRUD operations the board needs from the task service.
///
/// Every failure is reported as [`TaskdeckError::RemoteOperationFailed`].
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Full snapshot, in the order the service returns it.
    async fn list(&self) -> Result<Vec<TaskRecord>, TaskdeckError>;

    async fn create(&self, task: &NewTask) -> Result<TaskRecord, TaskdeckError>;

    /// Partial update carrying only the new status. The service may answer
    /// with the updated record or with nothing.
    async fn patch_status(
        &self,
        id: &TaskId,
        status: &TaskStatus,
    ) -> Result<Option<TaskRecord>, TaskdeckError>;

    async fn delete(&self, id: &TaskId) -> Result<(), TaskdeckError>;
}
