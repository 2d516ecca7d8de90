//! Loader for Asana "View As JSON" project exports.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::AsanaError;
use crate::models::{ApiResponse, Task};

/// Load tasks from a JSON snapshot of a project.
///
/// Snapshots come from Asana's View As JSON feature and carry the same
/// `{ "data": [...] }` envelope as the API.
pub fn load_tasks(path: impl AsRef<Path>) -> Result<Vec<Task>, AsanaError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let snapshot: ApiResponse<Vec<Task>> = serde_json::from_str(&raw)?;
    debug!(count = snapshot.data.len(), "Loaded tasks from snapshot");
    Ok(snapshot.data)
}
