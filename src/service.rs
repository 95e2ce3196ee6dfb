//! Policy service managing the shared policy collection and deletions.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use crate::backend::{DeleteError, PolicyBackend};
use crate::policy::Policy;

/// Service that owns the loaded policy collection and runs deletions
/// against the configured backend.
///
/// Cheap to clone; all clones share the same collection and the same
/// delete-in-progress flag, so the UI can observe an in-flight deletion
/// from any component.
#[derive(Clone)]
pub struct PolicyService {
    backend: Arc<dyn PolicyBackend>,
    policies: Arc<Mutex<Vec<Policy>>>,
    delete_in_progress: Arc<Mutex<bool>>,
}

impl PolicyService {
    pub fn new(backend: Arc<dyn PolicyBackend>, policies: Vec<Policy>) -> Self {
        Self {
            backend,
            policies: Arc::new(Mutex::new(policies)),
            delete_in_progress: Arc::new(Mutex::new(false)),
        }
    }

    /// Get a copy of all loaded policies.
    pub async fn policies(&self) -> Vec<Policy> {
        self.policies.lock().await.clone()
    }

    /// Look up a single policy by identifier.
    pub async fn policy(&self, policy_id: &str) -> Option<Policy> {
        self.policies
            .lock()
            .await
            .iter()
            .find(|policy| policy.id == policy_id)
            .cloned()
    }

    pub async fn policy_count(&self) -> usize {
        self.policies.lock().await.len()
    }

    /// Check if a deletion is currently in flight.
    pub async fn is_deleting(&self) -> bool {
        *self.delete_in_progress.lock().await
    }

    /// Delete a policy through the backend, removing it from the local
    /// collection on success.
    ///
    /// The delete-in-progress flag is set for the whole duration of the
    /// backend call. A second delete while one is in flight is refused;
    /// the UI disables the confirm control while the flag is set, so this
    /// only triggers if a caller bypasses that gate.
    pub async fn delete_policy(&self, policy_id: &str) -> Result<(), DeleteError> {
        {
            let mut guard = self.delete_in_progress.lock().await;
            if *guard {
                return Err(DeleteError::Backend("another deletion is in progress".to_string()));
            }
            *guard = true;
        }

        let result = self.perform_delete(policy_id).await;

        {
            let mut guard = self.delete_in_progress.lock().await;
            *guard = false;
        }

        result
    }

    async fn perform_delete(&self, policy_id: &str) -> Result<(), DeleteError> {
        {
            let policies = self.policies.lock().await;
            if !policies.iter().any(|policy| policy.id == policy_id) {
                return Err(DeleteError::NotFound(policy_id.to_string()));
            }
        }

        self.backend.delete_policy(policy_id).await?;

        let mut policies = self.policies.lock().await;
        policies.retain(|policy| policy.id != policy_id);
        Ok(())
    }
}

/// Load a policy snapshot (JSON array of policies) from disk.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<Policy>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read policy snapshot: {}", path.as_ref().display()))?;

    let policies: Vec<Policy> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse policy snapshot: {}", path.as_ref().display()))?;

    Ok(policies)
}
