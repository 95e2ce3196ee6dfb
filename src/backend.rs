//! Backend seam for policy mutations.
//!
//! The rewards platform owns policy persistence and business-rule
//! enforcement; this module defines the interface the UI talks to so the
//! service layer can run against the real platform, a local snapshot, or a
//! test double.

use async_trait::async_trait;

/// Error surface of the deletion operation.
#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error("Policy not found: {0}")]
    NotFound(String),

    #[error("Policy {0} is a system policy protected by the platform")]
    SystemPolicy(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Mutation capability all policy backends must implement.
#[async_trait]
pub trait PolicyBackend: Send + Sync {
    /// Delete the policy identified by `policy_id` on the platform side.
    ///
    /// Local bookkeeping (removing the policy from the in-memory
    /// collection) only happens after this returns `Ok`.
    async fn delete_policy(&self, policy_id: &str) -> Result<(), DeleteError>;
}

/// Backend used when running against a local snapshot file.
///
/// There is nothing remote to call, so every deletion is accepted; the
/// snapshot on disk is left untouched.
pub struct SnapshotBackend;

#[async_trait]
impl PolicyBackend for SnapshotBackend {
    async fn delete_policy(&self, _policy_id: &str) -> Result<(), DeleteError> {
        Ok(())
    }
}
