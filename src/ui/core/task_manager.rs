use super::actions::Action;
use crate::service::PolicyService;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// A background operation spawned onto the tokio runtime.
#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs service calls off the render loop and reports their outcome back
/// through an action channel drained on the next tick.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background policy deletion.
    ///
    /// Emits `PolicyDeleted` on success, `DeleteFailed` otherwise; the
    /// service's busy flag covers the whole flight.
    pub fn spawn_delete(&mut self, service: PolicyService, policy_id: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = format!("Delete policy {policy_id}");

        let handle = tokio::spawn(async move {
            match service.delete_policy(&policy_id).await {
                Ok(()) => {
                    let _ = action_sender.send(Action::PolicyDeleted(policy_id));
                }
                Err(e) => {
                    let _ = action_sender.send(Action::DeleteFailed {
                        policy_id,
                        message: e.to_string(),
                    });
                }
            }
        });

        self.track(task_id, handle, description);
        task_id
    }

    /// Spawn a background reload of the policy collection.
    pub fn spawn_policy_load(&mut self, service: PolicyService) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = "Loading policies".to_string();

        let handle = tokio::spawn(async move {
            let policies = service.policies().await;
            let _ = action_sender.send(Action::PoliciesLoaded(policies));
        });

        self.track(task_id, handle, description);
        task_id
    }

    fn track(&mut self, task_id: TaskId, handle: JoinHandle<()>, description: String) {
        self.tasks.insert(
            task_id,
            BackgroundTask {
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
    }

    /// Drop bookkeeping for tasks that have finished.
    ///
    /// Results were already delivered through the action channel.
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished.len()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
