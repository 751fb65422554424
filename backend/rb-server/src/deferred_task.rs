use crate::BackgroundTasks;

use uuid::Uuid;

/// Handle to work scheduled with [`BackgroundTasks::spawn_deferred`]
#[derive(Clone)]
pub struct DeferredTask {
    id: Uuid,
    label: String,
    registry: BackgroundTasks,
}

impl DeferredTask {
    pub(crate) fn new(id: Uuid, label: &str, registry: BackgroundTasks) -> Self {
        Self {
            id,
            label: label.to_string(),
            registry,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Abort the task; false when it already finished
    pub fn cancel(&self) -> bool {
        self.registry.cancel(self.id)
    }
}
