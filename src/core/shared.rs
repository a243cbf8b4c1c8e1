use crate::core::registry::DepartmentRegistry;
use crate::domain::model::ServeOutcome;
use crate::utils::error::RegistryError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Registry behind a single lock, for callers that share it across threads.
///
/// Every operation holds the one lock for its whole duration. Poisoned locks are
/// recovered; no registry operation leaves a queue half-modified.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<DepartmentRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: DepartmentRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DepartmentRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn department_exists(&self, name: &str) -> bool {
        self.lock().find_department(name).is_some()
    }

    pub fn enqueue_patient(
        &self,
        dept_name: &str,
        name: &str,
        age: u32,
        complaint: &str,
    ) -> Result<(), RegistryError> {
        self.lock().enqueue_patient(dept_name, name, age, complaint)
    }

    pub fn serve_patient(&self, dept_name: &str) -> Result<ServeOutcome, RegistryError> {
        self.lock().serve_patient(dept_name)
    }

    pub fn render_state(&self) -> String {
        self.lock().render_state()
    }

    /// Runs `f` with exclusive access, for multi-step reads that must see one state.
    pub fn with<R>(&self, f: impl FnOnce(&mut DepartmentRegistry) -> R) -> R {
        f(&mut self.lock())
    }
}
