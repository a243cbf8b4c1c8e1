use crate::domain::model::{
    Department, DepartmentSnapshot, HospitalSnapshot, PatientRecord, ServeOutcome,
};
use crate::utils::error::RegistryError;
use std::fmt::Write;

pub const DEFAULT_HOSPITAL_NAME: &str = "Hospital";

/// Departments in registration order. Render output follows this order.
pub const DEPARTMENT_NAMES: [&str; 4] = ["General Medicine", "Pediatrics", "Surgery", "Cardiology"];

/// Fixed set of departments, each with its own FIFO queue.
#[derive(Debug, Clone)]
pub struct DepartmentRegistry {
    name: String,
    departments: Vec<Department>,
}

impl DepartmentRegistry {
    pub fn new() -> Self {
        Self::with_name(DEFAULT_HOSPITAL_NAME)
    }

    /// `name` is only the root label of the render; the departments are always the same four.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            departments: DEPARTMENT_NAMES.iter().map(|n| Department::new(*n)).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn find_department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.matches(name))
    }

    fn find_department_mut(&mut self, name: &str) -> Result<&mut Department, RegistryError> {
        self.departments
            .iter_mut()
            .find(|d| d.matches(name))
            .ok_or_else(|| RegistryError::DepartmentNotFound {
                name: name.to_string(),
            })
    }

    pub fn enqueue_patient(
        &mut self,
        dept_name: &str,
        name: &str,
        age: u32,
        complaint: &str,
    ) -> Result<(), RegistryError> {
        let dept = self.find_department_mut(dept_name)?;
        dept.push(PatientRecord::new(name, age, complaint));
        tracing::debug!(
            department = dept.name(),
            queue_len = dept.len(),
            "Patient {} enqueued",
            name
        );
        Ok(())
    }

    pub fn serve_patient(&mut self, dept_name: &str) -> Result<ServeOutcome, RegistryError> {
        let dept = self.find_department_mut(dept_name)?;
        match dept.pop() {
            Some(record) => {
                tracing::debug!(
                    department = dept.name(),
                    queue_len = dept.len(),
                    "Patient {} served",
                    record.name()
                );
                Ok(ServeOutcome::Served(record))
            }
            None => {
                tracing::debug!(department = dept.name(), "No patient waiting");
                Ok(ServeOutcome::NoPatientWaiting)
            }
        }
    }

    pub fn render_state(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", self.name);
        for dept in &self.departments {
            let _ = writeln!(out, " Department: {}", dept.name());
            if dept.is_empty() {
                out.push_str("  No patients in queue.\n");
                continue;
            }
            for (i, patient) in dept.patients().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, patient);
            }
        }
        out
    }

    pub fn snapshot(&self) -> HospitalSnapshot {
        HospitalSnapshot {
            name: self.name.clone(),
            departments: self.departments.iter().map(DepartmentSnapshot::from).collect(),
        }
    }

    pub fn total_waiting(&self) -> usize {
        self.departments.iter().map(Department::len).sum()
    }
}

impl Default for DepartmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_starts_with_four_empty_departments() {
        let registry = DepartmentRegistry::new();
        let names: Vec<&str> = registry.departments().iter().map(|d| d.name()).collect();
        assert_eq!(names, DEPARTMENT_NAMES.to_vec());
        assert_eq!(registry.total_waiting(), 0);
    }

    #[test]
    fn test_find_department_does_not_trim_or_create() {
        let registry = DepartmentRegistry::new();
        assert!(registry.find_department("pediatrics").is_some());
        assert!(registry.find_department(" Pediatrics ").is_none());
        assert!(registry.find_department("Oncology").is_none());
        assert_eq!(registry.departments().len(), 4);
    }

    #[test]
    fn test_enqueue_unknown_department() {
        let mut registry = DepartmentRegistry::new();
        let err = registry
            .enqueue_patient("Oncology", "Alice", 34, "Chest pain")
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DepartmentNotFound {
                name: "Oncology".to_string()
            }
        );
        assert_eq!(registry.total_waiting(), 0);
    }

    #[test]
    fn test_core_accepts_empty_fields() {
        let mut registry = DepartmentRegistry::new();
        registry.enqueue_patient("Surgery", "", 0, "").unwrap();
        assert_eq!(registry.find_department("Surgery").unwrap().len(), 1);
    }

    #[test]
    fn test_render_empty_registry() {
        let registry = DepartmentRegistry::new();
        let expected = "Hospital\n \
                        Department: General Medicine\n  No patients in queue.\n \
                        Department: Pediatrics\n  No patients in queue.\n \
                        Department: Surgery\n  No patients in queue.\n \
                        Department: Cardiology\n  No patients in queue.\n";
        assert_eq!(registry.render_state(), expected);
    }

    #[test]
    fn test_render_uses_custom_root_label() {
        let registry = DepartmentRegistry::with_name("St. Mary's");
        assert!(registry.render_state().starts_with("St. Mary's\n"));
    }
}
