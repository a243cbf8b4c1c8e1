use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// A patient waiting in a department queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    name: String,
    age: u32,
    complaint: String,
}

impl PatientRecord {
    pub fn new(name: impl Into<String>, age: u32, complaint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            complaint: complaint.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn complaint(&self) -> &str {
        &self.complaint
    }
}

impl fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Age: {}, {}", self.name, self.age, self.complaint)
    }
}

/// A named department and its arrival-order queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    name: String,
    queue: VecDeque<PatientRecord>,
}

impl Department {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queue: VecDeque::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison, no trimming.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Waiting patients, front of the queue first.
    pub fn patients(&self) -> impl Iterator<Item = &PatientRecord> {
        self.queue.iter()
    }

    pub fn peek(&self) -> Option<&PatientRecord> {
        self.queue.front()
    }

    pub(crate) fn push(&mut self, record: PatientRecord) {
        self.queue.push_back(record);
    }

    pub(crate) fn pop(&mut self) -> Option<PatientRecord> {
        self.queue.pop_front()
    }
}

/// Result of serving a department that exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeOutcome {
    Served(PatientRecord),
    NoPatientWaiting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSnapshot {
    pub name: String,
    pub patients: Vec<PatientRecord>,
}

/// Serializable copy of the whole facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalSnapshot {
    pub name: String,
    pub departments: Vec<DepartmentSnapshot>,
}

impl From<&Department> for DepartmentSnapshot {
    fn from(dept: &Department) -> Self {
        Self {
            name: dept.name.clone(),
            patients: dept.queue.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_matches_ignoring_case() {
        let dept = Department::new("General Medicine");
        assert!(dept.matches("general medicine"));
        assert!(dept.matches("GENERAL MEDICINE"));
        assert!(!dept.matches(" General Medicine"));
        assert!(!dept.matches("General"));
    }

    #[test]
    fn test_department_queue_is_fifo() {
        let mut dept = Department::new("Surgery");
        dept.push(PatientRecord::new("A", 1, "x"));
        dept.push(PatientRecord::new("B", 2, "y"));
        assert_eq!(dept.len(), 2);
        assert_eq!(dept.peek().map(|p| p.name()), Some("A"));
        assert_eq!(dept.pop().unwrap().name(), "A");
        assert_eq!(dept.pop().unwrap().name(), "B");
        assert!(dept.pop().is_none());
        assert!(dept.is_empty());
    }

    #[test]
    fn test_patient_display() {
        let record = PatientRecord::new("Alice", 34, "Chest pain");
        assert_eq!(record.to_string(), "Alice, Age: 34, Chest pain");
    }
}
