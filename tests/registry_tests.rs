use hospital_queue::{DepartmentRegistry, PatientRecord, RegistryError, ServeOutcome};

fn served(outcome: Result<ServeOutcome, RegistryError>) -> PatientRecord {
    match outcome {
        Ok(ServeOutcome::Served(record)) => record,
        other => panic!("expected a served patient, got {:?}", other),
    }
}

#[test]
fn test_enqueue_then_serve_returns_same_record() {
    let cases = [
        ("General Medicine", "Ann", 0, "Checkup"),
        ("Pediatrics", "Tim", 7, "Fever"),
        ("Surgery", "", 120, ""),
        ("Cardiology", "Zoë Ångström", 88, "Arrhythmia, mild"),
    ];

    let mut registry = DepartmentRegistry::new();
    for (dept, name, age, complaint) in cases {
        registry.enqueue_patient(dept, name, age, complaint).unwrap();
        let record = served(registry.serve_patient(dept));
        assert_eq!(record, PatientRecord::new(name, age, complaint));
    }
    assert_eq!(registry.total_waiting(), 0);
}

#[test]
fn test_fifo_order() {
    let mut registry = DepartmentRegistry::new();
    for (name, age) in [("P1", 10), ("P2", 20), ("P3", 30)] {
        registry.enqueue_patient("Surgery", name, age, "Fracture").unwrap();
    }

    let order: Vec<String> = (0..3)
        .map(|_| served(registry.serve_patient("Surgery")).name().to_string())
        .collect();
    assert_eq!(order, vec!["P1", "P2", "P3"]);
}

#[test]
fn test_serve_empty_department_is_distinct_from_unknown() {
    let mut registry = DepartmentRegistry::new();
    assert_eq!(
        registry.serve_patient("Pediatrics"),
        Ok(ServeOutcome::NoPatientWaiting)
    );
    assert_eq!(
        registry.serve_patient("Radiology"),
        Err(RegistryError::DepartmentNotFound {
            name: "Radiology".to_string()
        })
    );
}

#[test]
fn test_case_variants_resolve_to_same_department() {
    let mut registry = DepartmentRegistry::new();
    for variant in ["surgery", "Surgery", "SURGERY", "sUrGeRy"] {
        let dept = registry.find_department(variant).unwrap();
        assert_eq!(dept.name(), "Surgery");
    }

    registry.enqueue_patient("surgery", "Bob", 44, "Appendix").unwrap();
    assert_eq!(registry.find_department("SURGERY").unwrap().len(), 1);
    assert_eq!(served(registry.serve_patient("SuRgErY")).name(), "Bob");
}

#[test]
fn test_departments_are_independent() {
    let mut registry = DepartmentRegistry::new();
    registry.enqueue_patient("Cardiology", "Alice", 34, "Chest pain").unwrap();
    registry.enqueue_patient("Pediatrics", "Tim", 7, "Fever").unwrap();

    assert_eq!(served(registry.serve_patient("Pediatrics")).name(), "Tim");
    assert_eq!(
        registry.serve_patient("Pediatrics"),
        Ok(ServeOutcome::NoPatientWaiting)
    );
    assert_eq!(registry.find_department("Cardiology").unwrap().len(), 1);
}

#[test]
fn test_render_is_deterministic() {
    let mut registry = DepartmentRegistry::new();
    registry.enqueue_patient("General Medicine", "Ann", 60, "Cough").unwrap();
    let first = registry.render_state();
    let second = registry.render_state();
    assert_eq!(first, second);
    assert_eq!(first.as_bytes(), registry.clone().render_state().as_bytes());
}

#[test]
fn test_cardiology_scenario() {
    let mut registry = DepartmentRegistry::new();
    registry.enqueue_patient("Cardiology", "Alice", 34, "Chest pain").unwrap();
    registry.enqueue_patient("Cardiology", "Bob", 50, "Palpitations").unwrap();

    let expected = "Hospital\n \
                    Department: General Medicine\n  No patients in queue.\n \
                    Department: Pediatrics\n  No patients in queue.\n \
                    Department: Surgery\n  No patients in queue.\n \
                    Department: Cardiology\n  \
                    1. Alice, Age: 34, Chest pain\n  \
                    2. Bob, Age: 50, Palpitations\n";
    assert_eq!(registry.render_state(), expected);

    let alice = served(registry.serve_patient("Cardiology"));
    assert_eq!(alice, PatientRecord::new("Alice", 34, "Chest pain"));

    let after = registry.render_state();
    assert!(after.contains(" Department: Cardiology\n  1. Bob, Age: 50, Palpitations\n"));
    assert!(!after.contains("Alice"));
    assert!(!after.contains("2."));
}
