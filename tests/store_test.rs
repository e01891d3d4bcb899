//! Integration tests for the JSON file store

use reqd::models::{Priority, Project, Requirement};
use reqd::{JsonStore, Repository};
use tempfile::TempDir;
use uuid::Uuid;

#[test]
fn test_full_crud_cycle() {
    let temp = TempDir::new().unwrap();
    let mut store = JsonStore::open(temp.path()).unwrap();

    // Create
    let project = store
        .create_project(Project::new("Billing", "Invoicing rework"))
        .unwrap();
    let requirement = store
        .create_requirement(
            Requirement::new(project.id, "Login", "The system shall log users in")
                .with_priority(Priority::High),
        )
        .unwrap();

    // Read
    assert_eq!(store.get_project(project.id).unwrap().name, "Billing");
    assert_eq!(
        store.get_requirement(requirement.id).unwrap().priority,
        Priority::High
    );

    // Update
    let mut renamed = project.clone();
    renamed.name = "Billing v2".to_string();
    store.update_project(renamed).unwrap();
    assert_eq!(store.get_project(project.id).unwrap().name, "Billing v2");

    // Delete
    store.delete_requirement(requirement.id).unwrap();
    assert!(store.list_requirements(project.id).unwrap().is_empty());
    store.delete_project(project.id).unwrap();
    assert!(store.list_projects().unwrap().is_empty());
}

#[test]
fn test_data_survives_reopen() {
    let temp = TempDir::new().unwrap();

    let (project_id, requirement_id) = {
        let mut store = JsonStore::open(temp.path()).unwrap();
        let project = store.create_project(Project::new("Billing", "")).unwrap();
        let requirement = store
            .create_requirement(Requirement::new(
                project.id,
                "Login",
                "The system shall log users in",
            ))
            .unwrap();
        (project.id, requirement.id)
    };

    let store = JsonStore::open(temp.path()).unwrap();
    assert_eq!(store.get_project(project_id).unwrap().name, "Billing");
    assert_eq!(store.get_requirement(requirement_id).unwrap().title, "Login");
}

#[test]
fn test_requirements_listed_in_creation_order() {
    let temp = TempDir::new().unwrap();
    let mut store = JsonStore::open(temp.path()).unwrap();
    let project = store.create_project(Project::new("Billing", "")).unwrap();

    for n in 1..=3 {
        store
            .create_requirement(Requirement::new(
                project.id,
                format!("R{}", n),
                "The system shall work",
            ))
            .unwrap();
    }

    let titles: Vec<String> = store
        .list_requirements(project.id)
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["R1", "R2", "R3"]);
}

#[test]
fn test_listing_requirements_of_unknown_project_fails() {
    let temp = TempDir::new().unwrap();
    let store = JsonStore::open(temp.path()).unwrap();
    assert!(store.list_requirements(Uuid::new_v4()).is_err());
}
