//! Project service - validation and CRUD orchestration

use super::{ServiceError, ServiceResult, MAX_NAME_LEN};
use crate::models::Project;
use crate::store::Repository;
use uuid::Uuid;

/// Input for creating a project
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub name: String,
    pub description: String,
}

/// Input for updating a project; absent fields stay unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub fn create_project(
    store: &mut dyn Repository,
    input: CreateProjectInput,
) -> ServiceResult<Project> {
    let name = validated_name(&input.name)?;
    let project = Project::new(name, input.description);
    Ok(store.create_project(project)?)
}

pub fn get_project(store: &dyn Repository, id: Uuid) -> ServiceResult<Project> {
    Ok(store.get_project(id)?)
}

pub fn list_projects(store: &dyn Repository) -> ServiceResult<Vec<Project>> {
    Ok(store.list_projects()?)
}

pub fn update_project(
    store: &mut dyn Repository,
    id: Uuid,
    input: UpdateProjectInput,
) -> ServiceResult<Project> {
    let mut project = store.get_project(id)?;

    if let Some(name) = input.name {
        project.name = validated_name(&name)?;
    }
    if let Some(description) = input.description {
        project.description = description;
    }
    project.touch();

    Ok(store.update_project(project)?)
}

pub fn delete_project(store: &mut dyn Repository, id: Uuid) -> ServiceResult<()> {
    Ok(store.delete_project(id)?)
}

fn validated_name(name: &str) -> ServiceResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid(
            "project name cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ServiceError::Invalid(format!(
            "project name cannot exceed {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(trimmed.to_string())
}
