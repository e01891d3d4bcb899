//! In-memory repository, mainly for tests

use super::{Repository, StoreError};
use crate::models::{Project, Requirement};
use uuid::Uuid;

/// Instance-scoped in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Vec<Project>,
    requirements: Vec<Requirement>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository for MemoryStore {
    fn create_project(&mut self, project: Project) -> Result<Project, StoreError> {
        if self
            .projects
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&project.name))
        {
            return Err(StoreError::DuplicateName(project.name));
        }
        self.projects.push(project.clone());
        Ok(project)
    }

    fn get_project(&self, id: Uuid) -> Result<Project, StoreError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::project_not_found(id))
    }

    fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.clone())
    }

    fn update_project(&mut self, project: Project) -> Result<Project, StoreError> {
        if self
            .projects
            .iter()
            .any(|p| p.id != project.id && p.name.eq_ignore_ascii_case(&project.name))
        {
            return Err(StoreError::DuplicateName(project.name));
        }
        let existing = self
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| StoreError::project_not_found(project.id))?;
        *existing = project.clone();
        Ok(project)
    }

    fn delete_project(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Err(StoreError::project_not_found(id));
        }
        self.requirements.retain(|r| r.project_id != id);
        Ok(())
    }

    fn create_requirement(&mut self, requirement: Requirement) -> Result<Requirement, StoreError> {
        self.get_project(requirement.project_id)?;
        self.requirements.push(requirement.clone());
        Ok(requirement)
    }

    fn get_requirement(&self, id: Uuid) -> Result<Requirement, StoreError> {
        self.requirements
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::requirement_not_found(id))
    }

    fn list_requirements(&self, project_id: Uuid) -> Result<Vec<Requirement>, StoreError> {
        self.get_project(project_id)?;
        Ok(self
            .requirements
            .iter()
            .filter(|r| r.project_id == project_id)
            .cloned()
            .collect())
    }

    fn update_requirement(&mut self, requirement: Requirement) -> Result<Requirement, StoreError> {
        let existing = self
            .requirements
            .iter_mut()
            .find(|r| r.id == requirement.id)
            .ok_or_else(|| StoreError::requirement_not_found(requirement.id))?;
        *existing = requirement.clone();
        Ok(requirement)
    }

    fn delete_requirement(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.requirements.len();
        self.requirements.retain(|r| r.id != id);
        if self.requirements.len() == before {
            return Err(StoreError::requirement_not_found(id));
        }
        Ok(())
    }
}
