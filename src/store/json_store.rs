//! JSON-file-backed repository

use super::{Repository, StoreError};
use crate::models::{Project, Requirement};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PROJECTS_FILE: &str = "projects.json";
const REQUIREMENTS_FILE: &str = "requirements.json";

/// Repository persisting projects and requirements as JSON files in a data
/// directory. Records are loaded once on open; every mutation writes back.
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    projects: Vec<Project>,
    requirements: Vec<Requirement>,
    dirty: bool,
}

impl JsonStore {
    /// Open a store rooted at `data_dir`, creating the directory if missing
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        let projects = load_records(&data_dir.join(PROJECTS_FILE))?;
        let requirements = load_records(&data_dir.join(REQUIREMENTS_FILE))?;

        Ok(Self {
            data_dir,
            projects,
            requirements,
            dirty: false,
        })
    }

    /// Directory this store persists into
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn save_if_dirty(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        write_records(&self.data_dir.join(PROJECTS_FILE), &self.projects)?;
        write_records(&self.data_dir.join(REQUIREMENTS_FILE), &self.requirements)?;
        self.dirty = false;
        Ok(())
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content)?;
    Ok(())
}

impl Repository for JsonStore {
    fn create_project(&mut self, project: Project) -> Result<Project, StoreError> {
        if self
            .projects
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&project.name))
        {
            return Err(StoreError::DuplicateName(project.name));
        }
        self.projects.push(project.clone());
        self.dirty = true;
        self.save_if_dirty()?;
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
        self.dirty = true;
        self.save_if_dirty()?;
        Ok(project)
    }

    fn delete_project(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Err(StoreError::project_not_found(id));
        }
        self.requirements.retain(|r| r.project_id != id);
        self.dirty = true;
        self.save_if_dirty()
    }

    fn create_requirement(&mut self, requirement: Requirement) -> Result<Requirement, StoreError> {
        self.get_project(requirement.project_id)?;
        self.requirements.push(requirement.clone());
        self.dirty = true;
        self.save_if_dirty()?;
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
        self.dirty = true;
        self.save_if_dirty()?;
        Ok(requirement)
    }

    fn delete_requirement(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.requirements.len();
        self.requirements.retain(|r| r.id != id);
        if self.requirements.len() == before {
            return Err(StoreError::requirement_not_found(id));
        }
        self.dirty = true;
        self.save_if_dirty()
    }
}
