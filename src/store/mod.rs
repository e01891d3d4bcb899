//! Persistence layer
//!
//! A repository abstraction over an opaque store with explicit lifecycle.
//! Implementations are instance-scoped; there is no process-wide state.

mod json_store;
mod memory;

pub use json_store::JsonStore;
pub use memory::MemoryStore;

use crate::models::{Project, Requirement};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by repository operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("project '{0}' already exists")]
    DuplicateName(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl StoreError {
    pub fn project_not_found(id: Uuid) -> Self {
        Self::NotFound {
            kind: "project",
            id,
        }
    }

    pub fn requirement_not_found(id: Uuid) -> Self {
        Self::NotFound {
            kind: "requirement",
            id,
        }
    }
}

/// CRUD operations over projects and requirements
pub trait Repository: Send + Sync {
    fn create_project(&mut self, project: Project) -> Result<Project, StoreError>;
    fn get_project(&self, id: Uuid) -> Result<Project, StoreError>;
    fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    fn update_project(&mut self, project: Project) -> Result<Project, StoreError>;
    /// Delete a project together with all of its requirements
    fn delete_project(&mut self, id: Uuid) -> Result<(), StoreError>;

    fn create_requirement(&mut self, requirement: Requirement) -> Result<Requirement, StoreError>;
    fn get_requirement(&self, id: Uuid) -> Result<Requirement, StoreError>;
    /// Requirements of one project, in creation order
    fn list_requirements(&self, project_id: Uuid) -> Result<Vec<Requirement>, StoreError>;
    fn update_requirement(&mut self, requirement: Requirement) -> Result<Requirement, StoreError>;
    fn delete_requirement(&mut self, id: Uuid) -> Result<(), StoreError>;
}
