// Reqd - Requirements Quality Service
// CRUD management of projects and requirements with AI-assisted text analysis

pub mod analysis;
pub mod cli;
pub mod models;
pub mod provider;
pub mod server;
pub mod services;
pub mod store;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use analysis::MockAnalysisEngine;
pub use models::{AnalysisResult, EnhancementResult, Issue, Project, Requirement};
pub use store::{JsonStore, MemoryStore, Repository};
