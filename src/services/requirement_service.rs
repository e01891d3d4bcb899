//! Requirement service - validation, CRUD, and quality analysis hooks

use super::{AnalysisService, ServiceError, ServiceResult, MAX_NAME_LEN, MAX_TEXT_LEN};
use crate::models::{AnalysisResult, EnhancementResult, Priority, Requirement, RequirementStatus};
use crate::store::Repository;
use uuid::Uuid;

/// Input for creating a requirement
#[derive(Debug, Clone)]
pub struct CreateRequirementInput {
    pub title: String,
    pub text: String,
    pub priority: Option<Priority>,
}

/// Input for updating a requirement; absent fields stay unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateRequirementInput {
    pub title: Option<String>,
    pub text: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<RequirementStatus>,
}

pub fn create_requirement(
    store: &mut dyn Repository,
    project_id: Uuid,
    input: CreateRequirementInput,
) -> ServiceResult<Requirement> {
    let title = validated_title(&input.title)?;
    validate_text(&input.text)?;

    let mut requirement = Requirement::new(project_id, title, input.text);
    if let Some(priority) = input.priority {
        requirement.priority = priority;
    }

    Ok(store.create_requirement(requirement)?)
}

pub fn get_requirement(store: &dyn Repository, id: Uuid) -> ServiceResult<Requirement> {
    Ok(store.get_requirement(id)?)
}

pub fn list_requirements(
    store: &dyn Repository,
    project_id: Uuid,
) -> ServiceResult<Vec<Requirement>> {
    Ok(store.list_requirements(project_id)?)
}

pub fn update_requirement(
    store: &mut dyn Repository,
    id: Uuid,
    input: UpdateRequirementInput,
) -> ServiceResult<Requirement> {
    let mut requirement = store.get_requirement(id)?;

    if let Some(title) = input.title {
        requirement.title = validated_title(&title)?;
    }
    if let Some(text) = input.text {
        validate_text(&text)?;
        // Edited text invalidates any stored analysis
        if requirement.text != text {
            requirement.text = text;
            requirement.last_analysis = None;
            requirement.last_enhancement = None;
            if requirement.status == RequirementStatus::Analyzed {
                requirement.status = RequirementStatus::Draft;
            }
        }
    }
    if let Some(priority) = input.priority {
        requirement.priority = priority;
    }
    if let Some(status) = input.status {
        requirement.status = status;
    }
    requirement.touch();

    Ok(store.update_requirement(requirement)?)
}

pub fn delete_requirement(store: &mut dyn Repository, id: Uuid) -> ServiceResult<()> {
    Ok(store.delete_requirement(id)?)
}

/// Analyze a stored requirement and persist the result on the record
pub async fn analyze_requirement(
    store: &mut dyn Repository,
    analysis: &AnalysisService,
    id: Uuid,
) -> ServiceResult<AnalysisResult> {
    let mut requirement = store.get_requirement(id)?;
    let result = analysis.analyze(&requirement.text).await;
    requirement.record_analysis(result.clone());
    store.update_requirement(requirement)?;
    Ok(result)
}

/// Produce enhancement candidates for a stored requirement and persist them
pub async fn enhance_requirement(
    store: &mut dyn Repository,
    analysis: &AnalysisService,
    id: Uuid,
) -> ServiceResult<EnhancementResult> {
    let mut requirement = store.get_requirement(id)?;
    let result = analysis.enhance(&requirement.text).await;
    requirement.record_enhancement(result.clone());
    store.update_requirement(requirement)?;
    Ok(result)
}

/// Reject empty or over-length requirement text.
///
/// The analysis engine itself performs no length checks; this bound is
/// enforced at every entry point that accepts text.
pub fn validate_text(text: &str) -> ServiceResult<()> {
    if text.is_empty() {
        return Err(ServiceError::Invalid(
            "requirement text cannot be empty".to_string(),
        ));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(ServiceError::Invalid(format!(
            "requirement text cannot exceed {} characters",
            MAX_TEXT_LEN
        )));
    }
    Ok(())
}

fn validated_title(title: &str) -> ServiceResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid(
            "requirement title cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ServiceError::Invalid(format!(
            "requirement title cannot exceed {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(trimmed.to_string())
}
