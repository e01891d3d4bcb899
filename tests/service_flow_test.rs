//! End-to-end service flow: create, analyze, persist, reload

use reqd::models::RequirementStatus;
use reqd::services::{
    project_service::{self, CreateProjectInput},
    requirement_service::{self, CreateRequirementInput},
    AnalysisService,
};
use reqd::{JsonStore, Repository};
use tempfile::TempDir;

#[tokio::test]
async fn test_analyze_flow_persists_across_reopen() {
    let temp = TempDir::new().unwrap();
    let analysis = AnalysisService::mock_only();

    let requirement_id = {
        let mut store = JsonStore::open(temp.path()).unwrap();

        let project = project_service::create_project(
            &mut store,
            CreateProjectInput {
                name: "Checkout".to_string(),
                description: "Payment flow".to_string(),
            },
        )
        .unwrap();

        let requirement = requirement_service::create_requirement(
            &mut store,
            project.id,
            CreateRequirementInput {
                title: "Responsiveness".to_string(),
                text: "The system should be user-friendly and fast".to_string(),
                priority: None,
            },
        )
        .unwrap();

        let result =
            requirement_service::analyze_requirement(&mut store, &analysis, requirement.id)
                .await
                .unwrap();
        assert_eq!(result.overall_score, 25);
        assert_eq!(result.issues.len(), 4);

        requirement.id
    };

    // The analysis result must survive a store reopen with its wire shape intact
    let store = JsonStore::open(temp.path()).unwrap();
    let stored = store.get_requirement(requirement_id).unwrap();

    assert_eq!(stored.status, RequirementStatus::Analyzed);
    let persisted = stored.last_analysis.expect("analysis should be persisted");
    assert_eq!(persisted.overall_score, 25);
    assert_eq!(persisted.issues.len(), 4);
}

#[tokio::test]
async fn test_enhance_flow_persists_candidates() {
    let temp = TempDir::new().unwrap();
    let analysis = AnalysisService::mock_only();
    let mut store = JsonStore::open(temp.path()).unwrap();

    let project = project_service::create_project(
        &mut store,
        CreateProjectInput {
            name: "Checkout".to_string(),
            description: String::new(),
        },
    )
    .unwrap();

    let requirement = requirement_service::create_requirement(
        &mut store,
        project.id,
        CreateRequirementInput {
            title: "Responsiveness".to_string(),
            text: "The checkout should be user-friendly".to_string(),
            priority: None,
        },
    )
    .unwrap();

    let result = requirement_service::enhance_requirement(&mut store, &analysis, requirement.id)
        .await
        .unwrap();

    assert_eq!(result.enhancements.len(), 2);
    assert_eq!(result.recommended_index, 0);

    let stored = store.get_requirement(requirement.id).unwrap();
    let persisted = stored
        .last_enhancement
        .expect("enhancement should be persisted");
    assert_eq!(persisted.enhancements[0].quality_score, 85);
    assert_eq!(persisted.enhancements[1].quality_score, 78);
}

#[tokio::test]
async fn test_batch_analysis_matches_individual_results() {
    let analysis = AnalysisService::mock_only();
    let texts = vec![
        "The system should be user-friendly and fast".to_string(),
        "The API must respond within 2 seconds for 95% of requests".to_string(),
        "Jobs could run whenever convenient for the scheduler".to_string(),
    ];

    let batch = analysis.analyze_batch(&texts).await;
    assert_eq!(batch.len(), texts.len());

    for (text, batched) in texts.iter().zip(&batch) {
        let single = analysis.analyze(text).await;
        assert_eq!(single.overall_score, batched.overall_score);
        assert_eq!(single.issues, batched.issues);
    }
}
