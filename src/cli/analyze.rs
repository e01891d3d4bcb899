//! `reqd analyze` / `reqd enhance` - one-off quality checks from the terminal

use crate::models::ReqdConfig;
use crate::services::{requirement_service, AnalysisService};
use crate::Result;
use colored::{ColoredString, Colorize};

pub async fn analyze(text: &str, json: bool) -> Result<()> {
    requirement_service::validate_text(text)?;

    let config = ReqdConfig::load(None)?;
    let service = AnalysisService::from_config(&config);
    let result = service.analyze(text).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{} {}", "Score:".bold(), colored_score(result.overall_score));
    if result.issues.is_empty() {
        println!("{}", "No issues found".green());
        return Ok(());
    }

    for issue in &result.issues {
        println!(
            "{} [{}] {} - {}",
            issue.severity.symbol(),
            issue.severity.name(),
            issue.category.name(),
            issue.description
        );
        println!("   {}", issue.suggestion.dimmed());
    }
    Ok(())
}

pub async fn enhance(text: &str, json: bool) -> Result<()> {
    requirement_service::validate_text(text)?;

    let config = ReqdConfig::load(None)?;
    let service = AnalysisService::from_config(&config);
    let result = service.enhance(text).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for (index, candidate) in result.enhancements.iter().enumerate() {
        let marker = if index == result.recommended_index {
            "★ recommended".green().to_string()
        } else {
            String::new()
        };
        println!(
            "{} (score {}) {}",
            format!("Candidate {}", index + 1).bold(),
            candidate.quality_score,
            marker
        );
        println!("   {}", candidate.text);
        println!("   {}", candidate.rationale.dimmed());
    }
    Ok(())
}

fn colored_score(score: i32) -> ColoredString {
    let text = score.to_string();
    if score >= 70 {
        text.green()
    } else if score >= 40 {
        text.yellow()
    } else {
        text.red()
    }
}
