//! ATS Match Scoring — evidence-based JD/resume matching via the LLM, with a
//! pure-Rust normalization pass that keeps grade and recommendation consistent
//! with the numeric score.

use crate::analysis::models::MatchReport;
use crate::analysis::prompts::MATCH_SCORE_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::HR_ANALYST_SYSTEM;
use crate::llm_client::{complete_json, ChatCompleter, CompletionParams};

/// Maps an overall score to (grade, recommendation).
///
/// The model emits its own grade, but models drift; the numeric score is the
/// source of truth and these bands are applied after every match call.
pub fn grade_for_score(score: u32) -> (&'static str, &'static str) {
    match score {
        85.. => ("A", "STRONGLY RECOMMEND"),
        75..=84 => ("B+", "RECOMMEND"),
        65..=74 => ("B", "CONSIDER"),
        55..=64 => ("C", "CONSIDER WITH RESERVATIONS"),
        _ => ("D", "NOT RECOMMENDED"),
    }
}

/// Overwrites grade and recommendation from the overall score.
pub fn normalize_match_report(report: &mut MatchReport) {
    let (grade, recommendation) = grade_for_score(report.match_summary.overall_score);
    report.match_summary.grade = grade.to_string();
    report.match_summary.recommendation = recommendation.to_string();
}

/// Runs the full ATS match analysis and normalizes the summary.
pub async fn calculate_match(
    jd_text: &str,
    resume_text: &str,
    llm: &dyn ChatCompleter,
) -> Result<MatchReport, AppError> {
    let prompt = MATCH_SCORE_PROMPT_TEMPLATE
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text);
    let params = CompletionParams {
        max_tokens: 3500,
        temperature: 0.1,
    };

    let mut report =
        complete_json::<MatchReport>(llm, HR_ANALYST_SYSTEM, &prompt, params).await?;
    normalize_match_report(&mut report);
    Ok(report)
}
