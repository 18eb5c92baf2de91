//! Axum route handlers for the analysis and extraction API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::interview::generate_interview_questions;
use crate::analysis::jd_parser::parse_jd;
use crate::analysis::match_scoring::calculate_match;
use crate::analysis::models::{InterviewPlan, MatchReport, ParsedJd, ParsedResume, SalaryReport};
use crate::analysis::report::{run_screening, ScreeningOutcome};
use crate::analysis::resume_parser::parse_resume;
use crate::analysis::salary::recommend_salary;
use crate::errors::AppError;
use crate::extraction;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct JdRequest {
    pub jd_text: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub jd_text: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub filename: String,
    pub characters: usize,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub parsed_resume: ParsedResume,
}

#[derive(Debug, Serialize)]
pub struct ParseJdResponse {
    pub parsed_jd: ParsedJd,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub match_report: MatchReport,
}

#[derive(Debug, Serialize)]
pub struct SalaryResponse {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub salary_report: SalaryReport,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub match_report: MatchReport,
    pub interview_plan: InterviewPlan,
}

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: ScreeningOutcome,
}

fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/extract
///
/// Multipart upload (`file` field). Extracts and cleans the document text so
/// the UI can preview it before running an analysis.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("upload is missing a filename".to_string()))?;

        let data: bytes::Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        let text = extraction::extract_text(&filename, &data)?;
        tracing::info!("Extracted {} characters from {filename}", text.chars().count());

        return Ok(Json(ExtractResponse {
            filename,
            characters: text.chars().count(),
            text,
        }));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}

/// POST /api/v1/analysis/resume
///
/// Strict resume parsing: only explicitly stated facts, nulls elsewhere.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    require_text(&request.resume_text, "resume_text")?;
    let parsed_resume = parse_resume(&request.resume_text, state.llm.as_ref()).await?;
    Ok(Json(ParseResumeResponse { parsed_resume }))
}

/// POST /api/v1/analysis/jd
pub async fn handle_parse_jd(
    State(state): State<AppState>,
    Json(request): Json<JdRequest>,
) -> Result<Json<ParseJdResponse>, AppError> {
    require_text(&request.jd_text, "jd_text")?;
    let parsed_jd = parse_jd(&request.jd_text, state.llm.as_ref()).await?;
    Ok(Json(ParseJdResponse { parsed_jd }))
}

/// POST /api/v1/analysis/match
///
/// Evidence-based ATS match score. Grade and recommendation are normalized
/// from the numeric score before the response leaves the server.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    require_text(&request.jd_text, "jd_text")?;
    require_text(&request.resume_text, "resume_text")?;

    let match_report =
        calculate_match(&request.jd_text, &request.resume_text, state.llm.as_ref()).await?;

    Ok(Json(MatchResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        match_report,
    }))
}

/// POST /api/v1/analysis/salary
pub async fn handle_salary(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<SalaryResponse>, AppError> {
    require_text(&request.jd_text, "jd_text")?;
    require_text(&request.resume_text, "resume_text")?;

    let salary_report =
        recommend_salary(&request.jd_text, &request.resume_text, state.llm.as_ref()).await?;

    Ok(Json(SalaryResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        salary_report,
    }))
}

/// POST /api/v1/analysis/interview-questions
///
/// Runs the match analysis first so probe areas come from real gaps, then
/// generates the tailored question plan.
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    require_text(&request.jd_text, "jd_text")?;
    require_text(&request.resume_text, "resume_text")?;

    let llm = state.llm.as_ref();
    let match_report = calculate_match(&request.jd_text, &request.resume_text, llm).await?;
    let interview_plan = generate_interview_questions(
        &request.jd_text,
        &request.resume_text,
        Some(&match_report),
        llm,
    )
    .await?;

    Ok(Json(InterviewResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        match_report,
        interview_plan,
    }))
}

/// POST /api/v1/analysis/report
///
/// Full screening pipeline: match → salary → hiring report.
pub async fn handle_screening_report(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<ScreeningResponse>, AppError> {
    require_text(&request.jd_text, "jd_text")?;
    require_text(&request.resume_text, "resume_text")?;

    let outcome =
        run_screening(&request.jd_text, &request.resume_text, state.llm.as_ref()).await?;

    Ok(Json(ScreeningResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        outcome,
    }))
}
