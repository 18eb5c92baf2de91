//! Hiring Report — the comprehensive final assessment. The prompt pins the
//! pre-computed ATS score, grade, recommendation, and suggested salary so the
//! report cannot drift from the match analysis; a post-parse pass re-asserts
//! those values on the parsed result.

use crate::analysis::models::{HiringReport, MatchReport, SalaryReport};
use crate::analysis::prompts::HIRING_REPORT_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::HR_ANALYST_SYSTEM;
use crate::llm_client::{complete_json, ChatCompleter, CompletionParams};

/// Overwrites the report's executive summary and final decision with the match
/// report's values. Invariant: the hiring report can never disagree with the
/// match analysis on score, grade, or recommendation.
pub fn enforce_consistency(report: &mut HiringReport, match_report: &MatchReport) {
    let summary = &match_report.match_summary;
    report.executive_summary.recommendation = summary.recommendation.clone();
    report.executive_summary.ats_score = summary.overall_score;
    report.executive_summary.grade = summary.grade.clone();
    report.final_recommendation.decision = summary.recommendation.clone();
}

fn suggested_salary(salary: Option<&SalaryReport>) -> String {
    salary
        .and_then(|s| s.salary_recommendation.recommended.clone())
        .unwrap_or_else(|| "Not analyzed".to_string())
}

pub async fn generate_hiring_report(
    jd_text: &str,
    resume_text: &str,
    match_report: &MatchReport,
    salary: Option<&SalaryReport>,
    llm: &dyn ChatCompleter,
) -> Result<HiringReport, AppError> {
    let summary = &match_report.match_summary;
    let today = chrono::Utc::now().format("%B %d, %Y").to_string();

    let prompt = HIRING_REPORT_PROMPT_TEMPLATE
        .replace("{ats_score}", &summary.overall_score.to_string())
        .replace("{grade}", &summary.grade)
        .replace("{recommendation}", &summary.recommendation)
        .replace("{salary_text}", &suggested_salary(salary))
        .replace("{today}", &today)
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text);
    let params = CompletionParams {
        max_tokens: 3500,
        temperature: 0.1,
    };

    let mut report =
        complete_json::<HiringReport>(llm, HR_ANALYST_SYSTEM, &prompt, params).await?;
    enforce_consistency(&mut report, match_report);
    Ok(report)
}

/// Everything the screening pipeline produces for one candidate.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScreeningOutcome {
    pub match_report: MatchReport,
    pub salary_report: SalaryReport,
    pub hiring_report: HiringReport,
}

/// Full screening pipeline: match → salary → hiring report.
///
/// The three calls run sequentially on purpose: the salary result feeds the
/// report prompt, and the LLM client's throttle spaces them out under the
/// provider's rate limits.
pub async fn run_screening(
    jd_text: &str,
    resume_text: &str,
    llm: &dyn ChatCompleter,
) -> Result<ScreeningOutcome, AppError> {
    let match_report = crate::analysis::match_scoring::calculate_match(jd_text, resume_text, llm)
        .await?;
    tracing::info!(
        "Match analysis complete: score={} grade={}",
        match_report.match_summary.overall_score,
        match_report.match_summary.grade
    );

    let salary_report = crate::analysis::salary::recommend_salary(jd_text, resume_text, llm).await?;
    tracing::info!(
        "Salary analysis complete: recommended={:?}",
        salary_report.salary_recommendation.recommended
    );

    let hiring_report =
        generate_hiring_report(jd_text, resume_text, &match_report, Some(&salary_report), llm)
            .await?;

    Ok(ScreeningOutcome {
        match_report,
        salary_report,
        hiring_report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{ExecutiveSummary, MatchSummary, SalaryRecommendation};
    use crate::llm_client::mock::MockCompleter;

    fn match_report(score: u32, grade: &str, rec: &str) -> MatchReport {
        MatchReport {
            match_summary: MatchSummary {
                overall_score: score,
                grade: grade.to_string(),
                recommendation: rec.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_enforce_consistency_overwrites_drifted_summary() {
        let mut report = HiringReport {
            executive_summary: ExecutiveSummary {
                recommendation: "NOT RECOMMENDED".to_string(),
                ats_score: 40,
                grade: "D".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let m = match_report(78, "B+", "RECOMMEND");

        enforce_consistency(&mut report, &m);
        assert_eq!(report.executive_summary.ats_score, 78);
        assert_eq!(report.executive_summary.grade, "B+");
        assert_eq!(report.executive_summary.recommendation, "RECOMMEND");
        assert_eq!(report.final_recommendation.decision, "RECOMMEND");
    }

    #[test]
    fn test_suggested_salary_prefers_recommended_value() {
        let salary = SalaryReport {
            salary_recommendation: SalaryRecommendation {
                recommended: Some("11 LPA".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(suggested_salary(Some(&salary)), "11 LPA");
    }

    #[test]
    fn test_suggested_salary_without_analysis() {
        assert_eq!(suggested_salary(None), "Not analyzed");
        let empty = SalaryReport::default();
        assert_eq!(suggested_salary(Some(&empty)), "Not analyzed");
    }

    const MATCH_JSON: &str = r#"{
        "match_summary": {"overall_score": 78, "grade": "B", "recommendation": "CONSIDER", "confidence": "High"},
        "hiring_recommendation": {"decision": "RECOMMEND FOR INTERVIEW", "interview_focus": ["Tableau depth"]}
    }"#;

    const SALARY_JSON: &str = r#"{
        "salary_recommendation": {"minimum": "9 LPA", "recommended": "11 LPA", "maximum": "13 LPA", "stretch": "14 LPA"}
    }"#;

    const REPORT_JSON: &str = r#"{
        "executive_summary": {"recommendation": "CONSIDER", "ats_score": 70, "grade": "B", "verdict": "Capable analyst with a BI gap"},
        "interview_recommendation": {"should_interview": true, "priority": "High"},
        "final_recommendation": {"decision": "CONSIDER", "confidence": "High"}
    }"#;

    #[tokio::test]
    async fn test_run_screening_pipeline_with_canned_responses() {
        let llm = MockCompleter::new([MATCH_JSON, SALARY_JSON, REPORT_JSON]);

        let outcome = run_screening("Data Analyst JD", "Analyst resume", &llm)
            .await
            .unwrap();

        // Grade normalization ran on the match report (78 → B+ / RECOMMEND)...
        assert_eq!(outcome.match_report.match_summary.grade, "B+");
        assert_eq!(
            outcome.match_report.match_summary.recommendation,
            "RECOMMEND"
        );
        // ...and the hiring report was forced consistent with it.
        assert_eq!(outcome.hiring_report.executive_summary.ats_score, 78);
        assert_eq!(outcome.hiring_report.executive_summary.grade, "B+");
        assert_eq!(outcome.hiring_report.final_recommendation.decision, "RECOMMEND");
        // Salary flowed through untouched.
        assert_eq!(
            outcome.salary_report.salary_recommendation.recommended.as_deref(),
            Some("11 LPA")
        );
        assert!(outcome.hiring_report.interview_recommendation.should_interview);
    }

    #[tokio::test]
    async fn test_run_screening_surfaces_llm_failure() {
        // Only the match response is queued; the salary call fails.
        let llm = MockCompleter::new([MATCH_JSON]);
        let err = run_screening("jd", "resume", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
