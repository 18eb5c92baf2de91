//! Interview Planning — tailored question sets with probe areas seeded from a
//! match report's identified gaps, so interviewers dig where the evidence is
//! thin instead of running a generic script.

use crate::analysis::models::{InterviewPlan, MatchReport};
use crate::analysis::prompts::INTERVIEW_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::HR_ANALYST_SYSTEM;
use crate::llm_client::{complete_json, ChatCompleter, CompletionParams};

/// Builds the "areas to probe" line from a match report's interview focus,
/// falling back to a generic instruction when no report is available.
fn probe_areas(match_report: Option<&MatchReport>) -> String {
    let focus: Vec<&str> = match_report
        .map(|r| {
            r.hiring_recommendation
                .interview_focus
                .iter()
                .take(3)
                .map(String::as_str)
                .collect()
        })
        .unwrap_or_default();

    if focus.is_empty() {
        "General assessment needed".to_string()
    } else {
        focus.join(", ")
    }
}

pub async fn generate_interview_questions(
    jd_text: &str,
    resume_text: &str,
    match_report: Option<&MatchReport>,
    llm: &dyn ChatCompleter,
) -> Result<InterviewPlan, AppError> {
    let prompt = INTERVIEW_PROMPT_TEMPLATE
        .replace("{probe_areas}", &probe_areas(match_report))
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text);
    let params = CompletionParams {
        max_tokens: 3000,
        temperature: 0.2,
    };
    complete_json::<InterviewPlan>(llm, HR_ANALYST_SYSTEM, &prompt, params)
        .await
        .map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::HiringRecommendation;

    #[test]
    fn test_probe_areas_without_report_is_generic() {
        assert_eq!(probe_areas(None), "General assessment needed");
    }

    #[test]
    fn test_probe_areas_takes_top_three_focus_items() {
        let report = MatchReport {
            hiring_recommendation: HiringRecommendation {
                interview_focus: vec![
                    "Tableau depth".to_string(),
                    "Dashboard ownership".to_string(),
                    "Statistics fundamentals".to_string(),
                    "Cloud exposure".to_string(),
                ],
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            probe_areas(Some(&report)),
            "Tableau depth, Dashboard ownership, Statistics fundamentals"
        );
    }

    #[test]
    fn test_probe_areas_empty_focus_falls_back() {
        let report = MatchReport::default();
        assert_eq!(probe_areas(Some(&report)), "General assessment needed");
    }
}
