//! Salary Analysis — compensation recommendation grounded exclusively in
//! resume evidence. The prompt carries the market benchmark table; premiums
//! apply only with a quoted resume citation.

use crate::analysis::models::SalaryReport;
use crate::analysis::prompts::SALARY_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::HR_ANALYST_SYSTEM;
use crate::llm_client::{complete_json, ChatCompleter, CompletionParams};

pub async fn recommend_salary(
    jd_text: &str,
    resume_text: &str,
    llm: &dyn ChatCompleter,
) -> Result<SalaryReport, AppError> {
    let prompt = SALARY_PROMPT_TEMPLATE
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text);
    let params = CompletionParams {
        max_tokens: 2500,
        temperature: 0.1,
    };
    complete_json::<SalaryReport>(llm, HR_ANALYST_SYSTEM, &prompt, params)
        .await
        .map_err(AppError::from)
}
