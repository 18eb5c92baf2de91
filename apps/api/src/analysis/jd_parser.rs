//! JD Parser — strict extraction of role, requirements, and compensation from
//! a raw job description.

use crate::analysis::models::ParsedJd;
use crate::analysis::prompts::JD_PARSE_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::HR_ANALYST_SYSTEM;
use crate::llm_client::{complete_json, ChatCompleter, CompletionParams};

pub async fn parse_jd(jd_text: &str, llm: &dyn ChatCompleter) -> Result<ParsedJd, AppError> {
    let prompt = JD_PARSE_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
    let params = CompletionParams {
        max_tokens: 2000,
        temperature: 0.1,
    };
    complete_json::<ParsedJd>(llm, HR_ANALYST_SYSTEM, &prompt, params)
        .await
        .map_err(AppError::from)
}
