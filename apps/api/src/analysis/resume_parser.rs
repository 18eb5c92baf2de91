//! Resume Parser — strict extraction of structured candidate data from raw
//! resume text. Only explicitly stated facts come back; anything absent is null.

use crate::analysis::models::ParsedResume;
use crate::analysis::prompts::RESUME_PARSE_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::HR_ANALYST_SYSTEM;
use crate::llm_client::{complete_json, ChatCompleter, CompletionParams};

pub async fn parse_resume(
    resume_text: &str,
    llm: &dyn ChatCompleter,
) -> Result<ParsedResume, AppError> {
    let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let params = CompletionParams {
        max_tokens: 2500,
        temperature: 0.1,
    };
    complete_json::<ParsedResume>(llm, HR_ANALYST_SYSTEM, &prompt, params)
        .await
        .map_err(AppError::from)
}
