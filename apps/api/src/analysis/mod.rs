//! Analysis — prompt construction, LLM calls, and typed report parsing for
//! every screening operation. All LLM traffic goes through `llm_client`.

pub mod handlers;
pub mod interview;
pub mod jd_parser;
pub mod match_scoring;
pub mod models;
pub mod prompts;
pub mod report;
pub mod resume_parser;
pub mod salary;
