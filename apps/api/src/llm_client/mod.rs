/// LLM Client — the single point of entry for all hosted-model calls in HireLens.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All LLM interactions MUST go through this module.
///
/// The wire format is the OpenAI-compatible chat-completions API hosted by Groq.
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// Default model for all analysis calls. The 70b model is the accuracy tier;
/// override with GROQ_MODEL only for quick smoke tests.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const MAX_RETRIES: u32 = 4;
/// Progressive waits after a 429 or 5xx, one per retry attempt.
const RETRY_DELAYS_SECS: [u64; 4] = [5, 15, 30, 60];
/// Upper bound honored for a server-provided `retry-after` header.
const RETRY_AFTER_CAP_SECS: u64 = 90;
/// Wait before retrying a timed-out request.
const TIMEOUT_RETRY_SECS: u64 = 10;
/// Minimum spacing between consecutive requests. The 70b tier allows 30 req/min;
/// spacing requests client-side avoids tripping 429s in multi-step pipelines.
const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(3);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API key rejected (401 Unauthorized)")]
    Auth,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Sampling parameters for a single completion call. Each analysis operation
/// picks its own token budget and temperature.
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 3000,
            temperature: 0.1,
        }
    }
}

/// The completion seam all analysis functions call through.
///
/// Carried in `AppState` as `Arc<dyn ChatCompleter>` so tests can swap in a
/// canned-response mock without touching handler or analysis code.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (OpenAI-compatible chat completions)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single LLM client used by all services in HireLens.
/// Wraps the Groq chat-completions API with throttling and retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    /// Start time of the most recent request, shared across clones.
    last_request: Arc<tokio::sync::Mutex<Option<Instant>>>,
}

impl LlmClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
            last_request: Arc::new(tokio::sync::Mutex::new(None)),
        }
    }

    /// Startup probe: a 1-token request that confirms the key is usable.
    /// 401 is a hard failure; a 429 proves the key is valid; transport errors
    /// are logged and tolerated (the key format was already validated).
    pub async fn verify_key(&self) -> Result<(), LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: "Hi",
            }],
            max_tokens: 5,
            temperature: 0.0,
            top_p: 0.9,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .timeout(Duration::from_secs(15))
            .send()
            .await;

        match response {
            Ok(r) if r.status().as_u16() == 401 => Err(LlmError::Auth),
            Ok(r) if r.status().as_u16() == 429 => {
                warn!("Rate limited during key verification; key is valid");
                Ok(())
            }
            Ok(r) if !r.status().is_success() => {
                warn!("Key verification returned {}; proceeding", r.status());
                Ok(())
            }
            Ok(_) => {
                debug!("API key verified against model {}", self.model);
                Ok(())
            }
            Err(e) => {
                warn!("Could not verify API key ({e}); proceeding");
                Ok(())
            }
        }
    }

    /// Sleeps until at least MIN_REQUEST_INTERVAL has passed since the last
    /// request started, then stamps the new request time.
    async fn throttle(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(started) = *last {
            let elapsed = started.elapsed();
            if elapsed < MIN_REQUEST_INTERVAL {
                let wait = MIN_REQUEST_INTERVAL - elapsed;
                debug!("Throttling LLM request for {}ms", wait.as_millis());
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Picks the wait before the next attempt after a 429, preferring the
    /// server's `retry-after` header (plus a small buffer, capped) over the
    /// progressive schedule.
    fn rate_limit_delay(attempt: u32, retry_after: Option<&str>) -> Duration {
        if let Some(secs) = retry_after.and_then(|v| v.trim().parse::<u64>().ok()) {
            return Duration::from_secs((secs + 2).min(RETRY_AFTER_CAP_SECS));
        }
        let idx = (attempt as usize).min(RETRY_DELAYS_SECS.len() - 1);
        Duration::from_secs(RETRY_DELAYS_SECS[idx])
    }
}

#[async_trait]
impl ChatCompleter for LlmClient {
    /// Makes a chat-completion call, returning the assistant message text.
    /// Retries on 429 (rate limit), 5xx, and timeouts; fails fast on 401.
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: 0.9,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            self.throttle().await;

            let response = self
                .client
                .post(GROQ_API_URL)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) if e.is_timeout() => {
                    warn!(
                        "LLM request timed out, retrying after {}s (attempt {}/{})",
                        TIMEOUT_RETRY_SECS,
                        attempt + 1,
                        MAX_RETRIES
                    );
                    last_error = Some(LlmError::Http(e));
                    tokio::time::sleep(Duration::from_secs(TIMEOUT_RETRY_SECS)).await;
                    continue;
                }
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 401 {
                return Err(LlmError::Auth);
            }

            if status.as_u16() == 429 {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                let wait = Self::rate_limit_delay(attempt, retry_after.as_deref());
                warn!(
                    "Rate limited, waiting {}s (attempt {}/{})",
                    wait.as_secs(),
                    attempt + 1,
                    MAX_RETRIES
                );
                last_error = Some(LlmError::RateLimited { retries: attempt + 1 });
                tokio::time::sleep(wait).await;
                continue;
            }

            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                let idx = (attempt as usize).min(RETRY_DELAYS_SECS.len() - 1);
                tokio::time::sleep(Duration::from_secs(RETRY_DELAYS_SECS[idx])).await;
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<GroqError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat_response: ChatResponse = response.json().await?;

            if let Some(usage) = &chat_response.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            let text = chat_response
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .ok_or(LlmError::EmptyContent)?;

            return Ok(text);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// Calls the LLM and deserializes the repaired text response as JSON.
/// The prompt must instruct the model to return valid JSON.
pub async fn complete_json<T: DeserializeOwned>(
    llm: &dyn ChatCompleter,
    system: &str,
    prompt: &str,
    params: CompletionParams,
) -> Result<T, LlmError> {
    let text = llm.complete(system, prompt, params).await?;
    let repaired = repair_json(&text);
    serde_json::from_str(&repaired).map_err(LlmError::Parse)
}

/// Best-effort repair of an LLM "JSON" reply: strip markdown fences, slice to
/// the outermost object, drop trailing commas. Models on the JSON-only system
/// prompt still occasionally wrap output in fences or prose.
pub fn repair_json(text: &str) -> String {
    let text = strip_json_fences(text.trim());
    let sliced = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => text,
    };
    strip_trailing_commas(sliced)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Removes commas that directly precede a closing `}` or `]`, outside strings.
fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
                if !matches!(next, Some('}') | Some(']')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Canned-response completer for tests. Responses are served in FIFO order;
/// running out of responses is a test bug and panics.
#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    pub struct MockCompleter {
        responses: Mutex<VecDeque<String>>,
    }

    impl MockCompleter {
        pub fn new<I, S>(responses: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            }
        }
    }

    #[async_trait]
    impl ChatCompleter for MockCompleter {
        async fn complete(
            &self,
            _system: &str,
            _prompt: &str,
            _params: CompletionParams,
        ) -> Result<String, LlmError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(LlmError::EmptyContent)
        }
    }
}
