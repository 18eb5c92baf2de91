// Shared prompt constants. Each analysis operation defines its own prompt
// template in analysis::prompts; this file holds cross-cutting fragments.

/// System prompt used by every analysis call. Enforces JSON-only output and
/// strict, evidence-based extraction.
pub const HR_ANALYST_SYSTEM: &str = "You are an expert HR analyst and ATS system. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Be accurate and extract only information that is explicitly stated. \
    Do not hallucinate or assume information.";
