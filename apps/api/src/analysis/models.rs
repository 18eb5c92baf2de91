//! Typed models for every LLM-returned report.
//!
//! The model is instructed to return exact schemas, but LLM JSON is still
//! treated as hostile input: every container is `#[serde(default)]`, nullable
//! fields are `Option`, scores accept `78` or `"78%"`, and list entries that
//! may come back as plain strings instead of objects are untagged enums.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Lenient field deserializers
// ────────────────────────────────────────────────────────────────────────────

/// Accepts a score as a JSON number or a string like `"78"` / `"78%"`.
/// Unparseable strings fall back to 70; null and other shapes to 0.
pub(crate) fn coerce_score(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(|f| f.round().clamp(0.0, 100.0) as u32)
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .map(|f| f.round().clamp(0.0, 100.0) as u32)
            .unwrap_or(70),
        _ => 0,
    }
}

fn de_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_score(&value))
}

/// Accepts a value the model sometimes emits as a string and sometimes as a
/// number or bool (years of experience, graduation year, hike percent).
fn de_stringy<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Parsed resume
// ────────────────────────────────────────────────────────────────────────────

/// Structured output of strict resume parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    pub personal_info: PersonalInfo,
    pub experience_summary: ExperienceSummary,
    pub work_history: Vec<WorkHistoryEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillProfile,
    pub additional_info: AdditionalInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceSummary {
    #[serde(deserialize_with = "de_stringy")]
    pub total_years: Option<String>,
    pub level: Option<String>,
    pub currently_employed: Option<bool>,
    pub current_company: Option<String>,
    pub current_role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkHistoryEntry {
    pub company: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub institution: Option<String>,
    #[serde(deserialize_with = "de_stringy")]
    pub year: Option<String>,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillProfile {
    pub technical: Vec<String>,
    pub tools: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalInfo {
    pub notice_period: Option<String>,
    pub current_ctc: Option<String>,
    pub expected_ctc: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Parsed job description
// ────────────────────────────────────────────────────────────────────────────

/// Structured output of strict JD parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedJd {
    pub job_info: JobInfo,
    pub requirements: JdRequirements,
    pub compensation: JdCompensation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobInfo {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub work_mode: Option<String>,
    pub employment_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JdRequirements {
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub experience_text: Option<String>,
    pub education_required: Option<String>,
    pub must_have_skills: Vec<String>,
    pub good_to_have_skills: Vec<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JdCompensation {
    pub salary_mentioned: Option<bool>,
    pub salary_text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// ATS match report
// ────────────────────────────────────────────────────────────────────────────

/// Full evidence-based match analysis between a JD and a resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchReport {
    pub match_summary: MatchSummary,
    pub scoring_breakdown: ScoringBreakdown,
    pub positive_matches: Vec<PositiveMatch>,
    pub negative_matches: Vec<NegativeMatch>,
    pub skill_analysis: SkillAnalysis,
    pub hiring_recommendation: HiringRecommendation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSummary {
    /// 0–100. Grade and recommendation are re-derived from this after parsing
    /// so the three can never contradict each other.
    #[serde(deserialize_with = "de_score")]
    pub overall_score: u32,
    pub grade: String,
    pub recommendation: String,
    pub confidence: Option<String>,
    pub one_line_summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringBreakdown {
    pub skills_score: DimensionScore,
    pub experience_score: DimensionScore,
    pub education_score: DimensionScore,
    pub responsibilities_score: DimensionScore,
    pub culture_score: DimensionScore,
}

/// One weighted scoring dimension. Evidence fields beyond score/weight
/// (matched_count, jd_requires, candidate_has, ...) pass through to the UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionScore {
    #[serde(deserialize_with = "de_score")]
    pub score: u32,
    pub weight: Option<u32>,
    #[serde(flatten)]
    pub detail: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PositiveMatch {
    pub category: Option<String>,
    pub item: Option<String>,
    pub jd_text: Option<String>,
    pub resume_text: Option<String>,
    pub match_quality: Option<String>,
    #[serde(deserialize_with = "de_stringy")]
    pub points: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NegativeMatch {
    pub category: Option<String>,
    pub item: Option<String>,
    pub jd_text: Option<String>,
    pub resume_text: Option<String>,
    pub impact: Option<String>,
    #[serde(deserialize_with = "de_stringy")]
    pub points: Option<String>,
    pub can_learn: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillAnalysis {
    pub matched_skills: Vec<MatchedSkill>,
    pub missing_skills: Vec<MissingSkill>,
}

/// The model usually returns `{"skill": ..., "resume_evidence": ...}` but
/// occasionally degrades to a bare string; accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchedSkill {
    Detailed {
        skill: String,
        #[serde(default)]
        resume_evidence: Option<String>,
    },
    Name(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MissingSkill {
    Detailed {
        skill: String,
        #[serde(default)]
        importance: Option<String>,
        #[serde(default)]
        learnability: Option<String>,
    },
    Name(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringRecommendation {
    pub decision: String,
    pub priority: Option<String>,
    pub reasoning: Option<String>,
    pub interview_focus: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Salary report
// ────────────────────────────────────────────────────────────────────────────

/// Salary recommendation grounded exclusively in resume evidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryReport {
    pub candidate_profile: CandidateProfile,
    pub job_info: SalaryJobInfo,
    pub market_rate_calculation: MarketRateCalculation,
    pub salary_recommendation: SalaryRecommendation,
    pub offer_strategy: OfferStrategy,
    pub hike_analysis: HikeAnalysis,
    pub negotiation: Negotiation,
    pub recommendation_summary: RecommendationSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub name: Option<String>,
    #[serde(deserialize_with = "de_stringy")]
    pub total_experience: Option<String>,
    pub level: Option<String>,
    pub current_company: Option<String>,
    pub current_ctc: Option<String>,
    pub expected_ctc: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryJobInfo {
    pub title: Option<String>,
    pub company_type: Option<String>,
    pub location: Option<String>,
    pub budget_range: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketRateCalculation {
    pub base_rate: BaseRate,
    pub applicable_premiums: Vec<Premium>,
    #[serde(rename = "premiums_NOT_applicable")]
    pub premiums_not_applicable: Vec<PremiumNotApplicable>,
    pub total_premium_percent: Option<f64>,
    pub adjusted_market_rate: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRate {
    pub range: Option<String>,
    pub basis: Option<String>,
}

/// A premium factor that applies only with quoted resume evidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Premium {
    pub factor: String,
    pub evidence: Option<String>,
    pub premium_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PremiumNotApplicable {
    pub factor: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRecommendation {
    #[serde(deserialize_with = "de_stringy")]
    pub minimum: Option<String>,
    #[serde(deserialize_with = "de_stringy")]
    pub recommended: Option<String>,
    #[serde(deserialize_with = "de_stringy")]
    pub maximum: Option<String>,
    #[serde(deserialize_with = "de_stringy")]
    pub stretch: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferStrategy {
    pub initial_offer: Option<String>,
    pub target_close: Option<String>,
    pub walk_away: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HikeAnalysis {
    pub current_ctc: Option<String>,
    pub recommended_offer: Option<String>,
    #[serde(deserialize_with = "de_stringy")]
    pub hike_percent: Option<String>,
    pub assessment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Negotiation {
    pub candidate_leverage: Option<String>,
    pub leverage_reasons: Vec<String>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSummary {
    pub final_recommendation: Option<String>,
    pub confidence: Option<String>,
    pub key_factors: Vec<String>,
    pub caveats: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Interview plan
// ────────────────────────────────────────────────────────────────────────────

/// Tailored interview plan seeded from the match report's probe areas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewPlan {
    pub interview_plan: InterviewPlanMeta,
    pub technical_questions: Vec<TechnicalQuestion>,
    pub experience_questions: Vec<ExperienceQuestion>,
    pub gap_probing_questions: Vec<GapProbingQuestion>,
    pub behavioral_questions: Vec<BehavioralQuestion>,
    pub scorecard: Scorecard,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewPlanMeta {
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalQuestion {
    pub question: String,
    pub tests: Option<String>,
    pub difficulty: Option<String>,
    pub why_asking: Option<String>,
    pub expected_answer: Vec<String>,
    pub green_flags: Vec<String>,
    pub red_flags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceQuestion {
    pub question: String,
    pub validates: Option<String>,
    pub probing_questions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GapProbingQuestion {
    pub gap: Option<String>,
    pub question: String,
    pub acceptable_answers: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehavioralQuestion {
    pub question: String,
    pub competency: Option<String>,
    pub look_for: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scorecard {
    pub criteria: Vec<ScorecardCriterion>,
    pub passing_score: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorecardCriterion {
    pub name: String,
    pub weight: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Comprehensive hiring report
// ────────────────────────────────────────────────────────────────────────────

/// Final hiring report. Executive summary and final decision are overwritten
/// with the match report's values after parsing (consistency invariant).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringReport {
    pub report_header: ReportHeader,
    pub executive_summary: ExecutiveSummary,
    pub candidate_profile: ReportCandidateProfile,
    pub position_details: PositionDetails,
    pub detailed_assessment: DetailedAssessment,
    pub strengths: Vec<Strength>,
    pub concerns: Vec<Concern>,
    pub interview_recommendation: InterviewRecommendation,
    pub compensation_guidance: CompensationGuidance,
    pub risk_assessment: RiskAssessment,
    pub final_recommendation: FinalRecommendation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportHeader {
    pub title: Option<String>,
    pub date: Option<String>,
    pub confidentiality: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutiveSummary {
    pub recommendation: String,
    #[serde(deserialize_with = "de_score")]
    pub ats_score: u32,
    pub grade: String,
    pub confidence: Option<String>,
    pub verdict: Option<String>,
    pub key_decision_factors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportCandidateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub current_company: Option<String>,
    pub current_role: Option<String>,
    #[serde(deserialize_with = "de_stringy")]
    pub total_experience: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionDetails {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedAssessment {
    pub skills_assessment: AssessmentScore,
    pub experience_assessment: AssessmentScore,
    pub education_assessment: EducationAssessment,
    pub culture_fit_assessment: AssessmentScore,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentScore {
    #[serde(deserialize_with = "de_score")]
    pub score: u32,
    pub rating: Option<String>,
    #[serde(flatten)]
    pub detail: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationAssessment {
    #[serde(deserialize_with = "de_score")]
    pub score: u32,
    pub rating: Option<String>,
    pub required: Option<String>,
    pub candidate_has: Option<String>,
    pub institution: Option<String>,
    pub is_premier_institution: Option<bool>,
    pub analysis: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Strength {
    pub strength: String,
    pub evidence: Option<String>,
    pub relevance_to_role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Concern {
    pub concern: String,
    pub evidence: Option<String>,
    pub severity: Option<String>,
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewRecommendation {
    pub should_interview: bool,
    pub priority: Option<String>,
    pub timeline: Option<String>,
    pub key_areas_to_probe: Vec<String>,
    pub interview_rounds: Vec<InterviewRound>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewRound {
    #[serde(deserialize_with = "de_stringy")]
    pub round: Option<String>,
    #[serde(rename = "type")]
    pub round_type: Option<String>,
    pub duration: Option<String>,
    pub focus: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompensationGuidance {
    pub market_rate: Option<String>,
    pub suggested_offer: Option<String>,
    pub offer_range: Option<String>,
    pub candidate_expectation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAssessment {
    pub overall_risk: Option<String>,
    pub flight_risk: RiskLevel,
    pub performance_risk: RiskLevel,
    pub culture_risk: RiskLevel,
}

/// The model returns either `{"level": "Low", "factors": [...]}` or a bare
/// `"Low"`; accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskLevel {
    Detailed {
        level: Option<String>,
        #[serde(default)]
        factors: Vec<String>,
    },
    Label(String),
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Detailed {
            level: None,
            factors: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalRecommendation {
    pub decision: String,
    pub confidence: Option<String>,
    pub reasoning: Option<String>,
    pub next_steps: Vec<NextStep>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NextStep {
    pub action: Option<String>,
    pub owner: Option<String>,
    pub timeline: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_score_number() {
        assert_eq!(coerce_score(&json!(78)), 78);
        assert_eq!(coerce_score(&json!(78.6)), 79);
    }

    #[test]
    fn test_coerce_score_percent_string() {
        assert_eq!(coerce_score(&json!("78%")), 78);
        assert_eq!(coerce_score(&json!(" 82 ")), 82);
    }

    #[test]
    fn test_coerce_score_unparseable_string_falls_back_to_70() {
        assert_eq!(coerce_score(&json!("strong match")), 70);
    }

    #[test]
    fn test_coerce_score_clamps_and_handles_null() {
        assert_eq!(coerce_score(&json!(140)), 100);
        assert_eq!(coerce_score(&json!(null)), 0);
    }

    #[test]
    fn test_match_report_full_deserializes() {
        let json = r#"{
            "match_summary": {
                "overall_score": "78%",
                "grade": "B+",
                "recommendation": "RECOMMEND",
                "confidence": "High",
                "one_line_summary": "Solid analyst profile with a BI tooling gap"
            },
            "scoring_breakdown": {
                "skills_score": {"score": 70, "weight": 40, "matched_count": 6, "required_count": 10},
                "experience_score": {"score": 80, "weight": 25, "jd_requires": "2-4 years", "candidate_has": "3 years"},
                "education_score": {"score": 70, "weight": 15},
                "responsibilities_score": {"score": 65, "weight": 15},
                "culture_score": {"score": 70, "weight": 5}
            },
            "positive_matches": [
                {"category": "Skill Match", "item": "SQL", "jd_text": "Strong SQL", "resume_text": "Analyzed sales data using SQL", "match_quality": "Full", "points": "+4"}
            ],
            "negative_matches": [
                {"category": "Missing Skill", "item": "Tableau", "jd_text": "Tableau or Power BI", "resume_text": "NOT FOUND in resume", "impact": "High", "points": -5, "can_learn": "2-4 weeks"}
            ],
            "skill_analysis": {
                "matched_skills": [{"skill": "Python", "resume_evidence": "Found in skills"}, "Excel"],
                "missing_skills": [{"skill": "Tableau", "importance": "Must-have", "learnability": "2-4 weeks"}]
            },
            "hiring_recommendation": {
                "decision": "RECOMMEND FOR INTERVIEW",
                "priority": "High",
                "reasoning": "Meets core requirements",
                "interview_focus": ["Dashboard experience"]
            }
        }"#;

        let report: MatchReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.match_summary.overall_score, 78);
        assert_eq!(report.scoring_breakdown.skills_score.weight, Some(40));
        assert_eq!(
            report.scoring_breakdown.skills_score.detail["matched_count"],
            json!(6)
        );
        assert_eq!(report.negative_matches[0].points.as_deref(), Some("-5"));
        assert!(matches!(
            &report.skill_analysis.matched_skills[1],
            MatchedSkill::Name(n) if n == "Excel"
        ));
        assert_eq!(report.hiring_recommendation.interview_focus.len(), 1);
    }

    #[test]
    fn test_match_report_tolerates_missing_sections() {
        let report: MatchReport =
            serde_json::from_str(r#"{"match_summary": {"overall_score": 55}}"#).unwrap();
        assert_eq!(report.match_summary.overall_score, 55);
        assert!(report.positive_matches.is_empty());
        assert_eq!(report.scoring_breakdown.skills_score.score, 0);
    }

    #[test]
    fn test_salary_report_deserializes_with_upper_case_key() {
        let json = r#"{
            "candidate_profile": {"name": "Rishi Kumar", "total_experience": 3, "level": "Mid", "current_ctc": "6 LPA"},
            "market_rate_calculation": {
                "base_rate": {"range": "8-15 LPA", "basis": "Mid level, service company"},
                "applicable_premiums": [
                    {"factor": "SQL + Python stack", "evidence": "Analyzed sales data using SQL and Python", "premium_percent": 10}
                ],
                "premiums_NOT_applicable": [
                    {"factor": "Premier institution", "reason": "Mumbai University is not IIT/NIT/BITS"}
                ],
                "total_premium_percent": 10,
                "adjusted_market_rate": "9-16 LPA"
            },
            "salary_recommendation": {"minimum": "9 LPA", "recommended": "11 LPA", "maximum": "13 LPA", "stretch": "14 LPA"},
            "hike_analysis": {"current_ctc": "6 LPA", "recommended_offer": "11 LPA", "hike_percent": "83%"},
            "recommendation_summary": {"final_recommendation": "11 LPA", "confidence": "High", "caveats": ["Verify notice period"]}
        }"#;

        let report: SalaryReport = serde_json::from_str(json).unwrap();
        assert_eq!(
            report.candidate_profile.total_experience.as_deref(),
            Some("3")
        );
        assert_eq!(report.market_rate_calculation.applicable_premiums.len(), 1);
        assert_eq!(
            report.market_rate_calculation.premiums_not_applicable[0].factor,
            "Premier institution"
        );
        assert_eq!(
            report.salary_recommendation.recommended.as_deref(),
            Some("11 LPA")
        );

        // The wire key must round-trip with the original casing.
        let serialized = serde_json::to_value(&report).unwrap();
        assert!(serialized["market_rate_calculation"]
            .get("premiums_NOT_applicable")
            .is_some());
    }

    #[test]
    fn test_hiring_report_risk_levels_accept_both_shapes() {
        let json = r#"{
            "executive_summary": {"recommendation": "RECOMMEND", "ats_score": 78, "grade": "B+"},
            "risk_assessment": {
                "overall_risk": "Low",
                "flight_risk": {"level": "Medium", "factors": ["Expected CTC above budget"]},
                "performance_risk": "Low",
                "culture_risk": {"level": "Low", "factors": []}
            }
        }"#;

        let report: HiringReport = serde_json::from_str(json).unwrap();
        assert!(matches!(
            &report.risk_assessment.flight_risk,
            RiskLevel::Detailed { level: Some(l), factors } if l == "Medium" && factors.len() == 1
        ));
        assert!(matches!(
            &report.risk_assessment.performance_risk,
            RiskLevel::Label(l) if l == "Low"
        ));
    }

    #[test]
    fn test_parsed_resume_numeric_year_coerced() {
        let json = r#"{
            "personal_info": {"name": "Rishi Kumar", "email": "rishi.kumar@email.com"},
            "experience_summary": {"total_years": 3, "level": "Mid", "currently_employed": true},
            "education": [{"degree": "B.Sc", "field": "Statistics", "institution": "Mumbai University", "year": 2020, "grade": "72%"}],
            "skills": {"technical": ["SQL", "Python"], "tools": ["Excel"]},
            "additional_info": {"notice_period": "30 days", "current_ctc": "6 LPA"}
        }"#;

        let parsed: ParsedResume = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.experience_summary.total_years.as_deref(), Some("3"));
        assert_eq!(parsed.education[0].year.as_deref(), Some("2020"));
        assert_eq!(parsed.education[0].degree.as_deref(), Some("B.Sc"));
        assert!(parsed.skills.certifications.is_empty());
    }

    #[test]
    fn test_parsed_jd_deserializes() {
        let json = r#"{
            "job_info": {"title": "Data Analyst", "company": "TechCorp Solutions", "location": "Bangalore", "work_mode": "Hybrid", "employment_type": "Full-time"},
            "requirements": {
                "experience_min": 2, "experience_max": 4, "experience_text": "2-4 years",
                "education_required": "Bachelor's degree in any field",
                "must_have_skills": ["SQL", "Python", "Excel"],
                "good_to_have_skills": ["Machine Learning basics"],
                "responsibilities": ["Analyze sales data"]
            },
            "compensation": {"salary_mentioned": true, "salary_text": "8-15 LPA"}
        }"#;

        let parsed: ParsedJd = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.requirements.experience_min, Some(2.0));
        assert_eq!(parsed.requirements.must_have_skills.len(), 3);
        assert_eq!(parsed.compensation.salary_mentioned, Some(true));
    }

    #[test]
    fn test_interview_plan_deserializes() {
        let json = r#"{
            "interview_plan": {"duration": "60-90 minutes", "difficulty": "Mid", "focus_areas": ["SQL depth"]},
            "technical_questions": [{
                "question": "Walk through a window-function query you have written",
                "tests": "SQL", "difficulty": "Medium",
                "expected_answer": ["Partitioning", "Frame clauses"],
                "green_flags": ["Concrete example"], "red_flags": ["Only textbook syntax"]
            }],
            "scorecard": {"criteria": [{"name": "Technical Skills", "weight": 30}], "passing_score": "3.5/5 average"}
        }"#;

        let plan: InterviewPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.technical_questions.len(), 1);
        assert_eq!(plan.scorecard.criteria[0].weight, Some(30));
        assert!(plan.behavioral_questions.is_empty());
    }
}
