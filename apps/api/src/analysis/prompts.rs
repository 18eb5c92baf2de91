// All LLM prompt constants for the analysis module. Each template carries an
// EXACT response schema; placeholders like {jd_text} are substituted with
// str::replace before sending. The shared system prompt lives in
// llm_client::prompts.

/// Resume parsing prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You are an expert resume parser. Extract ONLY information that is EXPLICITLY written in the resume.

CRITICAL RULES:
1. ONLY extract information that is EXPLICITLY STATED in the resume
2. If something is NOT mentioned, use null
3. DO NOT assume or infer anything
4. For education, extract EXACTLY what is written (if it says "B.Sc" don't write "B.Tech")
5. For skills, list ONLY skills explicitly mentioned

RESUME TEXT:
{resume_text}

Return ONLY valid JSON with this EXACT schema:
{
    "personal_info": {
        "name": "Exact name or null",
        "email": "Exact email or null",
        "phone": "Exact phone or null",
        "location": "Exact location or null"
    },
    "experience_summary": {
        "total_years": "Calculated from work history",
        "level": "Fresher/Junior/Mid/Senior/Lead based on years",
        "currently_employed": true,
        "current_company": "Name or null",
        "current_role": "Title or null"
    },
    "work_history": [
        {
            "company": "Exact company name",
            "role": "Exact job title",
            "duration": "Start - End as written",
            "achievements": ["List exactly as written"],
            "technologies": ["List only technologies mentioned"]
        }
    ],
    "education": [
        {
            "degree": "EXACT degree as written (B.Sc, BCA, B.Tech, etc.)",
            "field": "Field of study",
            "institution": "Exact institution name",
            "year": "Graduation year",
            "grade": "CGPA/Percentage if mentioned or null"
        }
    ],
    "skills": {
        "technical": ["Only explicitly listed skills"],
        "tools": ["Only explicitly listed tools"],
        "certifications": ["Only if mentioned"]
    },
    "additional_info": {
        "notice_period": "If mentioned or null",
        "current_ctc": "If mentioned or null",
        "expected_ctc": "If mentioned or null"
    }
}"#;

/// JD parsing prompt template. Replace `{jd_text}` before sending.
pub const JD_PARSE_PROMPT_TEMPLATE: &str = r#"You are an expert job description parser. Extract ONLY what is EXPLICITLY stated.

JOB DESCRIPTION:
{jd_text}

Return ONLY valid JSON with this EXACT schema:
{
    "job_info": {
        "title": "Exact title or null",
        "company": "Exact company name or null",
        "location": "Exact location or null",
        "work_mode": "Remote/Hybrid/Onsite if mentioned",
        "employment_type": "Full-time/Part-time/Contract"
    },
    "requirements": {
        "experience_min": 0,
        "experience_max": 0,
        "experience_text": "Exact text like '3-5 years'",
        "education_required": "Exact education requirement",
        "must_have_skills": ["List required skills"],
        "good_to_have_skills": ["List nice-to-have skills"],
        "responsibilities": ["Key responsibilities"]
    },
    "compensation": {
        "salary_mentioned": true,
        "salary_text": "Exact text or null"
    }
}"#;

/// ATS match scoring prompt template.
/// Replace `{jd_text}` and `{resume_text}` before sending.
pub const MATCH_SCORE_PROMPT_TEMPLATE: &str = r#"You are an ATS system. Analyze the match between JD and Resume with SPECIFIC EVIDENCE.

CRITICAL RULES:
1. For each skill match, quote the EXACT text from both JD and Resume
2. For missing skills, list ONLY skills required in JD but NOT found in Resume
3. Calculate scores based on ACTUAL matches, not assumptions
4. Be STRICT - if a skill is not explicitly mentioned in resume, it's missing

SCORING WEIGHTS:
- Skills: 40%
- Experience: 25%
- Education: 15%
- Responsibilities: 15%
- Culture: 5%

JOB DESCRIPTION:
{jd_text}

RESUME:
{resume_text}

Return ONLY valid JSON with this EXACT schema:
{
    "match_summary": {
        "overall_score": 75,
        "grade": "B+",
        "recommendation": "RECOMMEND",
        "confidence": "High",
        "one_line_summary": "Brief accurate summary"
    },
    "scoring_breakdown": {
        "skills_score": {"score": 70, "weight": 40, "matched_count": 6, "required_count": 10},
        "experience_score": {"score": 80, "weight": 25, "jd_requires": "3-5 years", "candidate_has": "4 years"},
        "education_score": {"score": 70, "weight": 15, "jd_requires": "Bachelor's", "candidate_has": "B.Sc"},
        "responsibilities_score": {"score": 65, "weight": 15},
        "culture_score": {"score": 70, "weight": 5}
    },
    "positive_matches": [
        {
            "category": "Skill Match",
            "item": "Python",
            "jd_text": "Quote exact JD requirement",
            "resume_text": "Quote exact resume mention",
            "match_quality": "Full",
            "points": "+4"
        }
    ],
    "negative_matches": [
        {
            "category": "Missing Skill",
            "item": "Tableau",
            "jd_text": "Quote exact JD requirement",
            "resume_text": "NOT FOUND in resume",
            "impact": "High",
            "points": "-5",
            "can_learn": "2-4 weeks"
        }
    ],
    "skill_analysis": {
        "matched_skills": [{"skill": "Python", "resume_evidence": "Found in skills"}],
        "missing_skills": [{"skill": "Tableau", "importance": "Must-have", "learnability": "2-4 weeks"}]
    },
    "hiring_recommendation": {
        "decision": "RECOMMEND FOR INTERVIEW",
        "priority": "High",
        "reasoning": "Detailed reasoning based on analysis",
        "interview_focus": ["Areas to probe"]
    }
}

IMPORTANT: Quote EXACT text from JD and Resume. If resume says B.Sc, don't say B.Tech."#;

/// Salary recommendation prompt template.
/// Replace `{jd_text}` and `{resume_text}` before sending.
pub const SALARY_PROMPT_TEMPLATE: &str = r#"You are a compensation analyst for Indian tech companies. Analyze salary based ONLY on what's in the resume.

CRITICAL RULES:
1. ONLY apply premium factors that are EXPLICITLY mentioned in resume
2. If education institution is not IIT/NIT/BITS, DO NOT add education premium
3. If current CTC is mentioned, use it. If NOT mentioned, state "Not provided"
4. DO NOT hallucinate or assume information

INDIAN TECH SALARY BENCHMARKS 2024-25 (CTC in LPA):
- Fresher (0-1 yr): 3-6 LPA (service), 6-12 LPA (product)
- Junior (1-3 yrs): 5-10 LPA (service), 10-18 LPA (product)
- Mid (3-5 yrs): 8-15 LPA (service), 15-25 LPA (product)
- Senior (5-8 yrs): 12-22 LPA (service), 22-40 LPA (product)
- Lead (8-12 yrs): 18-30 LPA (service), 35-55 LPA (product)

PREMIUM FACTORS (ONLY if explicitly in resume):
- IIT/NIT/BITS/IIIT education: +10-15%
- FAANG/Top startup current company: +15-25%
- Niche skills (ML/AI/Blockchain): +15-30%
- AWS/GCP/Azure certifications: +5-10%

JOB DESCRIPTION:
{jd_text}

RESUME:
{resume_text}

Return ONLY valid JSON with this EXACT schema:
{
    "candidate_profile": {
        "name": "From resume",
        "total_experience": "Calculate from resume",
        "level": "Fresher/Junior/Mid/Senior/Lead",
        "current_company": "From resume or Not mentioned",
        "current_ctc": "ONLY if mentioned, else 'Not provided'",
        "expected_ctc": "ONLY if mentioned, else 'Not provided'",
        "location": "From resume"
    },
    "job_info": {
        "title": "From JD",
        "company_type": "Product/Service/Startup",
        "location": "From JD",
        "budget_range": "From JD or Not mentioned"
    },
    "market_rate_calculation": {
        "base_rate": {
            "range": "X-Y LPA",
            "basis": "Based on experience and company type"
        },
        "applicable_premiums": [
            {
                "factor": "Only factors FOUND in resume",
                "evidence": "Quote exact text from resume",
                "premium_percent": 10
            }
        ],
        "premiums_NOT_applicable": [
            {
                "factor": "Premium that does NOT apply",
                "reason": "Not mentioned in resume / Institution is not premier"
            }
        ],
        "total_premium_percent": 0,
        "adjusted_market_rate": "X-Y LPA"
    },
    "salary_recommendation": {
        "minimum": "X LPA",
        "recommended": "Y LPA",
        "maximum": "Z LPA",
        "stretch": "W LPA"
    },
    "offer_strategy": {
        "initial_offer": "X LPA",
        "target_close": "Y LPA",
        "walk_away": "Z LPA"
    },
    "hike_analysis": {
        "current_ctc": "From resume or 'Not provided'",
        "recommended_offer": "X LPA",
        "hike_percent": "Y% or 'Cannot calculate'",
        "assessment": "Assessment of the offer"
    },
    "negotiation": {
        "candidate_leverage": "High/Medium/Low",
        "leverage_reasons": ["Based on actual resume"],
        "tips": ["Negotiation tips"]
    },
    "recommendation_summary": {
        "final_recommendation": "X LPA",
        "confidence": "High/Medium/Low",
        "key_factors": ["Key factors"],
        "caveats": ["Important notes"]
    }
}

IMPORTANT: If education is not from IIT/NIT/BITS/IIIT, explicitly state "Education premium NOT applicable"."#;

/// Interview question generation prompt template.
/// Replace `{probe_areas}`, `{jd_text}`, and `{resume_text}` before sending.
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"You are a senior interviewer. Generate interview questions based on ACTUAL JD and Resume.

AREAS TO PROBE: {probe_areas}

JOB DESCRIPTION:
{jd_text}

RESUME:
{resume_text}

Return ONLY valid JSON with this EXACT schema:
{
    "interview_plan": {
        "duration": "60-90 minutes",
        "difficulty": "Based on role level",
        "focus_areas": ["Key areas to assess"]
    },
    "technical_questions": [
        {
            "question": "Specific question based on JD",
            "tests": "What skill it tests",
            "difficulty": "Easy/Medium/Hard",
            "why_asking": "Based on JD requirement",
            "expected_answer": ["Key points"],
            "green_flags": ["Good signs"],
            "red_flags": ["Warning signs"]
        }
    ],
    "experience_questions": [
        {
            "question": "About specific resume claim",
            "validates": "What claim from resume",
            "probing_questions": ["Follow-up questions"]
        }
    ],
    "gap_probing_questions": [
        {
            "gap": "Specific skill gap identified",
            "question": "How to assess",
            "acceptable_answers": ["What's acceptable"]
        }
    ],
    "behavioral_questions": [
        {
            "question": "Behavioral question",
            "competency": "What it assesses",
            "look_for": ["What to look for"]
        }
    ],
    "scorecard": {
        "criteria": [
            {"name": "Technical Skills", "weight": 30},
            {"name": "Problem Solving", "weight": 25},
            {"name": "Experience", "weight": 20},
            {"name": "Communication", "weight": 15},
            {"name": "Culture Fit", "weight": 10}
        ],
        "passing_score": "3.5/5 average"
    }
}"#;

/// Hiring report prompt template.
/// Replace: `{ats_score}`, `{grade}`, `{recommendation}`, `{salary_text}`,
///          `{today}`, `{jd_text}`, `{resume_text}`.
pub const HIRING_REPORT_PROMPT_TEMPLATE: &str = r#"You are an HR consultant creating a comprehensive hiring report.

CRITICAL RULES:
1. Use ONLY information from the actual JD and Resume
2. DO NOT add or assume any information not present
3. If education is B.Sc, write B.Sc (not B.Tech)
4. Use the exact values provided below

PRE-CALCULATED VALUES (use these exactly):
- ATS Score: {ats_score}%
- Grade: {grade}
- Recommendation: {recommendation}
- Suggested Salary: {salary_text}

JOB DESCRIPTION:
{jd_text}

RESUME:
{resume_text}

Return ONLY valid JSON with this EXACT schema:
{
    "report_header": {
        "title": "Candidate Assessment Report",
        "date": "{today}",
        "confidentiality": "Internal Use Only"
    },
    "executive_summary": {
        "recommendation": "{recommendation}",
        "ats_score": {ats_score},
        "grade": "{grade}",
        "confidence": "High",
        "verdict": "One line using ACTUAL resume details",
        "key_decision_factors": ["Factor 1", "Factor 2", "Factor 3"]
    },
    "candidate_profile": {
        "name": "EXACT name from resume",
        "email": "From resume or Not provided",
        "phone": "From resume or Not provided",
        "location": "From resume",
        "current_company": "From resume",
        "current_role": "From resume",
        "total_experience": "Calculated from resume"
    },
    "position_details": {
        "title": "From JD",
        "company": "From JD",
        "location": "From JD"
    },
    "detailed_assessment": {
        "skills_assessment": {"score": 75, "rating": "Good", "matched_skills": [], "missing_skills": []},
        "experience_assessment": {"score": 80, "rating": "Good", "analysis": "Details"},
        "education_assessment": {
            "score": 70,
            "rating": "Good",
            "required": "What JD requires",
            "candidate_has": "EXACT education from resume",
            "institution": "EXACT institution name",
            "is_premier_institution": false
        },
        "culture_fit_assessment": {"score": 70, "rating": "Good"}
    },
    "strengths": [
        {"strength": "Specific strength", "evidence": "From resume", "relevance_to_role": "Why it matters"}
    ],
    "concerns": [
        {"concern": "Specific concern", "evidence": "What's missing", "severity": "High/Medium/Low", "mitigation": "How to address"}
    ],
    "interview_recommendation": {
        "should_interview": true,
        "priority": "High/Medium/Low",
        "timeline": "Within 1 week",
        "key_areas_to_probe": ["Area 1", "Area 2"],
        "interview_rounds": [
            {"round": 1, "type": "Technical screen", "duration": "60 min", "focus": "Core skills"}
        ]
    },
    "compensation_guidance": {
        "market_rate": "Based on analysis",
        "suggested_offer": "{salary_text}",
        "offer_range": "Min - Max",
        "candidate_expectation": "From resume or Not provided"
    },
    "risk_assessment": {
        "overall_risk": "Low/Medium/High",
        "flight_risk": {"level": "Low", "factors": []},
        "performance_risk": {"level": "Low", "factors": []},
        "culture_risk": {"level": "Low", "factors": []}
    },
    "final_recommendation": {
        "decision": "{recommendation}",
        "confidence": "High",
        "reasoning": "Comprehensive reasoning using ACTUAL data",
        "next_steps": [{"action": "Action", "owner": "Owner", "timeline": "When"}]
    }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(RESUME_PARSE_PROMPT_TEMPLATE.contains("{resume_text}"));
        assert!(JD_PARSE_PROMPT_TEMPLATE.contains("{jd_text}"));
        assert!(MATCH_SCORE_PROMPT_TEMPLATE.contains("{jd_text}"));
        assert!(MATCH_SCORE_PROMPT_TEMPLATE.contains("{resume_text}"));
        assert!(SALARY_PROMPT_TEMPLATE.contains("{jd_text}"));
        assert!(SALARY_PROMPT_TEMPLATE.contains("{resume_text}"));
        assert!(INTERVIEW_PROMPT_TEMPLATE.contains("{probe_areas}"));
        for marker in [
            "{ats_score}",
            "{grade}",
            "{recommendation}",
            "{salary_text}",
            "{today}",
            "{jd_text}",
            "{resume_text}",
        ] {
            assert!(
                HIRING_REPORT_PROMPT_TEMPLATE.contains(marker),
                "missing {marker}"
            );
        }
    }

    #[test]
    fn test_substitution_leaves_no_markers_behind() {
        let prompt = MATCH_SCORE_PROMPT_TEMPLATE
            .replace("{jd_text}", "Data Analyst JD")
            .replace("{resume_text}", "Analyst resume");
        assert!(!prompt.contains("{jd_text}"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(prompt.contains("Data Analyst JD"));
    }
}
