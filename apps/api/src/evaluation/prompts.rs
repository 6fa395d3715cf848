// Prompt templates for the evaluation, rephrase and cover letter tasks.
// Placeholders use `{name}` and are resolved by `templates::PromptTemplate::render`.

/// Fallback text when no company blurb could be gathered.
pub const NO_COMPANY_INFO: &str =
    "No additional company information provided, ignore this section";
pub const NO_CRUNCHBASE_INFO: &str = "No Crunchbase information provided, ignore this section";
pub const NO_LINKEDIN_INFO: &str = "No LinkedIn information provided, ignore this section";
pub const NO_GITHUB_INFO: &str = "No GitHub information provided, ignore this section";

/// Resume evaluation prompt.
/// Replace: {resume_text}, {job_description}, {company_info}, {crunchbase_info},
///          {linkedin_info}, {github_info}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate a candidate's resume against a job description, providing a detailed analysis with reasoning and meta-thoughts.
Thoroughly read and understand both the job description and resume. Identify key requirements, skills, and qualifications in the job description, and cross-reference each item from the job description with the resume content. Use exact keyword matching and consider context for implicit matches. Assign scores based on the presence and relevance of matching information. Maintain objectivity and consistency in your evaluation across all analyses, and do not infer or assume information not explicitly stated in the resume. Prioritise hard skills and quantifiable achievements in your scoring.

ANALYSIS PROCESS:
- step1_understanding: your initial thoughts after reading both documents
- step2_key_requirements: the key requirements you identified
- step3_comparison: your approach to comparing the documents
- step4_scoring_rationale: what you considered while scoring

FIT CATEGORIES (each with score, feedback and reasoning):
role_fit, experience_fit, responsibilities_fit, skills_fit, qualifications_fit, culture_fit

ADDITIONAL FIELDS:
- missing_keywords: keywords from the job description absent from the resume
- overall_match_assessment: concise 3-5 sentence evaluation considering all fit assessments
- gap_assessment: gaps the candidate needs to fill to make the resume stronger
- improvement_recommendations: four concrete recommendations
- market_considerations: how the profile aligns with current market demand
- meta_reflection: confidence level (high/medium/low) and why, challenges faced, potential biases, areas for improvement
- thoughts_about_company: thoughts about the company based on the job description and resume
- thoughts_about_candidate: one line each about the candidate's LinkedIn, GitHub and resume

RULES:
1. Maintain an objective tone throughout the analysis.
2. If the job description or resume is incomplete or unclear, note this in meta_reflection and adjust scores accordingly.
3. All numerical scores are on a scale of 0-100.
4. Return your complete analysis as ONE JSON object inside a single ```json fenced block. Do not add a second code block.

OUTPUT FORMAT:
```json
{
  "analysis": {
    "process": {
      "step1_understanding": "Initial thoughts after reading documents.",
      "step2_key_requirements": ["Requirement 1", "Requirement 2"],
      "step3_comparison": "Approach to comparing the documents.",
      "step4_scoring_rationale": "Aspects considered while scoring."
    },
    "fit_analysis": {
      "role_fit": {"score": 0, "feedback": "Role fit feedback.", "reasoning": "Role fit explanation."},
      "experience_fit": {"score": 0, "feedback": "Experience fit feedback.", "reasoning": "Experience fit explanation."},
      "responsibilities_fit": {"score": 0, "feedback": "Responsibilities fit feedback.", "reasoning": "Responsibilities fit explanation."},
      "skills_fit": {"score": 0, "feedback": "Skills fit feedback.", "reasoning": "Skills fit explanation."},
      "qualifications_fit": {"score": 0, "feedback": "Qualifications fit feedback.", "reasoning": "Qualifications fit explanation."},
      "culture_fit": {"score": 0, "feedback": "Culture fit feedback.", "reasoning": "Culture fit explanation."}
    },
    "missing_keywords": ["keyword1", "keyword2"],
    "overall_match_assessment": "Concise 3-5 sentence evaluation.",
    "gap_assessment": "Gaps between the resume and the job description.",
    "improvement_recommendations": ["Recommendation 1", "Recommendation 2", "Recommendation 3", "Recommendation 4"],
    "market_considerations": "Market considerations.",
    "meta_reflection": {
      "confidence_level": "High/Medium/Low",
      "challenges_faced": "Challenges encountered.",
      "potential_biases": "Potential biases.",
      "areas_for_improvement": "Suggestions for improvement."
    },
    "thoughts_about_company": "Thoughts about the company.",
    "thoughts_about_candidate": "One line each about LinkedIn, GitHub and resume."
  }
}
```

# Company Information:
{company_info}

# Company Profile (Crunchbase):
{crunchbase_info}

# Job Description:
{job_description}

# Candidate Resume:
{resume_text}

# Candidate LinkedIn Information:
{linkedin_info}

# Candidate GitHub Information:
{github_info}"#;

/// ATS rephrase prompt. Replace: {text}
pub const REPHRASE_PROMPT_TEMPLATE: &str = r#"Please rephrase the following text according to ATS standards, including quantifiable measures and improvements where possible. Maintain precise and concise points which will pass ATS screening.

**Original Text:**
{text}

**Rephrased Text:**"#;

/// Cover letter prompt. Replace: {resume_text}, {job_description}, {company_info}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Based on the resume and job description below, write a professional cover letter tailored to the job and company, highlighting the candidate's suitability for the role. The cover letter should be in first person, concise, and align with industry standards.

**Resume:**
{resume_text}

**Job Description:**
{job_description}

**Company Info:**
{company_info}

**Cover Letter:**"#;
