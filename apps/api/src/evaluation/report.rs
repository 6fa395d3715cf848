//! Evaluation Report: the one place where a parsed analysis gets its defaults.
//!
//! `AnalysisRecord` is a typed view of the model's reply where every field is
//! optional. `EvaluationReport` resolves it for display: a missing score reads as 0,
//! missing feedback/reasoning as fixed placeholder sentences.

use serde::Serialize;
use serde_json::{Map, Value};

pub const DEFAULT_FEEDBACK: &str = "No feedback provided.";
pub const DEFAULT_REASONING: &str = "No reasoning provided.";

/// The six fixed evaluation dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitCategory {
    RoleFit,
    ExperienceFit,
    ResponsibilitiesFit,
    SkillsFit,
    QualificationsFit,
    CultureFit,
}

impl FitCategory {
    pub const ALL: [FitCategory; 6] = [
        FitCategory::RoleFit,
        FitCategory::ExperienceFit,
        FitCategory::ResponsibilitiesFit,
        FitCategory::SkillsFit,
        FitCategory::QualificationsFit,
        FitCategory::CultureFit,
    ];

    /// Key under `analysis.fit_analysis` in the model reply.
    pub fn key(self) -> &'static str {
        match self {
            FitCategory::RoleFit => "role_fit",
            FitCategory::ExperienceFit => "experience_fit",
            FitCategory::ResponsibilitiesFit => "responsibilities_fit",
            FitCategory::SkillsFit => "skills_fit",
            FitCategory::QualificationsFit => "qualifications_fit",
            FitCategory::CultureFit => "culture_fit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FitCategory::RoleFit => "Role Fit",
            FitCategory::ExperienceFit => "Experience Fit",
            FitCategory::ResponsibilitiesFit => "Responsibilities Fit",
            FitCategory::SkillsFit => "Skills Fit",
            FitCategory::QualificationsFit => "Qualifications Fit",
            FitCategory::CultureFit => "Culture Fit",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryRecord {
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub reasoning: Option<String>,
}

/// Typed, all-optional view of `{"analysis": {...}}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisRecord {
    /// Always six entries, in `FitCategory::ALL` order.
    pub fit_analysis: Vec<(FitCategory, CategoryRecord)>,
    pub missing_keywords: Option<Vec<String>>,
    pub overall_match_assessment: Option<String>,
    pub gap_assessment: Option<String>,
    pub improvement_recommendations: Option<Vec<String>>,
    pub meta_reflection: Option<String>,
    pub thoughts_about_company: Option<String>,
    pub thoughts_about_candidate: Option<String>,
}

impl AnalysisRecord {
    pub fn from_json(root: &Map<String, Value>) -> Self {
        let empty = Map::new();
        let analysis = root
            .get("analysis")
            .and_then(|v| v.as_object())
            .unwrap_or(&empty);
        let fits = analysis
            .get("fit_analysis")
            .and_then(|v| v.as_object())
            .unwrap_or(&empty);

        let fit_analysis = FitCategory::ALL
            .iter()
            .map(|&category| {
                let record = fits
                    .get(category.key())
                    .and_then(|v| v.as_object())
                    .map(|fit| CategoryRecord {
                        score: fit.get("score").and_then(read_score),
                        feedback: read_text(fit, "feedback"),
                        reasoning: read_text(fit, "reasoning"),
                    })
                    .unwrap_or_default();
                (category, record)
            })
            .collect();

        AnalysisRecord {
            fit_analysis,
            missing_keywords: read_string_list(analysis, "missing_keywords"),
            overall_match_assessment: read_text(analysis, "overall_match_assessment"),
            gap_assessment: read_text(analysis, "gap_assessment"),
            improvement_recommendations: read_string_list(analysis, "improvement_recommendations"),
            meta_reflection: analysis.get("meta_reflection").and_then(read_reflection),
            thoughts_about_company: read_text(analysis, "thoughts_about_company"),
            thoughts_about_candidate: read_text(analysis, "thoughts_about_candidate"),
        }
    }
}

/// Scores arrive as numbers or, occasionally, numeric strings.
fn read_score(value: &Value) -> Option<f64> {
    let score = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    score.is_finite().then_some(score)
}

fn read_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn read_string_list(map: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    map.get(key).and_then(|v| v.as_array()).map(|arr| {
        arr.iter()
            .filter_map(|item| item.as_str())
            .map(String::from)
            .collect()
    })
}

/// `meta_reflection` is either prose or an object of labelled notes.
fn read_reflection(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(notes) => {
            let lines: Vec<String> = notes
                .iter()
                .filter_map(|(key, note)| {
                    note.as_str()
                        .filter(|s| !s.trim().is_empty())
                        .map(|s| format!("{}: {}", humanize_key(key), s.trim()))
                })
                .collect();
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
        _ => None,
    }
}

fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: FitCategory,
    pub label: &'static str,
    /// 0 – 100
    pub score: u32,
    pub feedback: String,
    pub reasoning: String,
}

/// Display-ready evaluation. Every field is resolved; nothing downstream needs defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub categories: Vec<CategoryScore>,
    /// Mean of the six category scores, two decimals.
    pub overall_score: f64,
    pub missing_keywords: Vec<String>,
    pub improvement_recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_match_assessment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_assessment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_reflection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoughts_about_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoughts_about_candidate: Option<String>,
}

impl EvaluationReport {
    pub fn from_analysis(root: &Map<String, Value>) -> Self {
        Self::from_record(AnalysisRecord::from_json(root))
    }

    pub fn from_record(record: AnalysisRecord) -> Self {
        let categories: Vec<CategoryScore> = record
            .fit_analysis
            .into_iter()
            .map(|(category, fit)| CategoryScore {
                category,
                label: category.label(),
                score: fit.score.map(clamp_score).unwrap_or(0),
                feedback: fit.feedback.unwrap_or_else(|| DEFAULT_FEEDBACK.to_string()),
                reasoning: fit
                    .reasoning
                    .unwrap_or_else(|| DEFAULT_REASONING.to_string()),
            })
            .collect();

        let overall_score = if categories.is_empty() {
            0.0
        } else {
            let total: u32 = categories.iter().map(|c| c.score).sum();
            round2(total as f64 / categories.len() as f64)
        };

        EvaluationReport {
            categories,
            overall_score,
            missing_keywords: record.missing_keywords.unwrap_or_default(),
            improvement_recommendations: record.improvement_recommendations.unwrap_or_default(),
            overall_match_assessment: record.overall_match_assessment,
            gap_assessment: record.gap_assessment,
            meta_reflection: record.meta_reflection,
            thoughts_about_company: record.thoughts_about_company,
            thoughts_about_candidate: record.thoughts_about_candidate,
        }
    }
}

fn clamp_score(score: f64) -> u32 {
    score.round().clamp(0.0, 100.0) as u32
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_full_reply_maps_every_category() {
        let root = object(json!({
            "analysis": {
                "fit_analysis": {
                    "role_fit": {"score": 80, "feedback": "Strong", "reasoning": "Title match"},
                    "experience_fit": {"score": 70, "feedback": "Good", "reasoning": "5 years"},
                    "responsibilities_fit": {"score": 60, "feedback": "OK", "reasoning": "Some overlap"},
                    "skills_fit": {"score": 90, "feedback": "Great", "reasoning": "Rust, Tokio"},
                    "qualifications_fit": {"score": 50, "feedback": "Partial", "reasoning": "No degree"},
                    "culture_fit": {"score": 75, "feedback": "Likely", "reasoning": "Startup background"}
                },
                "missing_keywords": ["Kafka", "Terraform"],
                "overall_match_assessment": "A solid match.",
                "improvement_recommendations": ["Quantify impact"],
                "thoughts_about_company": "Fast-growing.",
                "thoughts_about_candidate": "Hands-on engineer."
            }
        }));

        let report = EvaluationReport::from_analysis(&root);
        let scores: Vec<u32> = report.categories.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![80, 70, 60, 90, 50, 75]);
        assert_eq!(report.categories[3].label, "Skills Fit");
        assert_eq!(report.categories[3].reasoning, "Rust, Tokio");
        assert!((report.overall_score - 70.83).abs() < 1e-9);
        assert_eq!(report.missing_keywords, vec!["Kafka", "Terraform"]);
        assert_eq!(report.overall_match_assessment.as_deref(), Some("A solid match."));
        assert!(report.gap_assessment.is_none());
    }

    #[test]
    fn test_missing_fields_get_documented_defaults() {
        let root = object(json!({
            "analysis": {
                "fit_analysis": {
                    "role_fit": {"score": 90},
                    "skills_fit": {"feedback": "Needs Go"}
                }
            }
        }));

        let report = EvaluationReport::from_analysis(&root);
        assert_eq!(report.categories.len(), 6);

        let role = &report.categories[0];
        assert_eq!(role.score, 90);
        assert_eq!(role.feedback, DEFAULT_FEEDBACK);
        assert_eq!(role.reasoning, DEFAULT_REASONING);

        let skills = &report.categories[3];
        assert_eq!(skills.score, 0);
        assert_eq!(skills.feedback, "Needs Go");

        let culture = &report.categories[5];
        assert_eq!(culture.score, 0);
        assert_eq!(culture.feedback, DEFAULT_FEEDBACK);

        assert_eq!(report.overall_score, 15.0);
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_reply_without_analysis_key_is_all_defaults() {
        let report = EvaluationReport::from_analysis(&object(json!({"a": 1})));
        assert!(report.categories.iter().all(|c| c.score == 0));
        assert_eq!(report.overall_score, 0.0);
    }

    #[test]
    fn test_scores_are_coerced_and_clamped() {
        assert_eq!(read_score(&json!("85")), Some(85.0));
        assert_eq!(read_score(&json!(" 72.5 ")), Some(72.5));
        assert_eq!(read_score(&json!("high")), None);
        assert_eq!(read_score(&json!(null)), None);
        assert_eq!(clamp_score(140.0), 100);
        assert_eq!(clamp_score(-3.0), 0);
        assert_eq!(clamp_score(72.5), 73);
    }

    #[test]
    fn test_object_meta_reflection_is_flattened() {
        let root = object(json!({
            "analysis": {
                "meta_reflection": {
                    "confidence_level": "High",
                    "challenges_faced": "",
                    "potential_biases": "Favours startups"
                }
            }
        }));
        let record = AnalysisRecord::from_json(&root);
        let reflection = record.meta_reflection.unwrap();
        assert!(reflection.contains("Confidence Level: High"));
        assert!(reflection.contains("Potential Biases: Favours startups"));
        assert!(!reflection.contains("Challenges Faced"));
    }

    #[test]
    fn test_wrong_typed_fields_degrade_to_none() {
        let root = object(json!({
            "analysis": {
                "fit_analysis": {"role_fit": "great"},
                "missing_keywords": "Kafka",
                "overall_match_assessment": 42
            }
        }));
        let record = AnalysisRecord::from_json(&root);
        assert_eq!(record.fit_analysis[0].1, CategoryRecord::default());
        assert!(record.missing_keywords.is_none());
        assert!(record.overall_match_assessment.is_none());
    }

    #[test]
    fn test_category_serializes_by_reply_key() {
        for category in FitCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, json!(category.key()));
        }
    }
}
