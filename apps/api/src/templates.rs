//! Prompt Template Store: maps each task to its template and the placeholders it needs.
//!
//! Rendering is single-pass `{name}` interpolation: substituted values are never
//! re-scanned, so resume text containing `{job_description}` stays literal.
//! Optional inputs carry a fallback sentinel and resolve even when absent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evaluation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, EVALUATION_PROMPT_TEMPLATE, NO_COMPANY_INFO,
    NO_CRUNCHBASE_INFO, NO_GITHUB_INFO, NO_LINKEDIN_INFO, REPHRASE_PROMPT_TEMPLATE,
};
use crate::gatherer::prompts::{
    COMPANY_BLURB_TEMPLATE, CRUNCHBASE_BLURB_TEMPLATE, GENERIC_BLURB_TEMPLATE,
    GITHUB_BLURB_TEMPLATE, JOB_DESCRIPTION_BLURB_TEMPLATE, LINKEDIN_BLURB_TEMPLATE,
    RESUME_BLURB_TEMPLATE,
};

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("missing placeholder: {0}")]
    MissingPlaceholder(&'static str),
}

/// Which summarization template reduces a scraped text to a blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurbKind {
    Blurb,
    Linkedin,
    Github,
    Resume,
    JobDescription,
    CompanyInfo,
    CrunchbaseProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Evaluation,
    Rephrase,
    CoverLetter,
    Blurb(BlurbKind),
}

#[derive(Debug, Clone, Copy)]
pub struct Placeholder {
    pub name: &'static str,
    /// Sentinel used when the value is absent or blank. `None` means required.
    pub fallback: Option<&'static str>,
}

const fn required(name: &'static str) -> Placeholder {
    Placeholder {
        name,
        fallback: None,
    }
}

const fn optional(name: &'static str, fallback: &'static str) -> Placeholder {
    Placeholder {
        name,
        fallback: Some(fallback),
    }
}

const EVALUATION_PLACEHOLDERS: &[Placeholder] = &[
    required("resume_text"),
    required("job_description"),
    optional("company_info", NO_COMPANY_INFO),
    optional("crunchbase_info", NO_CRUNCHBASE_INFO),
    optional("linkedin_info", NO_LINKEDIN_INFO),
    optional("github_info", NO_GITHUB_INFO),
];

const REPHRASE_PLACEHOLDERS: &[Placeholder] = &[required("text")];

const COVER_LETTER_PLACEHOLDERS: &[Placeholder] = &[
    required("resume_text"),
    required("job_description"),
    optional("company_info", NO_COMPANY_INFO),
];

const BLURB_PLACEHOLDERS: &[Placeholder] = &[required("scraped_info")];

#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub body: &'static str,
    pub placeholders: &'static [Placeholder],
}

impl Task {
    pub fn template(self) -> PromptTemplate {
        match self {
            Task::Evaluation => PromptTemplate {
                body: EVALUATION_PROMPT_TEMPLATE,
                placeholders: EVALUATION_PLACEHOLDERS,
            },
            Task::Rephrase => PromptTemplate {
                body: REPHRASE_PROMPT_TEMPLATE,
                placeholders: REPHRASE_PLACEHOLDERS,
            },
            Task::CoverLetter => PromptTemplate {
                body: COVER_LETTER_PROMPT_TEMPLATE,
                placeholders: COVER_LETTER_PLACEHOLDERS,
            },
            Task::Blurb(kind) => PromptTemplate {
                body: kind.body(),
                placeholders: BLURB_PLACEHOLDERS,
            },
        }
    }

    /// Shorthand for `self.template().render(vars)`.
    pub fn render(self, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
        self.template().render(vars)
    }
}

impl BlurbKind {
    fn body(self) -> &'static str {
        match self {
            BlurbKind::Blurb => GENERIC_BLURB_TEMPLATE,
            BlurbKind::Linkedin => LINKEDIN_BLURB_TEMPLATE,
            BlurbKind::Github => GITHUB_BLURB_TEMPLATE,
            BlurbKind::Resume => RESUME_BLURB_TEMPLATE,
            BlurbKind::JobDescription => JOB_DESCRIPTION_BLURB_TEMPLATE,
            BlurbKind::CompanyInfo => COMPANY_BLURB_TEMPLATE,
            BlurbKind::CrunchbaseProfile => CRUNCHBASE_BLURB_TEMPLATE,
        }
    }
}

impl PromptTemplate {
    /// Substitutes every declared placeholder. Undeclared `vars` are ignored.
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
        let resolved = self
            .placeholders
            .iter()
            .map(|p| {
                let supplied = vars.iter().find(|(name, _)| *name == p.name).map(|(_, v)| *v);
                let value = match (supplied, p.fallback) {
                    (Some(v), Some(fallback)) if v.trim().is_empty() => fallback,
                    (Some(v), _) => v,
                    (None, Some(fallback)) => fallback,
                    (None, None) => return Err(TemplateError::MissingPlaceholder(p.name)),
                };
                Ok((p.name, value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let extra: usize = resolved.iter().map(|(_, v)| v.len()).sum();
        let mut out = String::with_capacity(self.body.len() + extra);
        let mut rest = self.body;

        while let Some(pos) = rest.find('{') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let hit = resolved.iter().find(|(name, _)| {
                after
                    .strip_prefix(name)
                    .is_some_and(|tail| tail.starts_with('}'))
            });
            match hit {
                Some((name, value)) => {
                    out.push_str(value);
                    rest = &after[name.len() + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TASKS: [Task; 10] = [
        Task::Evaluation,
        Task::Rephrase,
        Task::CoverLetter,
        Task::Blurb(BlurbKind::Blurb),
        Task::Blurb(BlurbKind::Linkedin),
        Task::Blurb(BlurbKind::Github),
        Task::Blurb(BlurbKind::Resume),
        Task::Blurb(BlurbKind::JobDescription),
        Task::Blurb(BlurbKind::CompanyInfo),
        Task::Blurb(BlurbKind::CrunchbaseProfile),
    ];

    #[test]
    fn test_every_declared_placeholder_appears_in_its_template() {
        for task in ALL_TASKS {
            let template = task.template();
            for p in template.placeholders {
                assert!(
                    template.body.contains(&format!("{{{}}}", p.name)),
                    "{task:?} declares {} but never uses it",
                    p.name
                );
            }
        }
    }

    #[test]
    fn test_rendered_templates_leave_no_placeholder_unresolved() {
        for task in ALL_TASKS {
            let template = task.template();
            let vars: Vec<(&str, &str)> = template
                .placeholders
                .iter()
                .map(|p| (p.name, "VALUE"))
                .collect();
            let rendered = template.render(&vars).unwrap();
            for p in template.placeholders {
                assert!(!rendered.contains(&format!("{{{}}}", p.name)));
            }
        }
    }

    #[test]
    fn test_missing_required_placeholder_fails() {
        let err = Task::Evaluation
            .render(&[("resume_text", "Rust engineer")])
            .unwrap_err();
        assert_eq!(err, TemplateError::MissingPlaceholder("job_description"));
        assert_eq!(err.to_string(), "missing placeholder: job_description");
    }

    #[test]
    fn test_absent_optional_inputs_use_sentinels() {
        let rendered = Task::Evaluation
            .render(&[
                ("resume_text", "Rust engineer"),
                ("job_description", "Backend role"),
                ("linkedin_info", "   "),
            ])
            .unwrap();
        assert!(rendered.contains(NO_COMPANY_INFO));
        assert!(rendered.contains(NO_CRUNCHBASE_INFO));
        assert!(rendered.contains(NO_LINKEDIN_INFO));
        assert!(rendered.contains(NO_GITHUB_INFO));
        assert!(rendered.contains("Rust engineer"));
    }

    #[test]
    fn test_supplied_optional_input_overrides_sentinel() {
        let rendered = Task::CoverLetter
            .render(&[
                ("resume_text", "r"),
                ("job_description", "j"),
                ("company_info", "Acme builds rockets."),
            ])
            .unwrap();
        assert!(rendered.contains("Acme builds rockets."));
        assert!(!rendered.contains(NO_COMPANY_INFO));
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        const PLACEHOLDERS: &[Placeholder] = &[required("a"), required("b")];
        let template = PromptTemplate {
            body: "A={a} B={b}",
            placeholders: PLACEHOLDERS,
        };
        let rendered = template.render(&[("a", "{b}"), ("b", "2")]).unwrap();
        assert_eq!(rendered, "A={b} B=2");
    }

    #[test]
    fn test_unrelated_braces_are_preserved() {
        const PLACEHOLDERS: &[Placeholder] = &[required("name")];
        let template = PromptTemplate {
            body: r#"{"score": 0} {name} {nam} {"#,
            placeholders: PLACEHOLDERS,
        };
        let rendered = template.render(&[("name", "Ada")]).unwrap();
        assert_eq!(rendered, r#"{"score": 0} Ada {nam} {"#);
    }

    #[test]
    fn test_blurb_kind_serializes_snake_case() {
        let json = serde_json::to_string(&BlurbKind::CrunchbaseProfile).unwrap();
        assert_eq!(json, r#""crunchbase_profile""#);
    }
}
