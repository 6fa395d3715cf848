//! Which external pages describe the company and the candidate.

use serde::Serialize;

use crate::templates::BlurbKind;

const CRUNCHBASE_ORGANIZATION_URL: &str = "https://www.crunchbase.com/organization/";

/// Positional slots of the context fan-out. Order is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Company,
    Crunchbase,
    Linkedin,
    Github,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Company,
        SourceKind::Crunchbase,
        SourceKind::Linkedin,
        SourceKind::Github,
    ];

    pub fn blurb_kind(self) -> BlurbKind {
        match self {
            SourceKind::Company => BlurbKind::CompanyInfo,
            SourceKind::Crunchbase => BlurbKind::CrunchbaseProfile,
            SourceKind::Linkedin => BlurbKind::Linkedin,
            SourceKind::Github => BlurbKind::Github,
        }
    }
}

/// Optional inputs of a "Run Analysis" action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextSources {
    pub company_name: Option<String>,
    pub company_website_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

impl ContextSources {
    /// One URL per `SourceKind::ALL` slot; `None` means the slot is not configured.
    pub fn plan(&self) -> [Option<String>; 4] {
        [
            self.company_website_url.as_deref().and_then(normalize_url),
            self.company_name.as_deref().and_then(crunchbase_url),
            self.linkedin_url.as_deref().and_then(normalize_url),
            self.github_url.as_deref().and_then(normalize_url),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.plan().iter().all(Option::is_none)
    }
}

/// Trims the input and adds an `https://` scheme when none is given.
pub fn normalize_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(url.to_string())
    } else {
        Some(format!("https://{url}"))
    }
}

/// `Acme Rocket Co` → `https://www.crunchbase.com/organization/acme-rocket-co`
pub fn crunchbase_url(company_name: &str) -> Option<String> {
    let slug = company_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if slug.is_empty() {
        return None;
    }
    Some(format!("{CRUNCHBASE_ORGANIZATION_URL}{slug}"))
}
