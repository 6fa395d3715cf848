// Shared system roles. Each task pairs one of these with a user prompt
// rendered from the template store.

/// System role for the full resume evaluation.
pub const EVALUATION_SYSTEM: &str =
    "You are an expert resume analyzer capable of generating detailed and insightful analysis.";

/// System role for reducing scraped pages to short blurbs.
pub const BLURB_SYSTEM: &str =
    "You are an expert in analysing long content and generating insightful blurbs from it.";

/// System role for ATS rephrasing.
pub const REPHRASE_SYSTEM: &str = "You are an expert resume writer.";

/// System role for cover letter generation.
pub const COVER_LETTER_SYSTEM: &str = "You are an expert resume and cover letter writer.";
