//! Resume Parser: uploaded PDF/DOCX bytes to plain text.

use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ResumeParseError {
    #[error("Unsupported file type '{0}'. Please upload a PDF or DOCX file.")]
    UnsupportedFileType(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("No text could be extracted from the resume")]
    NoText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, ResumeParseError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(ResumeFormat::Pdf),
            "docx" => Ok(ResumeFormat::Docx),
            _ => Err(ResumeParseError::UnsupportedFileType(extension)),
        }
    }
}

/// Extracts plain text from an uploaded resume.
pub fn extract_resume_text(file_name: &str, bytes: &[u8]) -> Result<String, ResumeParseError> {
    let format = ResumeFormat::from_file_name(file_name)?;
    debug!("Extracting text from {:?} resume '{}'", format, file_name);

    let text = match format {
        ResumeFormat::Pdf => extract_pdf_text(bytes)?,
        ResumeFormat::Docx => extract_docx_text(bytes)?,
    };

    if text.trim().is_empty() {
        warn!("Resume '{}' yielded no text", file_name);
        return Err(ResumeParseError::NoText);
    }
    Ok(text)
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, ResumeParseError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ResumeParseError::Pdf(e.to_string()))
}

fn paragraph_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<w:p(?:\s[^>]*?)?(?:/>|>(.*?)</w:p>)").expect("paragraph pattern is valid")
    })
}

fn run_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<w:t(?:\s[^>]*?)?(?:/>|>(?P<text>.*?)</w:t>)|(?P<tab><w:tab\s*/>)|(?P<br><w:br\s*/>)")
            .expect("run pattern is valid")
    })
}

/// Reads `word/document.xml` and emits each paragraph followed by a newline.
fn extract_docx_text(bytes: &[u8]) -> Result<String, ResumeParseError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ResumeParseError::Docx(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ResumeParseError::Docx(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| ResumeParseError::Docx(e.to_string()))?;

    Ok(docx_paragraphs(&xml)
        .into_iter()
        .map(|p| p + "\n")
        .collect())
}

fn docx_paragraphs(xml: &str) -> Vec<String> {
    paragraph_pattern()
        .captures_iter(xml)
        .map(|para| {
            let body = para.get(1).map(|m| m.as_str()).unwrap_or_default();
            run_pattern()
                .captures_iter(body)
                .map(|run| {
                    if let Some(text) = run.name("text") {
                        decode_entities(text.as_str())
                    } else if run.name("tab").is_some() {
                        "\t".to_string()
                    } else if run.name("br").is_some() {
                        "\n".to_string()
                    } else {
                        // self-closing <w:t/>
                        String::new()
                    }
                })
                .collect()
        })
        .collect()
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
