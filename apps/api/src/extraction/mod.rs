//! Filter extraction: turns a recruiter's free-text prompt plus selected tools
//! into `{category, technical, location}` search metadata via the LLM.
//!
//! The model output is never trusted as-is: `ExtractedFilters::normalize`
//! lowercases, de-duplicates, merges the selected tools, and applies the caps.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;

pub mod handlers;
pub mod prompts;

pub const MAX_CATEGORIES: usize = 3;
pub const MAX_TECHNICAL: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFilters {
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl ExtractedFilters {
    /// Lowercases and trims every term, drops blanks and duplicates (first
    /// occurrence wins), puts the selected tools at the front of `technical`,
    /// and caps both lists. A blank or literal "null" location becomes `None`.
    pub fn normalize(self, tools: &[String]) -> Self {
        let category = dedupe_lowercase(self.category, MAX_CATEGORIES);
        let technical = dedupe_lowercase(
            tools.iter().cloned().chain(self.technical),
            MAX_TECHNICAL,
        );
        let location = self
            .location
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty() && l != "null");

        Self {
            category,
            technical,
            location,
        }
    }
}

fn dedupe_lowercase<I>(terms: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for term in terms {
        let term = term.trim().to_lowercase();
        if term.is_empty() || out.contains(&term) {
            continue;
        }
        out.push(term);
        if out.len() == cap {
            break;
        }
    }
    out
}

/// Asks the LLM for search metadata and normalizes the answer.
pub async fn extract_filters(
    prompt: &str,
    tools: &[String],
    llm: &LlmClient,
) -> Result<ExtractedFilters, AppError> {
    let request = prompts::build_filter_prompt(prompt, tools);
    let raw: ExtractedFilters = llm
        .call_json(&request, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Filter extraction failed: {e}")))?;
    debug!(?raw, "raw filters from LLM");
    Ok(raw.normalize(tools))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_normalize_lowercases_and_dedupes() {
        let raw = ExtractedFilters {
            category: s(&["FinTech", "fintech ", "Data Viz"]),
            technical: s(&["React", "react", " Python", ""]),
            location: Some(" Vancouver ".to_string()),
        };
        let out = raw.normalize(&[]);
        assert_eq!(out.category, s(&["fintech", "data viz"]));
        assert_eq!(out.technical, s(&["react", "python"]));
        assert_eq!(out.location.as_deref(), Some("vancouver"));
    }

    #[test]
    fn test_normalize_merges_tools_first() {
        let raw = ExtractedFilters {
            category: vec![],
            technical: s(&["mongodb", "next.js"]),
            location: None,
        };
        let out = raw.normalize(&s(&["Next.js", "Tailwind"]));
        assert_eq!(out.technical, s(&["next.js", "tailwind", "mongodb"]));
    }

    #[test]
    fn test_normalize_caps_lists() {
        let raw = ExtractedFilters {
            category: s(&["a", "b", "c", "d", "e"]),
            technical: (0..80).map(|i| format!("tool{i}")).collect(),
            location: None,
        };
        let out = raw.normalize(&[]);
        assert_eq!(out.category.len(), MAX_CATEGORIES);
        assert_eq!(out.technical.len(), MAX_TECHNICAL);
        assert_eq!(out.technical[0], "tool0");
    }

    #[test]
    fn test_normalize_null_string_location() {
        let raw = ExtractedFilters {
            location: Some("null".to_string()),
            ..Default::default()
        };
        assert_eq!(raw.normalize(&[]).location, None);
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let f: ExtractedFilters = serde_json::from_str(r#"{"technical": ["go"]}"#).unwrap();
        assert!(f.category.is_empty());
        assert!(f.location.is_none());
    }
}
