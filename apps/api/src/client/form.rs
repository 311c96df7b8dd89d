//! Search form state and the submit flow.
//!
//! Submit: validate -> ask the extraction service for AI filters -> merge them
//! with the form data into a `CombinedQuery` that the results view re-sends to
//! `POST /api/search`. The combined query is handed over as a value instead of
//! being parked in ambient client-side storage.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::client::api::ApiClient;
use crate::client::catalog::{
    find_option, SelectOption, EXPERIENCE_LEVELS, LOCATIONS, PROJECT_DATE_OPTIONS, SKILLS,
};
use crate::client::ClientError;
use crate::search::validation::PROMPT_REQUIRED_MESSAGE;

const MAX_SUGGESTIONS: usize = 8;

/// Tag input for skills with autocomplete over the fixed vocabulary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsInput {
    selected: Vec<String>,
}

impl SkillsInput {
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Vocabulary entries containing `typed` (case-insensitive) that are not
    /// already selected, at most eight. Empty input lists the vocabulary head.
    pub fn suggestions(&self, typed: &str) -> Vec<&'static str> {
        let typed = typed.to_lowercase();
        SKILLS
            .iter()
            .copied()
            .filter(|skill| skill.to_lowercase().contains(&typed))
            .filter(|skill| !self.selected.iter().any(|s| s == skill))
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    /// Adds a skill (free text allowed). Returns false for blanks and
    /// duplicates.
    pub fn add(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.selected.iter().any(|s| s == skill) {
            return false;
        }
        self.selected.push(skill.to_string());
        true
    }

    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != skill);
        self.selected.len() != before
    }
}

/// The plain form payload, as sent to `POST /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    pub prompt: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_date: Option<String>,
}

/// Form data plus the extraction service's reply under `filters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedQuery {
    #[serde(flatten)]
    pub data: SearchData,
    pub filters: Value,
}

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub prompt: String,
    pub skills: SkillsInput,
    location: Option<SelectOption>,
    experience: Option<SelectOption>,
    project_date: Option<SelectOption>,
}

impl SearchForm {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn set_location(&mut self, value: &str) -> Result<(), ClientError> {
        self.location = Some(pick(LOCATIONS, "location", value)?);
        Ok(())
    }

    pub fn set_experience(&mut self, value: &str) -> Result<(), ClientError> {
        self.experience = Some(pick(EXPERIENCE_LEVELS, "experience", value)?);
        Ok(())
    }

    pub fn set_project_date(&mut self, value: &str) -> Result<(), ClientError> {
        self.project_date = Some(pick(PROJECT_DATE_OPTIONS, "project date", value)?);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.prompt.is_empty() {
            return Err(ClientError::InvalidForm(PROMPT_REQUIRED_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub fn search_data(&self) -> SearchData {
        SearchData {
            prompt: self.prompt.clone(),
            skills: self.skills.selected().to_vec(),
            location: self.location.map(|o| o.value.to_string()),
            experience: self.experience.map(|o| o.value.to_string()),
            project_date: self.project_date.map(|o| o.value.to_string()),
        }
    }

    /// Runs the submit flow. A failed extraction call aborts the search.
    pub async fn submit(&self, api: &ApiClient) -> Result<CombinedQuery, ClientError> {
        self.validate()?;
        let data = self.search_data();

        let filters = api
            .extract_filters(&data.prompt, &data.skills)
            .await
            .map_err(|e| {
                warn!("filter extraction failed: {e}");
                ClientError::FilterExtraction(Box::new(e))
            })?;
        info!("AI filters received");

        Ok(CombinedQuery { data, filters })
    }
}

fn pick(
    options: &[SelectOption],
    field: &'static str,
    value: &str,
) -> Result<SelectOption, ClientError> {
    find_option(options, value).ok_or_else(|| {
        let allowed: Vec<&str> = options.iter().map(|o| o.value).collect();
        ClientError::InvalidForm(format!(
            "unknown {field} '{value}' (expected one of: {})",
            allowed.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_suggestions_filter_and_cap() {
        let input = SkillsInput::default();
        let s = input.suggestions("a");
        assert_eq!(s.len(), MAX_SUGGESTIONS);
        assert!(s.iter().all(|x| x.to_lowercase().contains('a')));
    }

    #[test]
    fn test_suggestions_exclude_selected() {
        let mut input = SkillsInput::default();
        input.add("React");
        let s = input.suggestions("react");
        assert_eq!(s, vec!["React Native"]);
    }

    #[test]
    fn test_add_trims_and_ignores_duplicates_and_blanks() {
        let mut input = SkillsInput::default();
        assert!(input.add("  Rust "));
        assert!(!input.add("Rust"));
        assert!(!input.add("   "));
        assert!(input.add("Zig"));
        assert_eq!(input.selected(), ["Rust", "Zig"]);
        assert!(input.remove("Rust"));
        assert!(!input.remove("Rust"));
        assert_eq!(input.selected(), ["Zig"]);
    }

    #[test]
    fn test_validate_rejects_empty_prompt_only() {
        let err = SearchForm::new("").validate().unwrap_err();
        assert!(err.to_string().contains(PROMPT_REQUIRED_MESSAGE));
        assert!(SearchForm::new("  ").validate().is_ok());
    }

    #[test]
    fn test_dropdowns_accept_only_known_values() {
        let mut form = SearchForm::new("x");
        form.set_location("us").unwrap();
        form.set_experience("mid").unwrap();
        form.set_project_date("2023-12").unwrap();
        assert!(form.set_location("Mars").is_err());

        let data = form.search_data();
        assert_eq!(data.location.as_deref(), Some("US"));
        assert_eq!(data.experience.as_deref(), Some("mid"));
        assert_eq!(data.project_date.as_deref(), Some("2023-12"));
    }

    #[test]
    fn test_combined_query_wire_shape() {
        let mut form = SearchForm::new("fintech dashboard");
        form.skills.add("React");
        let q = CombinedQuery {
            data: form.search_data(),
            filters: json!({"category": ["fintech"], "technical": ["react"], "location": null}),
        };
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["prompt"], "fintech dashboard");
        assert_eq!(v["skills"], json!(["React"]));
        assert!(v.get("location").is_none());
        assert_eq!(v["filters"]["category"][0], "fintech");
    }
}
