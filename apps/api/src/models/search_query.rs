use serde::{Deserialize, Serialize};

use crate::models::developer::non_empty;

/// A validated search submission.
///
/// Produced by `search::validation::validate_search_query`; unknown request
/// fields (such as the client's AI `filters` object) are dropped there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueryInput {
    pub prompt: String,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub project_date: Option<String>,
}

impl SearchQueryInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = Some(skills.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Requested skills, or an empty slice when no skills filter was given.
    pub fn skill_filter(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }

    /// Location filter; an empty string counts as no filter.
    pub fn location_filter(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    pub fn into_record(self, id: i32, created_at: String) -> SearchQuery {
        SearchQuery {
            id,
            prompt: self.prompt,
            skills: self.skills,
            location: non_empty(self.location),
            experience: non_empty(self.experience),
            project_date: non_empty(self.project_date),
            created_at,
        }
    }
}

/// The persisted record of one search submission. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub id: i32,
    pub prompt: String,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub project_date: Option<String>,
    /// ISO-8601 UTC timestamp, millisecond precision.
    pub created_at: String,
}
