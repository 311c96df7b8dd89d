use serde::{Deserialize, Serialize};

/// A titled sub-record attached to a developer, listing the technologies used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHighlight {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// A developer profile as returned by the API.
///
/// Optional fields serialize as `null` rather than being omitted so that
/// consumers always see the full record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub location: String,
    pub skills: Vec<String>,
    /// Free-text descriptor such as "3.5y".
    pub experience: String,
    pub projects: i32,
    /// Text-encoded decimal, e.g. "4.9".
    pub rating: String,
    pub summary: String,
    pub detailed_summary: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub hourly_rate: Option<String>,
    pub project_date: Option<String>,
    /// 0-100; used only for ordering search results.
    pub match_score: Option<i32>,
    pub project_highlights: Option<Vec<ProjectHighlight>>,
}

impl Developer {
    /// Match score used for ordering, with a missing score treated as 0.
    pub fn score(&self) -> i32 {
        self.match_score.unwrap_or(0)
    }

    /// Initials of the display name ("Alex Chen" -> "AC").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Input for creating a developer; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeveloper {
    pub name: String,
    pub username: String,
    pub location: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub projects: i32,
    pub rating: String,
    pub summary: String,
    #[serde(default)]
    pub detailed_summary: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<String>,
    #[serde(default)]
    pub project_date: Option<String>,
    #[serde(default)]
    pub match_score: Option<i32>,
    #[serde(default)]
    pub project_highlights: Option<Vec<ProjectHighlight>>,
}

impl NewDeveloper {
    /// Builds the stored record. Empty optional strings collapse to `None`.
    pub fn into_developer(self, id: i32) -> Developer {
        Developer {
            id,
            name: self.name,
            username: self.username,
            location: self.location,
            skills: self.skills,
            experience: self.experience,
            projects: self.projects,
            rating: self.rating,
            summary: self.summary,
            detailed_summary: non_empty(self.detailed_summary),
            github_url: non_empty(self.github_url),
            linkedin_url: non_empty(self.linkedin_url),
            hourly_rate: non_empty(self.hourly_rate),
            project_date: non_empty(self.project_date),
            match_score: self.match_score,
            project_highlights: self.project_highlights,
        }
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewDeveloper {
        NewDeveloper {
            name: "Priya Natarajan".to_string(),
            username: "priyan".to_string(),
            location: "Toronto, ON".to_string(),
            skills: vec!["Rust".to_string(), "Kafka".to_string()],
            experience: "4y".to_string(),
            projects: 6,
            rating: "4.6".to_string(),
            summary: "Streaming systems engineer.".to_string(),
            detailed_summary: Some(String::new()),
            github_url: Some("https://github.com/priyan".to_string()),
            linkedin_url: None,
            hourly_rate: None,
            project_date: None,
            match_score: None,
            project_highlights: None,
        }
    }

    #[test]
    fn test_developer_serializes_camel_case_with_nulls() {
        let dev = sample().into_developer(7);
        let json = serde_json::to_value(&dev).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["githubUrl"], "https://github.com/priyan");
        assert!(json["linkedinUrl"].is_null());
        assert!(json["matchScore"].is_null());
        assert!(json.get("projectHighlights").is_some());
    }

    #[test]
    fn test_empty_optional_strings_become_none() {
        let dev = sample().into_developer(1);
        assert_eq!(dev.detailed_summary, None);
    }

    #[test]
    fn test_missing_score_is_zero() {
        let dev = sample().into_developer(1);
        assert_eq!(dev.score(), 0);
    }

    #[test]
    fn test_initials() {
        let dev = sample().into_developer(1);
        assert_eq!(dev.initials(), "PN");
    }

    #[test]
    fn test_new_developer_deserializes_without_optionals() {
        let json = r#"{
            "name": "A B", "username": "ab", "location": "Oslo",
            "skills": ["Go"], "experience": "1y", "projects": 1,
            "rating": "4.0", "summary": "s"
        }"#;
        let input: NewDeveloper = serde_json::from_str(json).unwrap();
        assert!(input.match_score.is_none());
        assert!(input.project_highlights.is_none());
    }
}
