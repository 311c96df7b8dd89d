//! Fixed vocabularies offered by the search form.

/// Skill vocabulary for tag-input autocomplete.
pub const SKILLS: &[&str] = &[
    "Python", "JavaScript", "TypeScript", "React", "Node.js", "Vue.js", "Angular",
    "Django", "Flask", "Express", "FastAPI", "Java", "C++", "C#", "Go", "Rust",
    "SQL", "PostgreSQL", "MySQL", "MongoDB", "Redis", "Docker", "Kubernetes",
    "AWS", "Azure", "GCP", "Git", "GraphQL", "REST API", "Machine Learning",
    "TensorFlow", "PyTorch", "Blockchain", "Solidity", "React Native", "Flutter",
    "Swift", "Kotlin", "PHP", "Ruby", "Rails", "Laravel", "Spring Boot",
    "Microservices", "DevOps", "CI/CD", "Terraform", "Jenkins", "Nginx",
    "Apache", "Linux", "WebRTC", "Socket.io", "Elasticsearch", "Kafka",
    "RabbitMQ", "Unity", "Unreal Engine", "Three.js", "D3.js", "Chart.js",
];

/// A dropdown entry: the value sent to the API and the label shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const LOCATIONS: &[SelectOption] = &[
    opt("US", "United States"),
    opt("CA", "Canada"),
    opt("UK", "United Kingdom"),
    opt("DE", "Germany"),
    opt("FR", "France"),
    opt("IN", "India"),
    opt("AU", "Australia"),
    opt("JP", "Japan"),
    opt("BR", "Brazil"),
    opt("NL", "Netherlands"),
    opt("SG", "Singapore"),
    opt("CH", "Switzerland"),
    opt("SE", "Sweden"),
    opt("NO", "Norway"),
    opt("DK", "Denmark"),
    opt("FI", "Finland"),
    opt("IE", "Ireland"),
    opt("IL", "Israel"),
    opt("NZ", "New Zealand"),
    opt("ES", "Spain"),
];

pub const EXPERIENCE_LEVELS: &[SelectOption] = &[
    opt("junior", "Junior (0-2 years)"),
    opt("mid", "Mid-level (2-5 years)"),
    opt("senior", "Senior (5+ years)"),
];

pub const PROJECT_DATE_OPTIONS: &[SelectOption] = &[
    opt("2024-01", "January 2024"),
    opt("2023-12", "December 2023"),
    opt("2023-11", "November 2023"),
    opt("2023-10", "October 2023"),
    opt("2023-09", "September 2023"),
    opt("2023-08", "August 2023"),
];

/// Finds the option whose value matches, ignoring ASCII case.
pub fn find_option(options: &[SelectOption], value: &str) -> Option<SelectOption> {
    options
        .iter()
        .copied()
        .find(|o| o.value.eq_ignore_ascii_case(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_option_list_sizes() {
        assert_eq!(LOCATIONS.len(), 20);
        assert_eq!(EXPERIENCE_LEVELS.len(), 3);
        assert_eq!(PROJECT_DATE_OPTIONS.len(), 6);
    }

    #[test]
    fn test_skill_vocabulary_has_no_duplicates() {
        let unique: HashSet<&str> = SKILLS.iter().copied().collect();
        assert_eq!(unique.len(), SKILLS.len());
    }

    #[test]
    fn test_find_option_case_insensitive() {
        assert_eq!(find_option(LOCATIONS, "nz").map(|o| o.label), Some("New Zealand"));
        assert_eq!(find_option(EXPERIENCE_LEVELS, "Senior").map(|o| o.value), Some("senior"));
        assert!(find_option(LOCATIONS, "Atlantis").is_none());
    }
}
