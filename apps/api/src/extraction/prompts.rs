// Prompt constants for recruiter-prompt filter extraction.

/// Filter extraction prompt. Replace `{prompt}` and `{tools}` before sending.
pub const FILTER_EXTRACTION_PROMPT_TEMPLATE: &str = r#"A recruiter is searching for developers. Turn their request into search metadata.

Return a JSON object with this EXACT schema (no extra fields):
{
  "category": ["fintech", "data visualization"],
  "technical": ["react", "python", "postgresql"],
  "location": "vancouver"
}

Rules:
- category: up to 3 industries or problem domains the project belongs to.
- technical: up to 50 languages, frameworks, tools, and technical skills the work needs.
  Always include every selected tool.
- location: the city, region, or country named in the request, or null if none is named.
- Lowercase every string. No duplicates.
- Only use terms a developer would list on a hackathon project page (e.g. "react",
  "llm fine-tuning"). No soft skills, no invented tools.
- If the request is vague, infer the most typical stack for that kind of project.

Recruiter request:
{prompt}

Selected tools:
{tools}"#;

pub fn build_filter_prompt(prompt: &str, tools: &[String]) -> String {
    let tools = if tools.is_empty() {
        "(none)".to_string()
    } else {
        tools.join(", ")
    };
    FILTER_EXTRACTION_PROMPT_TEMPLATE
        .replace("{prompt}", prompt.trim())
        .replace("{tools}", &tools)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_prompt_fills_placeholders() {
        let p = build_filter_prompt(
            "  climate dashboard in Vancouver ",
            &["Next.js".to_string(), "Tailwind".to_string()],
        );
        assert!(p.contains("climate dashboard in Vancouver\n"));
        assert!(p.contains("Next.js, Tailwind"));
        assert!(!p.contains("{prompt}"));
        assert!(!p.contains("{tools}"));
    }

    #[test]
    fn test_build_filter_prompt_without_tools() {
        assert!(build_filter_prompt("x", &[]).ends_with("(none)"));
    }
}
