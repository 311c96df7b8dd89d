//! Plain-text rendering of developer cards and the detail modal.

use std::fmt::Write;

use crate::models::Developer;

const CARD_SKILLS: usize = 3;

/// Compact card: initials, name, location, score, top skills, stats, summary.
pub fn render_card(dev: &Developer) -> String {
    let mut out = String::new();
    let score = dev
        .match_score
        .map(|s| format!("{s}%"))
        .unwrap_or_else(|| "--".to_string());
    let _ = writeln!(
        out,
        "[{}] {} ({})  #{}  match {score}",
        dev.initials(),
        dev.name,
        dev.location,
        dev.id
    );

    let mut skills = dev
        .skills
        .iter()
        .take(CARD_SKILLS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if dev.skills.len() > CARD_SKILLS {
        let _ = write!(skills, " +{} more", dev.skills.len() - CARD_SKILLS);
    }
    let _ = writeln!(out, "    skills: {skills}");
    let _ = writeln!(
        out,
        "    projects: {}  experience: {}  rate: {}",
        dev.projects,
        dev.experience,
        dev.hourly_rate.as_deref().unwrap_or("n/a")
    );
    let _ = writeln!(out, "    {}", dev.summary);
    out
}

/// Full profile shown when a card is selected.
pub fn render_details(dev: &Developer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} | {} (@{})", dev.initials(), dev.name, dev.username);
    let _ = writeln!(out, "{}", dev.location);
    if let Some(score) = dev.match_score {
        let _ = write!(out, "{score}% Match  ");
    }
    let _ = writeln!(out, "{}", dev.project_date.as_deref().unwrap_or("Recent"));
    let _ = writeln!(
        out,
        "Projects: {}  Experience: {}  Rating: {}",
        dev.projects, dev.experience, dev.rating
    );
    let _ = writeln!(out, "Skills: {}", dev.skills.join(", "));

    if let Some(highlights) = dev.project_highlights.as_ref().filter(|h| !h.is_empty()) {
        let _ = writeln!(out, "\nProject highlights:");
        for h in highlights {
            let _ = writeln!(out, "  * {}: {}", h.title, h.description);
            let _ = writeln!(out, "    [{}]", h.technologies.join(", "));
        }
    }

    if let Some(detail) = &dev.detailed_summary {
        let _ = writeln!(out, "\n{detail}");
    }

    let links: Vec<String> = [("GitHub", &dev.github_url), ("LinkedIn", &dev.linkedin_url)]
        .into_iter()
        .filter_map(|(name, url)| url.as_ref().map(|u| format!("{name}: {u}")))
        .collect();
    if !links.is_empty() {
        let _ = writeln!(out, "\n{}", links.join("\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::seed_developers;

    #[test]
    fn test_card_truncates_skills() {
        let dev = &seed_developers()[0];
        let card = render_card(dev);
        assert!(card.contains("[AC] Alex Chen (San Francisco, CA)"));
        assert!(card.contains("React, Node.js, Python +3 more"));
        assert!(card.contains("match 95%"));
        assert!(card.contains("$85/hr"));
    }

    #[test]
    fn test_card_without_rate_or_score() {
        let mut dev = seed_developers().remove(1);
        dev.hourly_rate = None;
        dev.match_score = None;
        let card = render_card(&dev);
        assert!(card.contains("rate: n/a"));
        assert!(card.contains("match --"));
    }

    #[test]
    fn test_details_include_highlights_and_links() {
        let dev = &seed_developers()[0];
        let text = render_details(dev);
        assert!(text.contains("95% Match  2024-01"));
        assert!(text.contains("Blockchain Trading Dashboard"));
        assert!(text.contains("[Vue.js, WebSocket, Chart.js]"));
        assert!(text.contains("LinkedIn: https://linkedin.com/in/alexchen"));
    }

    #[test]
    fn test_details_skip_empty_highlights_and_default_date() {
        let mut dev = seed_developers().remove(2);
        dev.project_date = None;
        let text = render_details(&dev);
        assert!(!text.contains("Project highlights"));
        assert!(text.contains("Recent"));
    }
}
