//! Skills/location filtering and match-score ordering.
//!
//! Filters compose with AND:
//! 1. skills: keep a developer if ANY requested skill is a case-insensitive
//!    substring of ANY of the developer's skills
//! 2. location: keep a developer if the requested location is a
//!    case-insensitive substring of the developer's location
//!
//! An absent or empty filter keeps everyone. Results are stable-sorted by
//! descending match score, missing score = 0.

use crate::models::{Developer, SearchQueryInput};

pub fn filter_and_rank<'a, I>(developers: I, query: &SearchQueryInput) -> Vec<Developer>
where
    I: IntoIterator<Item = &'a Developer>,
{
    let wanted_skills: Vec<String> = query
        .skill_filter()
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let wanted_location = query.location_filter().map(str::to_lowercase);

    let mut matched: Vec<Developer> = developers
        .into_iter()
        .filter(|dev| matches_skills(dev, &wanted_skills))
        .filter(|dev| matches_location(dev, wanted_location.as_deref()))
        .cloned()
        .collect();

    // sort_by is stable
    matched.sort_by(|a, b| b.score().cmp(&a.score()));
    matched
}

/// `wanted` must already be lowercased.
fn matches_skills(dev: &Developer, wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    let have: Vec<String> = dev.skills.iter().map(|s| s.to_lowercase()).collect();
    wanted
        .iter()
        .any(|w| have.iter().any(|h| h.contains(w.as_str())))
}

/// `wanted` must already be lowercased.
fn matches_location(dev: &Developer, wanted: Option<&str>) -> bool {
    match wanted {
        Some(loc) => dev.location.to_lowercase().contains(loc),
        None => true,
    }
}
