//! Career Path Recommender: maps interest/skill tokens onto career categories.
//!
//! Interests and skills are lower-cased into one pool. A category matches when
//! any of its trigger terms is an exact element of the pool; every matching
//! category contributes its whole path list, in `CareerCategory::ALL` order.
//! With no match, the first path of each category is returned instead.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::reference::{CareerCatalog, CareerCategory};

pub fn trigger_terms(category: CareerCategory) -> &'static [&'static str] {
    match category {
        CareerCategory::Tech => &[
            "coding",
            "programming",
            "software",
            "computer",
            "technology",
            "data",
        ],
        CareerCategory::Business => &["business", "finance", "management", "marketing", "sales"],
        CareerCategory::Healthcare => &["health", "medicine", "care", "patient", "biology"],
    }
}

fn pool_tokens<S: AsRef<str>>(interests: &[S], skills: &[S]) -> HashSet<String> {
    interests
        .iter()
        .chain(skills)
        .map(|t| t.as_ref().to_lowercase())
        .collect()
}

/// Categories whose trigger terms intersect the pooled tokens, in priority order.
pub fn matched_categories<S: AsRef<str>>(interests: &[S], skills: &[S]) -> Vec<CareerCategory> {
    let pool = pool_tokens(interests, skills);
    CareerCategory::ALL
        .into_iter()
        .filter(|c| trigger_terms(*c).iter().any(|t| pool.contains(*t)))
        .collect()
}

pub fn suggest_career_paths<S: AsRef<str>>(
    catalog: &CareerCatalog,
    interests: &[S],
    skills: &[S],
) -> Vec<String> {
    let matched = matched_categories(interests, skills);
    debug!("Career categories matched: {matched:?}");

    if matched.is_empty() {
        return fallback_paths(catalog);
    }

    matched
        .into_iter()
        .flat_map(|c| catalog.paths(c).iter().cloned())
        .collect()
}

/// One representative path per category, tech → business → healthcare.
fn fallback_paths(catalog: &CareerCatalog) -> Vec<String> {
    CareerCategory::ALL
        .into_iter()
        .filter_map(|c| {
            let first = catalog.paths(c).first().cloned();
            if first.is_none() {
                warn!("Career category '{}' has no paths; skipped in fallback", c.as_str());
            }
            first
        })
        .collect()
}
