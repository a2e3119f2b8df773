// src/timeline/stats.rs
// =============================================================================
// Summary numbers shown next to the timeline: totals, repositories per year,
// and the most used languages.
// =============================================================================

use serde::Serialize;
use std::collections::HashMap;

use super::group::{group_by_year, sorted_year_keys};
use crate::github::Repository;

/// How many languages make it into the summary
pub const TOP_LANGUAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub forks: usize,
    pub archived: usize,
    /// Newest year first
    pub per_year: Vec<YearCount>,
    /// Most used first, at most TOP_LANGUAGES entries
    pub top_languages: Vec<LanguageCount>,
}

pub fn summarize(repos: &[Repository]) -> Summary {
    let by_year = group_by_year(repos);
    let per_year = sorted_year_keys(&by_year)
        .into_iter()
        .map(|year| {
            let count = by_year.get(&year).map_or(0, Vec::len);
            YearCount { year, count }
        })
        .collect();

    Summary {
        total: repos.len(),
        forks: repos.iter().filter(|r| r.fork).count(),
        archived: repos.iter().filter(|r| r.archived).count(),
        per_year,
        top_languages: top_languages(repos, TOP_LANGUAGES),
    }
}

/// Counts primary languages, most used first. Ties keep the order in which the
/// languages first appeared; repositories without a language are skipped.
pub fn top_languages(repos: &[Repository], limit: usize) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        match index.get(language) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(language, counts.len());
                counts.push(LanguageCount {
                    language: language.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order for equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
