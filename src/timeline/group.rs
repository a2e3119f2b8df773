// src/timeline/group.rs
// =============================================================================
// Groups repositories by the year and by the month they were created.
//
// Everything here is a pure function: no I/O, no errors, and an empty input
// simply gives an empty output. Dates are read in UTC so the same repository
// lands in the same group no matter where the tool runs.
//
// Two groupings:
// - By year: "2023" -> repositories, in the order they were given to us
// - By month: "Mar 2023" -> repositories, newest month first, with a running
//   start index so every repository gets a unique rank on the timeline
// =============================================================================

use chrono::Datelike;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::github::Repository;

/// Year label ("2023") to the repositories created that year.
pub type YearGroups<'a> = BTreeMap<String, Vec<&'a Repository>>;

/// Groups repositories by creation year.
///
/// Within a year the input order is kept; sort the input first if you need a
/// particular order.
pub fn group_by_year(repos: &[Repository]) -> YearGroups<'_> {
    let mut groups = YearGroups::new();
    for repo in repos {
        groups
            .entry(repo.created_at.format("%Y").to_string())
            .or_default()
            .push(repo);
    }
    groups
}

/// The keys of `groups`, newest year first.
pub fn sorted_year_keys<V>(groups: &BTreeMap<String, V>) -> Vec<String> {
    let mut years: Vec<String> = groups.keys().cloned().collect();
    // Keys are always digits; anything else would sort last
    years.sort_by_key(|year| Reverse(year.parse::<i64>().unwrap_or(i64::MIN)));
    years
}

/// All repositories created in one calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGroup<'a> {
    /// e.g. "Mar 2023"
    pub label: String,
    /// Newest first
    pub repos: Vec<&'a Repository>,
    /// Rank of the first repository in this group across the whole timeline
    pub start_index: usize,
}

impl<'a> MonthGroup<'a> {
    /// Each repository paired with its global, 0-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &'a Repository)> + '_ {
        self.repos
            .iter()
            .enumerate()
            .map(move |(i, repo)| (self.start_index + i, *repo))
    }
}

/// Groups repositories by creation month, newest month first.
pub fn group_by_month(repos: &[Repository]) -> Vec<MonthGroup<'_>> {
    let mut sorted: Vec<&Repository> = repos.iter().collect();
    // sort_by is stable, so repositories created at the same instant keep
    // their input order
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut groups: Vec<MonthGroup> = Vec::new();
    let mut current: Option<(i32, u32)> = None;

    for (rank, repo) in sorted.into_iter().enumerate() {
        let month = (repo.created_at.year(), repo.created_at.month());

        match groups.last_mut() {
            Some(group) if current == Some(month) => group.repos.push(repo),
            _ => {
                current = Some(month);
                groups.push(MonthGroup {
                    label: repo.created_at.format("%b %Y").to_string(),
                    repos: vec![repo],
                    start_index: rank,
                });
            }
        }
    }

    groups
}

/// Which side of the timeline's spine a card goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Even ranks go right, odd ranks go left.
    pub fn for_rank(rank: usize) -> Side {
        if rank % 2 == 0 {
            Side::Right
        } else {
            Side::Left
        }
    }
}
