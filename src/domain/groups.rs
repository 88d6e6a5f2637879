// src/domain/groups.rs

use crate::domain::community::Community;
use std::collections::HashSet;

/// Group restriction value meaning "no restriction".
pub const ALL_GROUPS: &str = "";

pub fn matches_group(community: &Community, group: &str) -> bool {
    group == ALL_GROUPS || community.group == group
}

/// Distinct group labels in order of first occurrence.
pub fn distinct_groups(communities: &[Community]) -> Vec<String> {
    let mut seen = HashSet::new();
    communities
        .iter()
        .filter(|c| seen.insert(c.group.as_str()))
        .map(|c| c.group.clone())
        .collect()
}

/// Options for the group select as `(value, label)` pairs, "All" first.
pub fn group_options(groups: &[String]) -> Vec<(&str, &str)> {
    std::iter::once((ALL_GROUPS, "All"))
        .chain(groups.iter().map(|g| (g.as_str(), g.as_str())))
        .collect()
}
