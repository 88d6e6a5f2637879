// src/domain/join.rs

use crate::domain::community::{AveragePrice, Community, EnrichedCommunity, Home};
use crate::domain::groups::matches_group;
use std::collections::HashSet;
use tracing::debug;

/// Joins homes onto communities and computes each community's average price.
///
/// Communities are restricted to `group` (empty matches all) and sorted by
/// name, ascending and case-sensitive. The sort is stable, so equal names keep
/// their collection order. Each community's homes keep the relative order of
/// the home collection. Homes whose `community_id` matches no community are
/// dropped.
pub fn enrich_communities(
    communities: &[Community],
    homes: &[Home],
    group: &str,
) -> Vec<EnrichedCommunity> {
    let mut selected: Vec<&Community> = communities
        .iter()
        .filter(|c| matches_group(c, group))
        .collect();
    selected.sort_by(|a, b| a.name.cmp(&b.name));

    let orphans = count_orphans(communities, homes);
    if orphans > 0 {
        debug!(orphans, "dropping homes with no matching community");
    }

    selected
        .into_iter()
        .map(|community| {
            let community_homes: Vec<Home> = homes
                .iter()
                .filter(|h| h.community_id == community.id)
                .cloned()
                .collect();
            let average_price = average_price(&community_homes);

            EnrichedCommunity {
                community: community.clone(),
                homes: community_homes,
                average_price,
            }
        })
        .collect()
}

/// Arithmetic mean of the home prices, or `Unavailable` for no homes.
pub fn average_price(homes: &[Home]) -> AveragePrice {
    if homes.is_empty() {
        return AveragePrice::Unavailable;
    }
    let total: f64 = homes.iter().map(|h| h.price).sum();
    AveragePrice::Available(total / homes.len() as f64)
}

fn count_orphans(communities: &[Community], homes: &[Home]) -> usize {
    let ids: HashSet<&str> = communities.iter().map(|c| c.id.as_str()).collect();
    homes
        .iter()
        .filter(|h| !ids.contains(h.community_id.as_str()))
        .count()
}
