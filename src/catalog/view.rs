// src/catalog/view.rs

use crate::catalog::state::CatalogState;
use crate::domain::{DetailView, EnrichedCommunity, FilterCriteria, Home, SelectionState};
use serde::Serialize;

/// Everything the presentation layer reads from one snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView<'a> {
    pub loading: bool,
    pub errors: Vec<String>,
    pub groups: &'a [String],
    pub criteria: &'a FilterCriteria,
    pub communities: &'a [EnrichedCommunity],
    pub selection: &'a SelectionState,
    pub detail: DetailVm<'a>,
}

/// Serializable form of [`DetailView`].
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DetailVm<'a> {
    Closed,
    Unavailable { message: String },
    Open {
        #[serde(rename = "communityId")]
        community_id: &'a str,
        homes: Vec<&'a Home>,
    },
}

impl<'a> From<DetailView<'a>> for DetailVm<'a> {
    fn from(detail: DetailView<'a>) -> Self {
        match detail {
            DetailView::Closed => DetailVm::Closed,
            DetailView::Unavailable(err) => DetailVm::Unavailable {
                message: err.to_string(),
            },
            DetailView::Open { community, homes } => DetailVm::Open {
                community_id: community.id(),
                homes,
            },
        }
    }
}

impl<'a> CatalogView<'a> {
    pub fn from_state(state: &'a CatalogState) -> Self {
        Self {
            loading: state.is_loading(),
            errors: state.errors().iter().map(|e| e.to_string()).collect(),
            groups: state.groups(),
            criteria: &state.criteria,
            communities: state.enriched(),
            selection: &state.selection,
            detail: state.detail().into(),
        }
    }
}
