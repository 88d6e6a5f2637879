// src/domain/selection.rs

use crate::domain::community::{EnrichedCommunity, Home};
use crate::domain::criteria::{filter_homes, FilterCriteria};
use crate::errors::CatalogError;
use serde::Serialize;

/// Which community, if any, has its detail view open.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "communityId", rename_all = "camelCase")]
pub enum SelectionState {
    #[default]
    Closed,
    Open(String),
}

impl SelectionState {
    /// Opens (or re-targets) the detail view on `id`.
    ///
    /// An id that is not in `enriched` leaves the state as it was.
    pub fn select(&self, id: &str, enriched: &[EnrichedCommunity]) -> SelectionState {
        if enriched.iter().any(|c| c.id() == id) {
            SelectionState::Open(id.to_string())
        } else {
            self.clone()
        }
    }

    pub fn close(&self) -> SelectionState {
        SelectionState::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SelectionState::Open(_))
    }

    pub fn active_id(&self) -> Option<&str> {
        match self {
            SelectionState::Open(id) => Some(id.as_str()),
            SelectionState::Closed => None,
        }
    }

    /// Resolves the selection against the latest enriched set.
    ///
    /// The id is looked up again on every call, a community that vanished
    /// after recomputation yields `DetailView::Unavailable`.
    pub fn resolve<'a>(
        &self,
        enriched: &'a [EnrichedCommunity],
        criteria: &FilterCriteria,
    ) -> DetailView<'a> {
        let Some(id) = self.active_id() else {
            return DetailView::Closed;
        };

        match enriched.iter().find(|c| c.id() == id) {
            Some(community) => DetailView::Open {
                community,
                homes: filter_homes(&community.homes, criteria),
            },
            None => DetailView::Unavailable(CatalogError::SelectionUnresolved(id.to_string())),
        }
    }
}

/// What the detail view should show for the current selection.
#[derive(Debug, PartialEq)]
pub enum DetailView<'a> {
    Closed,
    Unavailable(CatalogError),
    Open {
        community: &'a EnrichedCommunity,
        /// The community's homes that pass the current criteria.
        homes: Vec<&'a Home>,
    },
}
