// src/catalog/state.rs

use crate::domain::{
    distinct_groups, enrich_communities, Community, DetailView, EnrichedCommunity,
    FilterCriteria, Home, SelectionState,
};
use crate::errors::CatalogError;
use crate::fetcher::FetchError;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle of one source collection within a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceState<T> {
    /// Fetch has not completed yet.
    Pending,
    Ready(Arc<Vec<T>>),
    /// Fetch failed. The collection stays empty for the rest of the session.
    Failed(CatalogError),
}

impl<T> SourceState<T> {
    /// Loaded items, empty while pending or after a failure.
    pub fn items(&self) -> &[T] {
        match self {
            SourceState::Ready(items) => items.as_slice(),
            SourceState::Pending | SourceState::Failed(_) => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SourceState::Pending)
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            SourceState::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn settle(
        &self,
        result: Result<Vec<T>, FetchError>,
        on_error: impl FnOnce(String) -> CatalogError,
    ) -> SourceState<T> {
        match self {
            SourceState::Pending => match result {
                Ok(items) => SourceState::Ready(Arc::new(items)),
                Err(e) => SourceState::Failed(on_error(e.to_string())),
            },
            // A failed collection is terminal for the session.
            SourceState::Failed(err) => SourceState::Failed(err.clone()),
            SourceState::Ready(items) => match result {
                Ok(fresh) => SourceState::Ready(Arc::new(fresh)),
                Err(_) => SourceState::Ready(Arc::clone(items)),
            },
        }
    }
}

/// Discrete inputs to the catalog.
#[derive(Debug)]
pub enum CatalogEvent {
    CommunitiesLoaded(Result<Vec<Community>, FetchError>),
    HomesLoaded(Result<Vec<Home>, FetchError>),
    SetGroup(String),
    SetHomeType(String),
    SetPriceRange(f64, f64),
    SetAreaRange(f64, f64),
    Select(String),
    Close,
}

/// One immutable snapshot of the session.
///
/// Every event produces a new snapshot via [`CatalogState::apply`]; nothing
/// is mutated in place, so a reader holding an `Arc<CatalogState>` always
/// sees a consistent view.
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub communities: SourceState<Community>,
    pub homes: SourceState<Home>,
    pub criteria: FilterCriteria,
    pub selection: SelectionState,
    enriched: Arc<Vec<EnrichedCommunity>>,
    groups: Arc<Vec<String>>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(FilterCriteria::default())
    }
}

impl CatalogState {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            communities: SourceState::Pending,
            homes: SourceState::Pending,
            criteria,
            selection: SelectionState::Closed,
            enriched: Arc::new(Vec::new()),
            groups: Arc::new(Vec::new()),
        }
    }

    pub fn enriched(&self) -> &[EnrichedCommunity] {
        &self.enriched
    }

    /// Distinct groups of the raw community collection, ignoring the current
    /// group restriction.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn is_loading(&self) -> bool {
        self.communities.is_pending() || self.homes.is_pending()
    }

    pub fn errors(&self) -> Vec<&CatalogError> {
        self.communities
            .error()
            .into_iter()
            .chain(self.homes.error())
            .collect()
    }

    pub fn detail(&self) -> DetailView<'_> {
        self.selection.resolve(&self.enriched, &self.criteria)
    }

    pub fn apply(&self, event: CatalogEvent) -> CatalogState {
        match event {
            CatalogEvent::CommunitiesLoaded(result) => {
                match &result {
                    Ok(items) => info!(count = items.len(), "communities loaded"),
                    Err(e) => warn!(error = %e, "community fetch failed"),
                }
                let communities = self
                    .communities
                    .settle(result, CatalogError::CommunityFetchFailed);
                Self {
                    communities,
                    ..self.clone()
                }
                .rebuild()
            }
            CatalogEvent::HomesLoaded(result) => {
                match &result {
                    Ok(items) => info!(count = items.len(), "homes loaded"),
                    Err(e) => warn!(error = %e, "home fetch failed"),
                }
                let homes = self.homes.settle(result, CatalogError::HomeFetchFailed);
                Self {
                    homes,
                    ..self.clone()
                }
                .rebuild()
            }
            CatalogEvent::SetGroup(group) => Self {
                criteria: self.criteria.with_group(group),
                ..self.clone()
            }
            .rebuild(),
            CatalogEvent::SetHomeType(home_type) => Self {
                criteria: self.criteria.with_home_type(home_type),
                ..self.clone()
            },
            CatalogEvent::SetPriceRange(min, max) => Self {
                criteria: self.criteria.with_price(min, max),
                ..self.clone()
            },
            CatalogEvent::SetAreaRange(min, max) => Self {
                criteria: self.criteria.with_area(min, max),
                ..self.clone()
            },
            CatalogEvent::Select(id) => Self {
                selection: self.selection.select(&id, &self.enriched),
                ..self.clone()
            },
            CatalogEvent::Close => Self {
                selection: self.selection.close(),
                ..self.clone()
            },
        }
    }

    /// Recomputes every derived field from the sources and the criteria.
    fn rebuild(self) -> CatalogState {
        let enriched = enrich_communities(
            self.communities.items(),
            self.homes.items(),
            &self.criteria.group,
        );
        let groups = distinct_groups(self.communities.items());
        debug!(
            communities = enriched.len(),
            groups = groups.len(),
            group = %self.criteria.group,
            "catalog recomputed"
        );

        Self {
            enriched: Arc::new(enriched),
            groups: Arc::new(groups),
            ..self
        }
    }
}
