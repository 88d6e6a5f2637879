// fetcher/tasks.rs
use crate::catalog::{CatalogEvent, CatalogStore};
use crate::fetcher::CatalogSource;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

/// Starts one background fetch per collection.
///
/// Both threads capture the store generation before fetching and apply their
/// result through [`CatalogStore::complete`], so a result arriving after
/// teardown is dropped. Each handle yields whether its result was applied.
pub fn spawn_fetches(
    store: &Arc<CatalogStore>,
    source: Arc<dyn CatalogSource>,
) -> [JoinHandle<bool>; 2] {
    let generation = store.generation();

    let communities = {
        let store = Arc::clone(store);
        let source = Arc::clone(&source);
        thread::spawn(move || {
            info!("community fetch started");
            let result = source.fetch_communities();
            finish(&store, generation, "communities", CatalogEvent::CommunitiesLoaded(result))
        })
    };

    let homes = {
        let store = Arc::clone(store);
        thread::spawn(move || {
            info!("home fetch started");
            let result = source.fetch_homes();
            finish(&store, generation, "homes", CatalogEvent::HomesLoaded(result))
        })
    };

    [communities, homes]
}

fn finish(store: &CatalogStore, generation: u64, collection: &str, event: CatalogEvent) -> bool {
    let applied = store.complete(generation, event);
    if !applied {
        warn!(collection, "fetch finished after teardown, result discarded");
    }
    applied
}
