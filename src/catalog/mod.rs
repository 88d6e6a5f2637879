mod state;
mod store;
mod view;

pub use state::{CatalogEvent, CatalogState};
pub use store::CatalogStore;
pub use view::CatalogView;
