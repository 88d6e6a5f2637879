pub mod community;
pub mod criteria;
pub mod groups;
pub mod join;
pub mod selection;

pub use community::{Community, EnrichedCommunity, Home, HOME_TYPES};
pub use criteria::FilterCriteria;
pub use groups::{distinct_groups, group_options};
pub use join::enrich_communities;
pub use selection::{DetailView, SelectionState};
