pub mod community_card;
pub mod detail_panel;
pub mod error;
pub mod filters;
pub mod format;
pub mod home_card;

pub use community_card::community_card;
pub use detail_panel::detail_panel;
pub use error::html_error_response;
pub use filters::{criteria_form, group_select};
pub use home_card::home_card;
