use crate::domain::Home;
use crate::templates::components::format::format_thousands;
use maud::{html, Markup};

pub fn home_card(home: &Home) -> Markup {
    html! {
        div class="card home-card" {
            h3 { (home.home_type) }
            p { "Area: " (home.area) " sqft" }
            p { "Price: $" (format_thousands(home.price)) }
        }
    }
}
