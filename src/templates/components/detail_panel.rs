use crate::domain::{DetailView, FilterCriteria};
use crate::templates::components::{criteria_form, home_card};
use maud::{html, Markup};

pub fn detail_panel(
    detail: &DetailView<'_>,
    criteria: &FilterCriteria,
    price_max: f64,
    area_max: f64,
) -> Markup {
    html! {
        @match detail {
            DetailView::Closed => {}
            DetailView::Unavailable(err) => {
                section class="modal" id="detail" {
                    (close_button())
                    h2 { "Community unavailable" }
                    p { (err) }
                }
            }
            DetailView::Open { community, homes } => {
                section class="modal" id="detail" {
                    (close_button())
                    h2 { (community.community.name) }
                    (criteria_form(criteria, price_max, area_max))
                    @if homes.is_empty() {
                        p { "No homes available" }
                    } @else {
                        @for home in homes {
                            (home_card(home))
                        }
                    }
                }
            }
        }
    }
}

fn close_button() -> Markup {
    html! {
        form class="close" action="/close" method="post" {
            button type="submit" aria-label="close" { "×" }
        }
    }
}
