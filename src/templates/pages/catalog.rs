// templates/pages/catalog.rs

use crate::catalog::CatalogState;
use crate::templates::components::{community_card, detail_panel, group_select};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CatalogPageVm<'a> {
    pub state: &'a CatalogState,
    pub fallback_image: &'a str,
    pub price_max: f64,
    pub area_max: f64,
}

pub fn catalog_page(vm: &CatalogPageVm<'_>) -> Markup {
    let state = vm.state;
    let errors = state.errors();
    let main_class = if state.selection.is_open() {
        "container modal-open"
    } else {
        "container"
    };

    desktop_layout(
        "Communities",
        html! {
            main class=(main_class) {
                div class="toolbar" {
                    (group_select(state.groups(), &state.criteria.group))
                }

                @for err in &errors {
                    div class="error" role="alert" { "Error: " (err) }
                }

                @if state.is_loading() {
                    div class="loading" { "Loading..." }
                }

                div class="grid" {
                    @for enriched in state.enriched() {
                        (community_card(enriched, vm.fallback_image))
                    }
                }

                (detail_panel(&state.detail(), &state.criteria, vm.price_max, vm.area_max))
            }
        },
    )
}
