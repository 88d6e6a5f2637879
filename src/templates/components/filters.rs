use crate::domain::{group_options, FilterCriteria, HOME_TYPES};
use maud::{html, Markup};

pub fn group_select(groups: &[String], selected: &str) -> Markup {
    html! {
        form class="group-filter" action="/group" method="post" {
            label for="group" { "Group" }
            select name="group" id="group" onchange="this.form.submit()" {
                @for (value, label) in group_options(groups) {
                    option value=(value) selected[value == selected] { (label) }
                }
            }
            noscript { button type="submit" { "Apply" } }
        }
    }
}

/// Type, price and area inputs for the detail view.
///
/// Price and area inputs are bounded to `[0, price_max]` / `[0, area_max]`.
pub fn criteria_form(criteria: &FilterCriteria, price_max: f64, area_max: f64) -> Markup {
    html! {
        form class="criteria" action="/criteria" method="post" {
            label for="type" { "Type" }
            select name="type" id="type" {
                option value="" selected[criteria.home_type.is_empty()] { "All" }
                @for home_type in HOME_TYPES {
                    option value=(home_type) selected[criteria.home_type == home_type] { (home_type) }
                }
            }

            fieldset {
                legend { "Price Range" }
                input type="number" name="price_min" min="0" max=(price_max) value=(criteria.price.min);
                input type="number" name="price_max" min="0" max=(price_max) value=(criteria.price.max);
            }

            fieldset {
                legend { "Sqft Range" }
                input type="number" name="area_min" min="0" max=(area_max) value=(criteria.area.min);
                input type="number" name="area_max" min="0" max=(area_max) value=(criteria.area.max);
            }

            button type="submit" { "Apply" }
        }
    }
}
