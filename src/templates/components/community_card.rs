use crate::domain::EnrichedCommunity;
use crate::templates::components::format::image_src;
use maud::{html, Markup};

pub fn community_card(enriched: &EnrichedCommunity, fallback_image: &str) -> Markup {
    let community = &enriched.community;
    // A broken image URL is swapped client-side for the same fallback.
    let onerror = format!("this.onerror=null;this.src='{fallback_image}';");

    html! {
        div class="card community-card" id=(format!("community-{}", community.id)) {
            img
                src=(image_src(community, fallback_image))
                alt=(community.name)
                height="140"
                onerror=(onerror);
            div class="card-body" {
                h2 { (community.name) }
                p {
                    "Group: " (community.group)
                    br;
                    "Average Price: " (enriched.average_price)
                }
            }
            div class="card-actions" {
                @if enriched.has_homes() {
                    form action="/select" method="post" {
                        input type="hidden" name="id" value=(community.id);
                        button class="btn" type="submit" { "Show Homes" }
                    }
                } @else {
                    button class="btn" disabled { "No Homes Available at the Moment" }
                }
            }
        }
    }
}
