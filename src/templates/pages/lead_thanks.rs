use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn lead_thanks_page(property_id: i64) -> Markup {
    desktop_layout(
        "Thank you",
        html! {
            main class="container narrow" {
                h1 { "Thank you!" }
                p { "An agent will contact you soon." }
                p { a href=(format!("/property/{property_id}")) { "Back to the property" } }
            }
        },
    )
}
