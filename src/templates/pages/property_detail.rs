use crate::domain::property::PropertyRecord;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_detail_page(record: &PropertyRecord) -> Markup {
    desktop_layout(
        &format!("Property #{}", record.id),
        html! {
            main class="container" {
                h1 { "Property #" (record.id) }

                section class="card" {
                    dl {
                        dt { "Address" }
                        dd { (text(&record.address)) }
                        dt { "City" }
                        dd { (text(&record.city)) }
                        dt { "Price" }
                        dd { (record.price.map(|p| format!("${p:.0}")).unwrap_or_default()) }
                        dt { "Bedrooms" }
                        dd { (num(record.bedrooms)) }
                        dt { "Bathrooms" }
                        dd { (record.bathrooms.map(|v| v.to_string()).unwrap_or_default()) }
                        dt { "Square feet" }
                        dd { (num(record.sqft)) }
                        dt { "Year built" }
                        dd { (num(record.year_built)) }
                        dt { "Type" }
                        dd { (text(&record.property_type)) }
                    }
                }

                section class="card" {
                    h3 { "Interested? Talk to an agent" }
                    form method="post" action=(format!("/lead/{}", record.id)) {
                        label for="name" { "Name" }
                        input type="text" id="name" name="name" required;
                        label for="email" { "Email" }
                        input type="email" id="email" name="email" required;
                        button type="submit" { "Request a call" }
                    }
                }

                p { a href="/dashboard" { "Back to listings" } }
            }
        },
    )
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn num(field: Option<i64>) -> String {
    field.map(|v| v.to_string()).unwrap_or_default()
}
