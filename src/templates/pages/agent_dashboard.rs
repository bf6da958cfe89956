use crate::db::leads::Lead;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn agent_dashboard_page(leads: &[Lead]) -> Markup {
    desktop_layout(
        "Agent dashboard",
        html! {
            main class="container" {
                h1 { "Captured Leads" }

                section class="card" {
                    @if leads.is_empty() {
                        p { "No leads yet." }
                    } @else {
                        table class="listings" {
                            thead {
                                tr {
                                    th { "Submitted" }
                                    th { "Property" }
                                    th { "Name" }
                                    th { "Email" }
                                }
                            }
                            tbody {
                                @for lead in leads {
                                    tr {
                                        td { (lead.submitted_at.format("%Y-%m-%d %H:%M")) }
                                        td {
                                            a href=(format!("/property/{}", lead.property_id)) {
                                                "#" (lead.property_id)
                                            }
                                        }
                                        td { (lead.name) }
                                        td { (lead.email) }
                                    }
                                }
                            }
                        }
                    }
                }

                form method="post" action="/agent-logout" {
                    button type="submit" { "Sign out" }
                }
            }
        },
    )
}
