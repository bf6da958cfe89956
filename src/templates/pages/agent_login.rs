use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn agent_login_page(failed: bool) -> Markup {
    desktop_layout(
        "Agent sign in",
        html! {
            main class="container narrow" {
                h1 { "Agent sign in" }

                @if failed {
                    p class="notice error" { "Incorrect password." }
                }

                section class="card" {
                    form method="post" action="/agent-login" {
                        label for="password" { "Password" }
                        input type="password" id="password" name="password" required;
                        button type="submit" { "Sign in" }
                    }
                }
            }
        },
    )
}
