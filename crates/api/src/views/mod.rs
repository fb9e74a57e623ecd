//! Server-rendered HTML pages.

use maud::{html, Markup, DOCTYPE};

pub mod contacts;

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Contacts" }
                link rel="stylesheet" href="/css/master.css";
            }
            body {
                nav.navbar {
                    a.brand href="/contacts" { "Contacts" }
                }
                main.container {
                    (content)
                }
            }
        }
    }
}
