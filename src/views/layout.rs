// src/views/layout.rs

use maud::{DOCTYPE, Markup, html};

use crate::names;

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li { a href=(names::HOME_URL) { strong { "Quiz Board" } } }
                }
                ul {
                    li { a href=(names::CREATE_QUIZ_URL) { "Create quiz" } }
                }
            }
        }
    }
}

/// Full HTML document around `body`.
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Quiz Board" }
                script src="/static/js/script.js" defer {}
            }
            body {
                (header())
                main { (body) }
            }
        }
    }
}

/// Inline error banner shown above a re-rendered form.
pub fn error_banner(error: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = error {
            p.error role="alert" { (message) }
        }
    }
}

pub fn not_found(message: &str) -> Markup {
    page(
        "Not Found",
        html! {
            h1 { "Not Found" }
            p { (message) }
            p { a href=(names::HOME_URL) { "Back to quizzes" } }
        },
    )
}
