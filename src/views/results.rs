// src/views/results.rs

use maud::{Markup, html};

use crate::{
    models::{quiz::Quiz, result::QuizResult},
    names,
    views::layout::page,
};

pub fn results(quiz: &Quiz, results: &[QuizResult]) -> Markup {
    page(
        &format!("Results for {}", quiz.title),
        html! {
            h1 { "Results: " (quiz.title) }
            @if results.is_empty() {
                p { "Nobody has taken this quiz yet." }
            } @else {
                table {
                    thead { tr {
                        th { "#" }
                        th { "Name" }
                        th { "Score" }
                        th { "Taken" }
                    } }
                    tbody {
                        @for (rank, r) in results.iter().enumerate() {
                            tr {
                                td { (rank + 1) }
                                td { (r.user_name) }
                                td { (r.score) " / " (r.total_questions) }
                                td { (r.created_at.format("%Y-%m-%d %H:%M").to_string()) }
                            }
                        }
                    }
                }
            }
            p {
                a href=(names::take_quiz_url(quiz.id)) { "Take this quiz" }
                " | "
                a href=(names::HOME_URL) { "Back to quizzes" }
            }
        },
    )
}
