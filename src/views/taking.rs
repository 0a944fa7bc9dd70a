// src/views/taking.rs

use maud::{Markup, html};

use crate::{
    models::quiz::QuizDetail,
    names,
    views::layout::{error_banner, page},
};

pub fn take_quiz(detail: &QuizDetail, error: Option<&str>) -> Markup {
    let quiz = &detail.quiz;

    page(
        &quiz.title,
        html! {
            h1 { (quiz.title) }
            @if let Some(description) = &quiz.description {
                p { (description) }
            }
            (error_banner(error))
            form method="post" action=(names::take_quiz_url(quiz.id)) {
                label for="user_name" { "Your name" }
                input id="user_name" type="text" name="user_name" required;
                @for (n, q) in detail.questions.iter().enumerate() {
                    fieldset {
                        legend { (n + 1) ". " (q.question.text) }
                        @for answer in &q.answers {
                            label {
                                input type="radio" name=(names::answer_field(q.question.id)) value=(answer.id);
                                " " (answer.text)
                            }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
        },
    )
}
