// src/views/authoring.rs

use maud::{Markup, html};

use crate::{
    models::{
        question::CreateQuestionRequest,
        quiz::{Quiz, QuizSummary},
    },
    names,
    views::layout::{error_banner, page},
};

/// Answer rows rendered on a fresh add-question form.
const DEFAULT_ANSWER_ROWS: usize = 4;

pub fn index(quizzes: &[QuizSummary]) -> Markup {
    page(
        "Quizzes",
        html! {
            h1 { "Quizzes" }
            @if quizzes.is_empty() {
                p { "No quizzes yet. " a href=(names::CREATE_QUIZ_URL) { "Create the first one." } }
            } @else {
                ul.quizzes {
                    @for quiz in quizzes {
                        li {
                            h3 { (quiz.title) }
                            @if let Some(description) = &quiz.description {
                                p { (description) }
                            }
                            small { (quiz.question_count) " questions" }
                            " "
                            a href=(names::take_quiz_url(quiz.id)) { "Take quiz" }
                            " | "
                            a href=(names::add_question_url(quiz.id)) { "Add question" }
                            " | "
                            a href=(names::results_url(quiz.id)) { "Results" }
                        }
                    }
                }
            }
        },
    )
}

/// Values echoed back into the create form after a rejected submit.
#[derive(Debug, Default)]
pub struct QuizFormValues {
    pub title: String,
    pub description: String,
}

pub fn create_quiz(values: &QuizFormValues, error: Option<&str>) -> Markup {
    page(
        "Create Quiz",
        html! {
            h1 { "Create Quiz" }
            (error_banner(error))
            form method="post" action=(names::CREATE_QUIZ_URL) {
                label for="title" { "Title" }
                input id="title" type="text" name="title" value=(values.title) required;
                label for="description" { "Description" }
                textarea id="description" name="description" { (values.description) }
                button type="submit" { "Create" }
            }
        },
    )
}

/// Values echoed back into the add-question form after a rejected submit.
#[derive(Debug, Default)]
pub struct QuestionFormValues {
    pub text: String,
    pub answers: Vec<String>,
    pub correct: Option<usize>,
}

impl QuestionFormValues {
    /// Empty form with the first answer preselected.
    pub fn fresh() -> Self {
        Self {
            correct: Some(0),
            ..Self::default()
        }
    }
}

impl From<&CreateQuestionRequest> for QuestionFormValues {
    fn from(req: &CreateQuestionRequest) -> Self {
        Self {
            text: req.text.clone(),
            answers: req.answers.clone(),
            correct: req.correct_index,
        }
    }
}

pub fn add_question(
    quiz: &Quiz,
    question_count: usize,
    values: &QuestionFormValues,
    error: Option<&str>,
) -> Markup {
    let rows = values.answers.len().max(DEFAULT_ANSWER_ROWS);

    page(
        "Add Question",
        html! {
            h1 { "Add Question" }
            p { "Quiz: " strong { (quiz.title) } " (" (question_count) " questions so far)" }
            (error_banner(error))
            form method="post" action=(names::add_question_url(quiz.id)) {
                label for="text" { "Question" }
                input id="text" type="text" name="text" value=(values.text) required;
                fieldset {
                    legend { "Answers (select the correct one)" }
                    div id="answers" {
                        @for i in 0..rows {
                            div.answer {
                                input type="radio" name="correct" value=(i) checked[values.correct == Some(i)];
                                input type="text" name="answers"
                                    value=(values.answers.get(i).map(String::as_str).unwrap_or(""))
                                    placeholder=(format!("Answer {}", i + 1));
                            }
                        }
                    }
                }
                button type="submit" name="add_another" value="1" { "Save and add another" }
                " "
                button type="submit" name="done" value="1" { "Save and finish" }
            }
            p { a href=(names::HOME_URL) { "Back to quizzes" } }
        },
    )
}
