// src/handlers/forms.rs

//! Turns raw urlencoded pairs into the typed requests the services take.
//! Repeated keys (`answers`) and composed keys (`answer_{id}`) are why the
//! handlers extract `Vec<(String, String)>` instead of a struct.

use std::collections::HashMap;

use crate::models::{question::CreateQuestionRequest, result::SubmitAnswersRequest};

const ANSWER_PREFIX: &str = "answer_";

/// Parsed add-question form.
#[derive(Debug, Default)]
pub struct QuestionForm {
    pub request: CreateQuestionRequest,
    /// "Save and add another" was pressed.
    pub add_another: bool,
}

pub fn question_form(fields: Vec<(String, String)>) -> QuestionForm {
    let mut form = QuestionForm::default();

    for (key, value) in fields {
        match key.as_str() {
            "text" => form.request.text = value,
            "answers" => form.request.answers.push(value),
            "correct" => form.request.correct_index = value.trim().parse().ok(),
            "add_another" => form.add_another = true,
            _ => {}
        }
    }

    form
}

pub fn submission(fields: Vec<(String, String)>) -> SubmitAnswersRequest {
    let mut user_name = String::new();
    let mut selections = HashMap::new();

    for (key, value) in fields {
        if key == "user_name" {
            user_name = value;
            continue;
        }

        let Some(question_id) = key.strip_prefix(ANSWER_PREFIX) else {
            continue;
        };

        if let (Ok(question_id), Ok(answer_id)) =
            (question_id.parse::<i64>(), value.trim().parse::<i64>())
        {
            selections.insert(question_id, answer_id);
        }
    }

    SubmitAnswersRequest {
        user_name,
        selections,
    }
}
