use crate::{CoreError, QuestionType, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    pub points: u32,
}

impl Question {
    /// Build a question, trimming input and dropping blank options.
    #[track_caller]
    pub fn new(
        text: &str,
        question_type: QuestionType,
        options: impl IntoIterator<Item = String>,
        correct_answer: &str,
        points: u32,
    ) -> CoreErrorResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::validation("text", "Question text is required"));
        }

        Ok(Self {
            text: text.to_string(),
            question_type,
            options: options
                .into_iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            correct_answer: correct_answer.trim().to_string(),
            points,
        })
    }
}
