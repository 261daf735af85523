use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_QUESTIONS: &str = include_str!("../../assets/questions.json");

/// Difficulty tags recognized by the filter bar. "all" is a filter
/// pseudo-tag and never appears on a record.
pub const DIFFICULTIES: &[&str] = &["all", "easy", "medium", "hard"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl QuestionRecord {
    pub fn difficulty_label(&self) -> &str {
        self.difficulty.as_deref().unwrap_or("unknown")
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read questions file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the question list. With a path, reads that file; otherwise parses
/// the bundled question set. Single attempt, no retry.
pub fn load_questions(path: Option<&Path>) -> Result<Vec<QuestionRecord>, LoadError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(serde_json::from_str(BUNDLED_QUESTIONS)?),
    }
}
