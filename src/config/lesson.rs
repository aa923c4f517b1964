//! Lesson configuration types

use crate::types::{LessonError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a question or an answer choice is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    /// A single letter, shown as text
    Letter,
    /// A pictograph image
    Pictograph,
    /// A plain text button
    Button,
}

impl RenderFormat {
    pub const ALL: [RenderFormat; 3] = [
        RenderFormat::Letter,
        RenderFormat::Pictograph,
        RenderFormat::Button,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Letter => "letter",
            RenderFormat::Pictograph => "pictograph",
            RenderFormat::Button => "button",
        }
    }

    fn expected_tags() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Answer choice settings for a lesson.
///
/// `randomize_options` is a contract for the quiz engine: when set, the
/// order of the `num_options` choices is shuffled on every presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOptions {
    pub num_options: u32,
    pub randomize_options: bool,
}

/// A lesson entry as written in a lesson table, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDefinition {
    pub key: String,
    pub title: String,
    pub description: String,
    pub question_format: String,
    pub answer_format: String,
    pub quiz_description: String,
    pub question_prompt: String,
    pub options: QuizOptions,
}

/// A validated lesson configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonConfig {
    pub key: String,
    pub title: String,
    pub description: String,
    pub question_format: RenderFormat,
    pub answer_format: RenderFormat,
    /// Kept separate from `key`; the built-in lessons happen to use the same value.
    pub quiz_description: String,
    pub question_prompt: String,
    pub options: QuizOptions,
}

impl TryFrom<LessonDefinition> for LessonConfig {
    type Error = LessonError;

    fn try_from(def: LessonDefinition) -> Result<Self> {
        if def.options.num_options == 0 {
            return Err(LessonError::InvalidOptionCount {
                key: def.key,
                value: def.options.num_options,
            });
        }

        let question_format = parse_format(&def.key, "question_format", &def.question_format)?;
        let answer_format = parse_format(&def.key, "answer_format", &def.answer_format)?;

        Ok(Self {
            key: def.key,
            title: def.title,
            description: def.description,
            question_format,
            answer_format,
            quiz_description: def.quiz_description,
            question_prompt: def.question_prompt,
            options: def.options,
        })
    }
}

fn parse_format(key: &str, field: &'static str, tag: &str) -> Result<RenderFormat> {
    tag.parse().map_err(|tag| LessonError::UnknownFormat {
        key: key.to_string(),
        field,
        tag,
        expected: RenderFormat::expected_tags(),
    })
}

#[cfg(test)]
pub(crate) fn definition(key: &str) -> LessonDefinition {
    LessonDefinition {
        key: key.to_string(),
        title: format!("Title for {}", key),
        description: format!("Description for {}", key),
        question_format: "pictograph".to_string(),
        answer_format: "button".to_string(),
        quiz_description: key.to_string(),
        question_prompt: "Pick one:".to_string(),
        options: QuizOptions {
            num_options: 4,
            randomize_options: true,
        },
    }
}
