//! Lesson pack file parsing

use crate::config::lesson::LessonDefinition;
use crate::types::Result;
use serde::{Deserialize, Serialize};

/// A TOML file holding an ordered `[[lessons]]` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonPack {
    #[serde(default)]
    pub lessons: Vec<LessonDefinition>,
}

impl LessonPack {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LessonError;

    #[test]
    fn test_parse_pack() {
        let pack = LessonPack::from_toml(
            r#"
            [[lessons]]
            key = "extra"
            title = "Extra"
            description = "An extra lesson"
            question_format = "letter"
            answer_format = "button"
            quiz_description = "extra"
            question_prompt = "Pick:"

            [lessons.options]
            num_options = 2
            randomize_options = false
            "#,
        )
        .unwrap();

        assert_eq!(pack.lessons.len(), 1);
        assert_eq!(pack.lessons[0].options.num_options, 2);
        assert!(!pack.lessons[0].options.randomize_options);
    }

    #[test]
    fn test_empty_pack() {
        let pack = LessonPack::from_toml("").unwrap();
        assert!(pack.lessons.is_empty());
    }

    #[test]
    fn test_non_boolean_randomize_rejected() {
        let result = LessonPack::from_toml(
            r#"
            [[lessons]]
            key = "extra"
            title = "Extra"
            description = "An extra lesson"
            question_format = "letter"
            answer_format = "button"
            quiz_description = "extra"
            question_prompt = "Pick:"

            [lessons.options]
            num_options = 2
            randomize_options = "yes"
            "#,
        );

        assert!(matches!(result, Err(LessonError::Toml(_))));
    }

    #[test]
    fn test_negative_option_count_rejected() {
        let result = LessonPack::from_toml(
            r#"
            [[lessons]]
            key = "extra"
            title = "Extra"
            description = "An extra lesson"
            question_format = "letter"
            answer_format = "button"
            quiz_description = "extra"
            question_prompt = "Pick:"

            [lessons.options]
            num_options = -3
            randomize_options = true
            "#,
        );

        assert!(matches!(result, Err(LessonError::Toml(_))));
    }
}
