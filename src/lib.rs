//! Lesson Registry - validated quiz lesson configuration
//!
//! Holds the fixed set of lesson configurations that a quiz engine and its
//! UI consume: titles, prompts, question and answer rendering formats, and
//! answer option settings. The registry is built once at startup and is
//! read-only afterwards.

pub mod config;
pub mod types;

pub use config::{
    LessonConfig, LessonDefinition, LessonLoader, LessonRegistry, QuizOptions, RenderFormat,
};
pub use types::{LessonError, Result};
