//! Shared types

mod errors;

pub use errors::{LessonError, Result};
