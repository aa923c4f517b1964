//! Lesson configuration
//!
//! Lesson definitions come from the tables bundled into the binary and,
//! optionally, a user lesson pack. Both feed one validated, immutable
//! [`LessonRegistry`].

mod bundled;
mod lesson;
mod loader;
mod registry;
mod user_config;

pub use bundled::bundled_definitions;
pub use lesson::{LessonConfig, LessonDefinition, QuizOptions, RenderFormat};
pub use loader::{LessonLoader, CONFIG_ENV_VAR};
pub use registry::LessonRegistry;
pub use user_config::LessonPack;
