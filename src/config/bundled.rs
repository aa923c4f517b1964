//! Lesson tables bundled into the binary
//!
//! Every `.toml` file under `lessons/` is embedded at compile time. Files are
//! read in file-name order and entries keep the order they are written in.

use crate::config::lesson::LessonDefinition;
use crate::config::user_config::LessonPack;
use crate::types::{LessonError, Result};
use include_dir::{include_dir, Dir};
use tracing::debug;

// Embed the lessons directory at compile time
static LESSONS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/lessons");

pub fn bundled_definitions() -> Result<Vec<LessonDefinition>> {
    let mut files: Vec<_> = LESSONS_DIR
        .files()
        .filter(|f| f.path().extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort_by(|a, b| a.path().cmp(b.path()));

    let mut definitions = Vec::new();

    for file in files {
        let file_name = file.path().display().to_string();
        let content = file.contents_utf8().ok_or_else(|| {
            LessonError::ConfigError(format!("Invalid UTF-8 in {}", file_name))
        })?;

        let pack = LessonPack::from_toml(content).map_err(|e| {
            LessonError::ConfigError(format!("Failed to parse bundled {}: {}", file_name, e))
        })?;

        debug!("Loaded {} bundled lessons from {}", pack.lessons.len(), file_name);
        definitions.extend(pack.lessons);
    }

    Ok(definitions)
}
