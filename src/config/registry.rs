//! Immutable lesson registry
//!
//! Built once from an ordered list of lesson definitions. Construction
//! validates every entry and either yields a complete registry or an error;
//! afterwards the registry is read-only and can be shared freely.

use crate::config::bundled::bundled_definitions;
use crate::config::lesson::{LessonConfig, LessonDefinition};
use crate::types::{LessonError, Result};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LessonRegistry {
    /// Lessons in construction order
    lessons: Vec<LessonConfig>,

    /// Key -> index into `lessons`
    index: HashMap<String, usize>,
}

impl LessonRegistry {
    /// Build a registry, validating each definition in order.
    pub fn new<I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = LessonDefinition>,
    {
        let mut lessons = Vec::new();
        let mut index = HashMap::new();

        for mut def in definitions {
            // Keys are compared without surrounding whitespace
            let key = def.key.trim();
            if key.is_empty() || index.contains_key(key) {
                return Err(LessonError::DuplicateKey(def.key));
            }
            def.key = key.to_string();

            let config = LessonConfig::try_from(def)?;
            debug!("Registered lesson: {}", config.key);

            index.insert(config.key.clone(), lessons.len());
            lessons.push(config);
        }

        Ok(Self { lessons, index })
    }

    /// Registry of the lessons bundled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::new(bundled_definitions()?)
    }

    /// Look up a lesson by key
    pub fn get(&self, key: &str) -> Result<&LessonConfig> {
        self.index
            .get(key)
            .map(|&i| &self.lessons[i])
            .ok_or_else(|| LessonError::LessonNotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All lesson keys, in construction order
    pub fn list_keys(&self) -> Vec<&str> {
        self.lessons.iter().map(|l| l.key.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LessonConfig> {
        self.lessons.iter()
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl<'a> IntoIterator for &'a LessonRegistry {
    type Item = &'a LessonConfig;
    type IntoIter = std::slice::Iter<'a, LessonConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.lessons.iter()
    }
}
