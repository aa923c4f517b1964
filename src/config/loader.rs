//! Lesson loader
//!
//! Sources, in registry order:
//! 1. Bundled lessons (embedded TOML files)
//! 2. User lesson pack (./.lessons.toml, $LESSON_REGISTRY_CONFIG or
//!    ~/.config/lesson-registry/lessons.toml, first one found)
//!
//! User lessons are appended after the bundled ones. Reusing a bundled key is
//! rejected rather than treated as an override.

use crate::config::bundled::bundled_definitions;
use crate::config::registry::LessonRegistry;
use crate::config::user_config::LessonPack;
use crate::types::{LessonError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV_VAR: &str = "LESSON_REGISTRY_CONFIG";

pub struct LessonLoader {
    registry: LessonRegistry,
    sources: Vec<PathBuf>,
}

impl LessonLoader {
    /// Load bundled lessons plus the first user pack found on disk.
    pub fn new() -> Result<Self> {
        let paths: Vec<PathBuf> = Self::find_user_pack(&Self::candidate_paths())
            .into_iter()
            .collect();
        Self::from_paths(&paths)
    }

    /// Load bundled lessons only.
    pub fn bundled_only() -> Result<Self> {
        Self::from_paths::<PathBuf>(&[])
    }

    /// Load bundled lessons followed by the given packs, in order.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut definitions = bundled_definitions()?;
        info!("Loaded {} bundled lesson definitions", definitions.len());

        let mut sources = Vec::new();

        for path in paths {
            let pack = Self::load_pack(path.as_ref())?;
            info!(
                "Loaded {} lessons from {}",
                pack.lessons.len(),
                path.as_ref().display()
            );

            sources.push(path.as_ref().to_path_buf());
            definitions.extend(pack.lessons);
        }

        let registry = LessonRegistry::new(definitions)?;
        info!("Lesson registry ready with {} lessons", registry.len());

        Ok(Self { registry, sources })
    }

    fn load_pack(path: &Path) -> Result<LessonPack> {
        debug!("Loading lesson pack from: {}", path.display());

        let content = std::fs::read_to_string(path)?;

        LessonPack::from_toml(&content).map_err(|e| {
            LessonError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Pack locations in priority order
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        // Project-specific pack
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(".lessons.toml"));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            candidates.push(PathBuf::from(config_path));
        }

        // User-global pack
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("lesson-registry").join("lessons.toml"));
        }

        candidates
    }

    fn find_user_pack(candidates: &[PathBuf]) -> Option<PathBuf> {
        let found = candidates.iter().find(|p| p.is_file()).cloned();
        match &found {
            Some(path) => debug!("Using user lesson pack: {}", path.display()),
            None => debug!("No user lesson pack found"),
        }
        found
    }

    pub fn registry(&self) -> &LessonRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> LessonRegistry {
        self.registry
    }

    /// Lesson pack files that were loaded, in order
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }
}
