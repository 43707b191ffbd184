// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and loads a GenerateConfig as pretty-printed JSON, so a
// run's settings (question count, seed, output format) can be
// kept next to the material and replayed later:
//
//   {
//     "num_questions": 10,
//     "seed": 42,
//     "format": "json"
//   }
//
// Missing fields fall back to their defaults on load.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::generate_use_case::GenerateConfig;

/// Reads and writes one config file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write `cfg` as pretty JSON, creating parent directories as needed.
    pub fn save(&self, cfg: &GenerateConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved generation config to '{}'", self.path.display());
        Ok(())
    }

    /// Read a config back from disk.
    pub fn load(&self) -> Result<GenerateConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file '{}'", self.path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::render::OutputFormat;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load() {
        let dir   = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested").join("mcq.json"));
        let cfg = GenerateConfig {
            num_questions: 12,
            seed:          Some(7),
            format:        OutputFormat::Csv,
        };

        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "seed": 3 }"#).unwrap();

        let cfg = ConfigStore::new(&path).load().unwrap();
        assert_eq!(cfg.num_questions, 5);
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = ConfigStore::new(dir.path().join("nope.json")).load().unwrap_err();
        assert!(err.to_string().contains("Cannot read config"));
    }
}
