//! Layout configuration: brick table, joint sizing and generation options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::brick::BrickCatalogue;
use crate::core::{Error, Result};

/// Configuration for brick layout generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Brick extents per variant.
    pub catalogue: BrickCatalogue,
    /// Joint thickness assumed while sizing rows and courses. The joints
    /// actually emitted are derived from the residual space.
    pub nominal_mortar: f64,
    /// Depth of head joints within a row, as a fraction of the half brick's depth.
    pub row_mortar_depth_ratio: f64,
    /// Depth of bed joints between courses, as a fraction of the whole brick's depth.
    pub course_mortar_depth_ratio: f64,
    /// Lay out courses on the rayon pool (deterministic bonds only).
    pub parallel_rows: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            catalogue: BrickCatalogue::default(),
            nominal_mortar: 1.0,
            row_mortar_depth_ratio: 0.8,
            course_mortar_depth_ratio: 0.9,
            parallel_rows: false,
        }
    }
}

impl LayoutConfig {
    /// Create a new layout config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel course generation.
    pub fn with_parallel_rows(mut self, parallel: bool) -> Self {
        self.parallel_rows = parallel;
        self
    }

    /// Check the catalogue and that every sizing value is finite and positive.
    pub fn validate(&self) -> Result<()> {
        self.catalogue.validate()?;
        Error::check_dimension("nominal mortar", self.nominal_mortar)?;
        Error::check_dimension("row mortar depth ratio", self.row_mortar_depth_ratio)?;
        Error::check_dimension("course mortar depth ratio", self.course_mortar_depth_ratio)?;
        Ok(())
    }

    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file (sync) and validate.
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::debug!("Loaded layout config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let cfg = LayoutConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.nominal_mortar, 1.0);
        assert!(!cfg.parallel_rows);
    }

    #[test]
    fn test_validate_rejects_zero_mortar() {
        let cfg = LayoutConfig { nominal_mortar: 0.0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(Error::InvalidDimension { .. })));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: LayoutConfig = serde_json::from_str(r#"{ "parallel_rows": true }"#).unwrap();
        assert!(cfg.parallel_rows);
        assert_eq!(cfg.catalogue, BrickCatalogue::default());
    }

    #[test]
    fn test_config_persistence() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("layouts").join("wall.json");

        let cfg = LayoutConfig { nominal_mortar: 1.2, ..Default::default() }.with_parallel_rows(true);
        cfg.save_sync(&path).expect("save failed");

        let loaded = LayoutConfig::load_sync(&path).expect("load failed");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_load_rejects_invalid_catalogue() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("bad.json");

        let mut cfg = LayoutConfig::default();
        cfg.catalogue.whole.x = 1.0;
        cfg.save_sync(&path).expect("save failed");

        assert!(matches!(LayoutConfig::load_sync(&path), Err(Error::InvalidCatalogue(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let result = LayoutConfig::load_sync(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
