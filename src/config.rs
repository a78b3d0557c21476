//! YAML configuration for grid layout and camera limits.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct ViewerConfig {
    pub grid: GridConfig,
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct GridConfig {
    /// Edge length of the square thumbnail tile, in pixels.
    pub tile_size: f32,
    /// Gap between tiles and around the grid's outer edge.
    pub spacing: f32,
    /// Optional tile height override; tiles stay `tile-size` wide.
    pub tile_height: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct CameraConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Multiplier applied per zoom step (wheel notch).
    pub zoom_step: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_size: 250.0,
            spacing: 20.0,
            tile_height: None,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 50.0,
            zoom_step: 1.1,
        }
    }
}

impl ViewerConfig {
    /// Read and validate a YAML config file.
    ///
    /// # Errors
    /// Propagates IO and parse errors; rejects configs that fail
    /// [`ViewerConfig::validated`].
    pub fn from_yaml_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        let cfg: Self = serde_yaml::from_str(&text)?;
        cfg.validated()
    }

    /// Validate invariants serde defaults alone cannot express.
    ///
    /// # Errors
    /// Returns [`Error::BadConfig`] naming the offending key.
    pub fn validated(self) -> Result<Self, Error> {
        ensure(self.grid.tile_size > 0.0, "grid.tile-size must be positive")?;
        ensure(self.grid.spacing >= 0.0, "grid.spacing must not be negative")?;
        if let Some(h) = self.grid.tile_height {
            ensure(h > 0.0, "grid.tile-height must be positive")?;
        }
        ensure(self.camera.min_zoom > 0.0, "camera.min-zoom must be positive")?;
        ensure(
            self.camera.max_zoom >= self.camera.min_zoom,
            "camera.max-zoom must be at least camera.min-zoom",
        )?;
        ensure(
            self.camera.zoom_step > 1.0,
            "camera.zoom-step must be greater than 1.0",
        )?;
        Ok(self)
    }
}

fn ensure(cond: bool, msg: &str) -> Result<(), Error> {
    if cond {
        Ok(())
    } else {
        Err(Error::BadConfig(msg.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg: ViewerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, ViewerConfig::default());
        assert_eq!(cfg.grid.tile_size, 250.0);
        assert_eq!(cfg.grid.spacing, 20.0);
        assert_eq!(cfg.grid.tile_height, None);
        assert_eq!(cfg.camera.zoom_step, 1.1);
    }

    #[test]
    fn kebab_case_keys_override_single_fields() {
        let cfg: ViewerConfig = serde_yaml::from_str(
            "grid:\n  tile-size: 300\n  tile-height: 180\ncamera:\n  max-zoom: 10\n",
        )
        .unwrap();
        assert_eq!(cfg.grid.tile_size, 300.0);
        assert_eq!(cfg.grid.tile_height, Some(180.0));
        assert_eq!(cfg.grid.spacing, 20.0);
        assert_eq!(cfg.camera.max_zoom, 10.0);
        assert_eq!(cfg.camera.min_zoom, 0.1);
        assert!(cfg.validated().is_ok());
    }

    #[test]
    fn validation_rejects_bad_ranges() {
        let cfg: ViewerConfig = serde_yaml::from_str("grid:\n  tile-size: 0\n").unwrap();
        assert!(cfg.validated().is_err());

        let cfg: ViewerConfig =
            serde_yaml::from_str("camera:\n  min-zoom: 5\n  max-zoom: 2\n").unwrap();
        assert!(cfg.validated().is_err());

        let cfg: ViewerConfig = serde_yaml::from_str("camera:\n  zoom-step: 1.0\n").unwrap();
        assert!(cfg.validated().is_err());

        let cfg: ViewerConfig = serde_yaml::from_str("grid:\n  tile-height: -10\n").unwrap();
        assert!(cfg.validated().is_err());
    }
}
