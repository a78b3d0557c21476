//! Single-view camera: wheel zoom with limits, pan accumulation, fit and
//! actual-size behavior.

use crate::config::CameraConfig;
use crate::params::DrawParams;

#[derive(Debug, Clone)]
pub struct Camera {
    zoom: f32,
    pan: [f32; 2],
    saved_zoom: f32,
    actual_size: bool,
    cfg: CameraConfig,
}

impl Camera {
    #[must_use]
    pub fn new(cfg: CameraConfig) -> Self {
        Self {
            zoom: 1.0,
            pan: [0.0, 0.0],
            saved_zoom: 1.0,
            actual_size: false,
            cfg,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> [f32; 2] {
        self.pan
    }

    /// Step the zoom by one wheel notch; only the sign of `amount` counts.
    /// Clamped to the configured range.
    pub fn zoom_by(&mut self, amount: f32) {
        if amount > 0.0 {
            self.zoom *= self.cfg.zoom_step;
        } else {
            self.zoom /= self.cfg.zoom_step;
        }
        self.zoom = self.zoom.clamp(self.cfg.min_zoom, self.cfg.max_zoom);
    }

    /// Set the zoom directly. Not clamped: the fit zoom for a very large
    /// image may sit below the wheel minimum.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Accumulate a drag delta in window pixels.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan[0] += dx;
        self.pan[1] += dy;
    }

    /// Zoom that fits the image inside the window, never upscaling past 1:1.
    /// Degenerate image dimensions fall back to 1.0.
    #[must_use]
    pub fn fit_zoom(image: [f32; 2], window: [f32; 2]) -> f32 {
        if image[0] <= 0.0 || image[1] <= 0.0 {
            return 1.0;
        }
        (window[0] / image[0]).min(window[1] / image[1]).min(1.0)
    }

    /// Reset for a newly shown image: centered, fit to the window.
    pub fn show_image(&mut self, image: [f32; 2], window: [f32; 2]) {
        self.pan = [0.0, 0.0];
        self.actual_size = false;
        self.zoom = Self::fit_zoom(image, window);
    }

    /// Flip between 1:1 pixels and the zoom in use before the flip.
    pub fn toggle_actual_size(&mut self) {
        if self.actual_size {
            self.actual_size = false;
            self.zoom = self.saved_zoom;
        } else {
            self.saved_zoom = self.zoom;
            self.actual_size = true;
            self.zoom = 1.0;
        }
    }

    #[must_use]
    pub fn is_actual_size(&self) -> bool {
        self.actual_size
    }

    /// Draw parameters for the current camera state.
    #[must_use]
    pub fn params(&self, image: [f32; 2], window: [f32; 2]) -> DrawParams {
        DrawParams::single_view(image, window, self.pan, self.zoom)
    }
}
