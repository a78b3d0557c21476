//! Draw parameters: the typed per-draw description shared by the CPU
//! rasterizer and the GPU back end, plus the raw uniform block the WGSL
//! shader reads.

use crate::error::Error;

/// How a draw places its image on the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawMode {
    /// One image centered in the window, pannable and zoomable.
    SingleView {
        /// Pan offset in window pixels; positive y moves the image up.
        pan: [f32; 2],
        /// Scale factor on top of the natural pixel size (1.0 = 1:1).
        zoom: f32,
    },
    /// A square thumbnail cell inside the grid.
    GridTile {
        /// Top-left corner of the tile in window pixels, y down.
        origin: [f32; 2],
        /// Edge length of the square tile in pixels.
        size: f32,
        /// Replaces the tile's pixel height when set; width stays `size`.
        height: Option<f32>,
        /// Draw the selection border.
        selected: bool,
    },
}

/// Parameters for one draw of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Texture dimensions in pixels.
    pub image_size: [f32; 2],
    /// Output surface dimensions in pixels.
    pub window_size: [f32; 2],
    pub mode: DrawMode,
}

impl DrawParams {
    #[must_use]
    pub fn single_view(
        image_size: [f32; 2],
        window_size: [f32; 2],
        pan: [f32; 2],
        zoom: f32,
    ) -> Self {
        Self {
            image_size,
            window_size,
            mode: DrawMode::SingleView { pan, zoom },
        }
    }

    #[must_use]
    pub fn grid_tile(
        image_size: [f32; 2],
        window_size: [f32; 2],
        origin: [f32; 2],
        size: f32,
        selected: bool,
    ) -> Self {
        Self {
            image_size,
            window_size,
            mode: DrawMode::GridTile {
                origin,
                size,
                height: None,
                selected,
            },
        }
    }

    /// Set the grid tile's height override. No-op in single view.
    #[must_use]
    pub fn with_tile_height(mut self, h: f32) -> Self {
        if let DrawMode::GridTile { height, .. } = &mut self.mode {
            *height = Some(h);
        }
        self
    }

    /// Check the caller contract the per-vertex and per-fragment functions
    /// assume: strictly positive dimensions and scales.
    ///
    /// # Errors
    /// Returns [`Error::BadParams`] naming the offending field.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.window_size[0] > 0.0 && self.window_size[1] > 0.0) {
            return Err(Error::BadParams(format!(
                "window_size must be positive, got {}x{}",
                self.window_size[0], self.window_size[1]
            )));
        }
        if !(self.image_size[0] > 0.0 && self.image_size[1] > 0.0) {
            return Err(Error::BadParams(format!(
                "image_size must be positive, got {}x{}",
                self.image_size[0], self.image_size[1]
            )));
        }
        match self.mode {
            DrawMode::SingleView { zoom, .. } => {
                if !(zoom > 0.0) {
                    return Err(Error::BadParams(format!("zoom must be positive, got {zoom}")));
                }
            }
            DrawMode::GridTile { size, height, .. } => {
                if !(size > 0.0) {
                    return Err(Error::BadParams(format!(
                        "tile size must be positive, got {size}"
                    )));
                }
                if let Some(h) = height {
                    if !(h > 0.0) {
                        return Err(Error::BadParams(format!(
                            "tile height override must be positive, got {h}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Encode into the uniform block layout the shader reads.
    #[must_use]
    pub fn to_raw(&self) -> RawParams {
        let (pan, zoom, is_grid_item, is_selected, tile_height) = match self.mode {
            DrawMode::SingleView { pan, zoom } => (pan, zoom, 0.0, 0.0, 0.0),
            DrawMode::GridTile {
                origin,
                size,
                height,
                selected,
            } => (
                origin,
                size,
                1.0,
                if selected { 1.0 } else { 0.0 },
                height.unwrap_or(0.0),
            ),
        };
        RawParams {
            image_size: self.image_size,
            window_size: self.window_size,
            pan,
            zoom,
            is_grid_item,
            is_selected,
            tile_height,
            _pad: [0.0; 2],
        }
    }
}

/// Uniform block mirrored by the WGSL `Params` struct; 12 floats, 48 bytes.
///
/// Grid draws reuse the single-view slots: `pan` holds the tile origin and
/// `zoom` the tile size. `tile_height` of 0.0 (or anything non-positive)
/// means no height override. Flags are set when greater than 0.5.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RawParams {
    pub image_size: [f32; 2],
    pub window_size: [f32; 2],
    pub pan: [f32; 2],
    pub zoom: f32,
    pub is_grid_item: f32,
    pub is_selected: f32,
    pub tile_height: f32,
    pub _pad: [f32; 2],
}

impl RawParams {
    /// Decode back into the typed form.
    #[must_use]
    pub fn to_params(&self) -> DrawParams {
        let mode = if self.is_grid_item > 0.5 {
            DrawMode::GridTile {
                origin: self.pan,
                size: self.zoom,
                height: (self.tile_height > 0.0).then_some(self.tile_height),
                selected: self.is_selected > 0.5,
            }
        } else {
            DrawMode::SingleView {
                pan: self.pan,
                zoom: self.zoom,
            }
        };
        DrawParams {
            image_size: self.image_size,
            window_size: self.window_size,
            mode,
        }
    }
}
