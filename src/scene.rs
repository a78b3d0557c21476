//! Frame assembly: which draws happen this frame, in what order, over
//! which clear color.

use tracing::debug;

use crate::config::ViewerConfig;
use crate::grid::GridView;
use crate::params::DrawParams;
use crate::viewport::Camera;

/// Which of the two screens is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Single,
    Grid,
}

/// Clear color behind the single view.
pub const SINGLE_CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Clear color behind the grid.
pub const GRID_CLEAR: [f32; 4] = [0.01, 0.01, 0.012, 1.0];

/// One frame's draws, back to front, with the clear color under them.
#[derive(Debug, Clone)]
pub struct FramePlan {
    pub clear_color: [f32; 4],
    /// Pairs of (image index, draw parameters).
    pub draws: Vec<(usize, DrawParams)>,
}

/// Viewer state above the kernel: the current mode plus the camera and
/// grid it switches between. The selected grid item doubles as the image
/// shown in single view.
#[derive(Debug, Clone)]
pub struct Scene {
    pub mode: ViewMode,
    pub camera: Camera,
    pub grid: GridView,
}

impl Scene {
    #[must_use]
    pub fn new(cfg: &ViewerConfig) -> Self {
        Self {
            mode: ViewMode::Grid,
            camera: Camera::new(cfg.camera.clone()),
            grid: GridView::new(&cfg.grid),
        }
    }

    /// Open item `index` in single view, fit to the window. Returns false
    /// when the index does not exist.
    pub fn open_image(
        &mut self,
        index: usize,
        image_size: [f32; 2],
        count: usize,
        window: [f32; 2],
    ) -> bool {
        if !self.grid.select(index, count) {
            return false;
        }
        self.camera.show_image(image_size, window);
        self.mode = ViewMode::Single;
        debug!(index, zoom = self.camera.zoom(), "opened image in single view");
        true
    }

    /// Back to the grid; the selection stays where it was.
    pub fn back_to_grid(&mut self) {
        self.mode = ViewMode::Grid;
    }

    /// Assemble the frame. `images[i]` is the pixel size of item `i`.
    ///
    /// Single view draws the selected image alone; grid view draws every
    /// tile whose pixels touch the window, skipping rows scrolled out of
    /// sight.
    #[must_use]
    pub fn plan_frame(&self, window: [f32; 2], images: &[[f32; 2]]) -> FramePlan {
        match self.mode {
            ViewMode::Single => {
                let index = self.grid.selected();
                let draws = images
                    .get(index)
                    .map(|&size| (index, self.camera.params(size, window)))
                    .into_iter()
                    .collect();
                FramePlan {
                    clear_color: SINGLE_CLEAR,
                    draws,
                }
            }
            ViewMode::Grid => {
                let drawn_h = self.grid.layout.drawn_height();
                let range =
                    self.grid
                        .layout
                        .visible_range(images.len(), window, self.grid.scroll());
                let mut draws = Vec::with_capacity(range.len());
                for index in range {
                    let y = self.grid.layout.origin(index, window[0], self.grid.scroll())[1];
                    if y + drawn_h < 0.0 || y > window[1] {
                        continue;
                    }
                    draws.push((index, self.grid.tile_params(index, images[index], window)));
                }
                FramePlan {
                    clear_color: GRID_CLEAR,
                    draws,
                }
            }
        }
    }
}
