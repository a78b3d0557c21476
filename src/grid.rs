//! Thumbnail grid: layout math and the scroll/selection state that drives
//! per-tile draw parameters.

use std::ops::Range;

use crate::config::GridConfig;
use crate::params::DrawParams;

/// Pure layout: where tiles sit for a given window width and scroll.
/// Tiles flow left to right, top to bottom, with `spacing` gaps and the
/// same margin around the outside. Scroll is 0 at the top and negative
/// when scrolled down.
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub tile_size: f32,
    pub spacing: f32,
    pub tile_height: Option<f32>,
}

impl GridLayout {
    #[must_use]
    pub fn new(cfg: &GridConfig) -> Self {
        Self {
            tile_size: cfg.tile_size,
            spacing: cfg.spacing,
            tile_height: cfg.tile_height,
        }
    }

    /// Row/column pitch: one tile plus one gap.
    #[must_use]
    pub fn cell(&self) -> f32 {
        self.tile_size + self.spacing
    }

    /// Height a tile is drawn at (the override, or the square size).
    #[must_use]
    pub fn drawn_height(&self) -> f32 {
        self.tile_height.unwrap_or(self.tile_size)
    }

    #[must_use]
    pub fn columns(&self, window_w: f32) -> u32 {
        (window_w / self.cell()).floor().max(1.0) as u32
    }

    #[must_use]
    pub fn rows(&self, count: usize, window_w: f32) -> u32 {
        count.div_ceil(self.columns(window_w) as usize) as u32
    }

    #[must_use]
    pub fn content_height(&self, count: usize, window_w: f32) -> f32 {
        self.rows(count, window_w) as f32 * self.cell() + self.spacing
    }

    /// How far the grid can scroll down; 0 when everything fits.
    #[must_use]
    pub fn max_scroll(&self, count: usize, window: [f32; 2]) -> f32 {
        (self.content_height(count, window[0]) - window[1]).max(0.0)
    }

    /// Top-left corner of a tile in window pixels.
    #[must_use]
    pub fn origin(&self, index: usize, window_w: f32, scroll: f32) -> [f32; 2] {
        let cols = self.columns(window_w) as usize;
        let col = (index % cols) as f32;
        let row = (index / cols) as f32;
        [
            self.spacing + col * self.cell(),
            self.spacing + row * self.cell() + scroll,
        ]
    }

    /// Indices whose rows touch the window, padded by one row on each side
    /// so scrolling never pops in unloaded tiles.
    #[must_use]
    pub fn visible_range(&self, count: usize, window: [f32; 2], scroll: f32) -> Range<usize> {
        let cell = self.cell();
        let start_row = ((-scroll - self.spacing) / cell).floor().max(0.0) as usize;
        let end_row = ((-scroll + window[1] + self.spacing) / cell).ceil().max(0.0) as usize;
        let cols = self.columns(window[0]) as usize;
        let start = (start_row * cols).min(count);
        let end = (end_row * cols).min(count);
        start..end
    }

    /// Tile under a window position, if any. Points in the spacing gutters
    /// miss.
    #[must_use]
    pub fn hit_test(
        &self,
        pos: [f32; 2],
        window_w: f32,
        scroll: f32,
        count: usize,
    ) -> Option<usize> {
        let cell = self.cell();
        let cols = i64::from(self.columns(window_w));
        let col = ((pos[0] - self.spacing) / cell).floor() as i64;
        let row = ((pos[1] - scroll - self.spacing) / cell).floor() as i64;
        if col < 0 || col >= cols || row < 0 {
            return None;
        }
        let in_x = pos[0] - self.spacing - col as f32 * cell;
        let in_y = pos[1] - scroll - self.spacing - row as f32 * cell;
        if in_x > self.tile_size || in_y > self.drawn_height() {
            return None;
        }
        let index = (row * cols + col) as usize;
        (index < count).then_some(index)
    }
}

/// Scroll position and selection over a grid of `count` items. The item
/// count and window size travel with each call because both change out
/// from under the view (rescans, resizes).
#[derive(Debug, Clone)]
pub struct GridView {
    pub layout: GridLayout,
    scroll: f32,
    selected: usize,
}

impl GridView {
    #[must_use]
    pub fn new(cfg: &GridConfig) -> Self {
        Self {
            layout: GridLayout::new(cfg),
            scroll: 0.0,
            selected: 0,
        }
    }

    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Back to the top with the first item selected, e.g. after a rescan.
    pub fn reset(&mut self) {
        self.scroll = 0.0;
        self.selected = 0;
    }

    /// Select an index directly; ignored when out of range.
    pub fn select(&mut self, index: usize, count: usize) -> bool {
        if index < count {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Scroll by a pixel delta (negative = down) and clamp to the content.
    pub fn scroll_by(&mut self, dy: f32, count: usize, window: [f32; 2]) {
        let max = self.layout.max_scroll(count, window);
        self.scroll = (self.scroll + dy).clamp(-max, 0.0);
    }

    /// Bring a tile fully into view with a `spacing` margin, then re-clamp.
    pub fn scroll_to(&mut self, index: usize, count: usize, window: [f32; 2]) {
        let cols = self.layout.columns(window[0]) as usize;
        let row = (index / cols) as f32;
        let item_top = row * self.layout.cell() + self.layout.spacing;
        let item_bottom = item_top + self.layout.drawn_height();

        if item_top < -self.scroll {
            self.scroll = -item_top + self.layout.spacing;
        } else if item_bottom > -self.scroll + window[1] {
            self.scroll = -item_bottom + window[1] - self.layout.spacing;
        }

        let max = self.layout.max_scroll(count, window);
        self.scroll = self.scroll.clamp(-max, 0.0);
    }

    /// Arrow-key movement: `dx` steps within the row, `dy` steps whole
    /// rows. Moves only when the target index exists, so pressing down in
    /// the last partial row stays put instead of jumping columns.
    pub fn move_selection(&mut self, dx: i32, dy: i32, count: usize, window: [f32; 2]) -> bool {
        if count == 0 {
            return false;
        }
        let cols = i64::from(self.layout.columns(window[0]));
        let target = self.selected as i64 + i64::from(dx) + i64::from(dy) * cols;
        if target < 0 || target >= count as i64 {
            return false;
        }
        self.selected = target as usize;
        self.scroll_to(self.selected, count, window);
        true
    }

    /// Page up/down: one window's worth of rows, clamped to the ends.
    pub fn page_selection(&mut self, dir: i32, count: usize, window: [f32; 2]) -> bool {
        if count == 0 {
            return false;
        }
        let cols = i64::from(self.layout.columns(window[0]));
        let rows_per_page = (window[1] / self.layout.cell()).floor().max(1.0) as i64;
        let target = (self.selected as i64 + i64::from(dir) * rows_per_page * cols)
            .clamp(0, count as i64 - 1);
        if target as usize == self.selected {
            return false;
        }
        self.selected = target as usize;
        self.scroll_to(self.selected, count, window);
        true
    }

    /// Hit-test a click and select the tile it lands on.
    pub fn click(&mut self, pos: [f32; 2], count: usize, window: [f32; 2]) -> Option<usize> {
        let index = self.layout.hit_test(pos, window[0], self.scroll, count)?;
        self.selected = index;
        Some(index)
    }

    /// Draw parameters for one tile at the current scroll and selection.
    #[must_use]
    pub fn tile_params(
        &self,
        index: usize,
        image_size: [f32; 2],
        window: [f32; 2],
    ) -> DrawParams {
        let origin = self.layout.origin(index, window[0], self.scroll);
        let params = DrawParams::grid_tile(
            image_size,
            window,
            origin,
            self.layout.tile_size,
            index == self.selected,
        );
        match self.layout.tile_height {
            Some(h) => params.with_tile_height(h),
            None => params,
        }
    }
}
