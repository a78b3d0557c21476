//! Fragment stage: margin fill, texture sampling, and the selection border.

use crate::params::{DrawMode, DrawParams};
use crate::sampler::TextureSampler;

/// Letterbox margin fill inside grid tiles.
pub const GRID_MARGIN_FILL: [f32; 4] = [0.05, 0.05, 0.06, 1.0];
/// Fill outside the image in single view.
pub const SINGLE_VIEW_FILL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Selection border color.
pub const SELECTION_COLOR: [f32; 4] = [1.0, 0.8, 0.1, 1.0];
/// Selection border thickness in physical pixels at the tile's scale.
pub const SELECTION_BORDER_PX: f32 = 2.0;

/// Shade one fragment. `None` means the fragment is discarded (the part of
/// the oversized triangle that lies past the tile quad).
///
/// Decision order mirrors the fragment shader: tile clip, then margin fill
/// or sample, then the selection border on top.
pub fn shade_fragment<S: TextureSampler>(
    params: &DrawParams,
    uv: [f32; 2],
    quad_uv: [f32; 2],
    texture: &S,
) -> Option<[f32; 4]> {
    let (is_grid, size, selected) = match params.mode {
        DrawMode::GridTile { size, selected, .. } => (true, size, selected),
        DrawMode::SingleView { .. } => (false, 0.0, false),
    };

    // Coordinates exactly on 0 or 1 are corners of the quad and stay in.
    if is_grid && (outside_unit(quad_uv[0]) || outside_unit(quad_uv[1])) {
        return None;
    }

    let mut color = if outside_unit(uv[0]) || outside_unit(uv[1]) {
        if is_grid { GRID_MARGIN_FILL } else { SINGLE_VIEW_FILL }
    } else {
        texture.sample(uv)
    };

    if is_grid && selected {
        let border = SELECTION_BORDER_PX / size;
        let edge = (quad_uv[0].min(1.0 - quad_uv[0])).min(quad_uv[1].min(1.0 - quad_uv[1]));
        if edge < border {
            color = SELECTION_COLOR;
        }
    }

    Some(color)
}

fn outside_unit(c: f32) -> bool {
    c < 0.0 || c > 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::FlatColor;

    const GRAY: FlatColor = FlatColor([0.5, 0.5, 0.5, 1.0]);

    fn tile(selected: bool) -> DrawParams {
        DrawParams::grid_tile([100.0, 100.0], [1000.0, 800.0], [20.0, 20.0], 250.0, selected)
    }

    #[test]
    fn fragments_past_the_quad_are_discarded_in_grid_mode() {
        let p = tile(false);
        assert_eq!(shade_fragment(&p, [0.5, 0.5], [1.2, 0.5], &GRAY), None);
        assert_eq!(shade_fragment(&p, [0.5, 0.5], [0.5, -0.1], &GRAY), None);
        // Exactly 0 and 1 are the quad's own corners.
        assert!(shade_fragment(&p, [0.5, 0.5], [0.0, 1.0], &GRAY).is_some());
    }

    #[test]
    fn single_view_never_discards() {
        let p = DrawParams::single_view([100.0, 100.0], [1000.0, 800.0], [0.0, 0.0], 1.0);
        assert_eq!(
            shade_fragment(&p, [1.4, 0.5], [1.4, 0.5], &GRAY),
            Some(SINGLE_VIEW_FILL)
        );
        assert_eq!(
            shade_fragment(&p, [0.5, 0.5], [1.4, 0.5], &GRAY),
            Some([0.5, 0.5, 0.5, 1.0])
        );
    }

    #[test]
    fn margin_fill_depends_on_mode() {
        let grid = tile(false);
        assert_eq!(
            shade_fragment(&grid, [-0.2, 0.5], [0.1, 0.5], &GRAY),
            Some(GRID_MARGIN_FILL)
        );
        let single = DrawParams::single_view([100.0, 100.0], [1000.0, 800.0], [0.0, 0.0], 1.0);
        assert_eq!(
            shade_fragment(&single, [-0.2, 0.5], [0.1, 0.5], &GRAY),
            Some(SINGLE_VIEW_FILL)
        );
    }

    #[test]
    fn in_range_uv_samples_the_texture() {
        let p = tile(false);
        let c = FlatColor([0.2, 0.4, 0.6, 0.5]);
        // Alpha passes through untouched.
        assert_eq!(shade_fragment(&p, [0.3, 0.7], [0.3, 0.7], &c), Some([0.2, 0.4, 0.6, 0.5]));
    }

    #[test]
    fn selection_border_covers_both_fill_and_sample() {
        let p = tile(true);
        let border = SELECTION_BORDER_PX / 250.0;
        // Inside the border zone over the image.
        assert_eq!(
            shade_fragment(&p, [0.5, 0.5], [border * 0.5, 0.5], &GRAY),
            Some(SELECTION_COLOR)
        );
        // Inside the border zone over the letterbox margin.
        assert_eq!(
            shade_fragment(&p, [-0.3, 0.5], [0.5, 1.0 - border * 0.5], &GRAY),
            Some(SELECTION_COLOR)
        );
        // Past the border zone the sample shows through.
        assert_eq!(
            shade_fragment(&p, [0.5, 0.5], [0.5, 0.5], &GRAY),
            Some([0.5, 0.5, 0.5, 1.0])
        );
    }

    #[test]
    fn unselected_tiles_have_no_border() {
        let p = tile(false);
        assert_eq!(
            shade_fragment(&p, [0.5, 0.5], [0.001, 0.5], &GRAY),
            Some([0.5, 0.5, 0.5, 1.0])
        );
    }
}
