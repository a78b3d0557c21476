//! Vertex stage: one oversized triangle, placed per draw mode.

use crate::params::{DrawMode, DrawParams};

/// The single triangle that covers the unit quad: indices 0, 1, 2 map to
/// clip-space (-1,-1), (3,-1), (-1,3). No vertex or index buffers needed;
/// everything past the quad is cut back in the fragment stage.
pub const TRIANGLE: [[f32; 2]; 3] = [[-1.0, -1.0], [3.0, -1.0], [-1.0, 3.0]];

/// Per-vertex outputs, interpolated across the triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    pub clip_position: [f32; 4],
    /// Texture coordinate; may leave [0,1] where the letterbox margin is.
    pub uv: [f32; 2],
    /// Tile-local coordinate over the quad, (0,0) top-left to (1,1).
    pub quad_uv: [f32; 2],
}

/// Place one vertex of the triangle for the given draw.
///
/// Mirrors the vertex shader: pure, no clamping, caller contract assumed
/// (see [`DrawParams::validate`]).
#[must_use]
pub fn place_vertex(params: &DrawParams, vertex_index: u32) -> VertexOutput {
    let pos = TRIANGLE[(vertex_index % 3) as usize];
    let base_uv = [pos[0] * 0.5 + 0.5, pos[1] * 0.5 + 0.5];

    match params.mode {
        DrawMode::GridTile {
            origin,
            size,
            height,
            ..
        } => {
            let tile = [size, height.unwrap_or(size)];
            let px = [
                origin[0] + base_uv[0] * tile[0],
                origin[1] + base_uv[1] * tile[1],
            ];
            // Pixel space is y-down; clip space is y-up.
            let clip = [
                (px[0] / params.window_size[0]) * 2.0 - 1.0,
                1.0 - (px[1] / params.window_size[1]) * 2.0,
                0.0,
                1.0,
            ];
            VertexOutput {
                clip_position: clip,
                uv: letterbox_uv(base_uv, params.image_size),
                quad_uv: base_uv,
            }
        }
        DrawMode::SingleView { pan, zoom } => {
            let base_scale = [
                params.image_size[0] / params.window_size[0],
                params.image_size[1] / params.window_size[1],
            ];
            let final_scale = [base_scale[0] * zoom, base_scale[1] * zoom];
            let pixel_pan = [
                (pan[0] / params.window_size[0]) * 2.0,
                (pan[1] / params.window_size[1]) * 2.0,
            ];
            let clip = [
                pos[0] * final_scale[0] + pixel_pan[0],
                pos[1] * final_scale[1] - pixel_pan[1],
                0.0,
                1.0,
            ];
            VertexOutput {
                clip_position: clip,
                uv: [base_uv[0], 1.0 - base_uv[1]],
                quad_uv: base_uv,
            }
        }
    }
}

/// Spread the texture coordinate along the image's long axis so the image
/// letterboxes inside the square tile. Coordinates past [0,1] land in the
/// margin; the fragment stage fills them.
fn letterbox_uv(base_uv: [f32; 2], image_size: [f32; 2]) -> [f32; 2] {
    let aspect = image_size[0] / image_size[1];
    if aspect > 1.0 {
        [(base_uv[0] - 0.5) * aspect + 0.5, base_uv[1]]
    } else if aspect < 1.0 {
        [base_uv[0], (base_uv[1] - 0.5) * (image_size[1] / image_size[0]) + 0.5]
    } else {
        base_uv
    }
}
