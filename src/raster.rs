//! CPU reference rasterizer: renders draws into an `RgbaImage` with the
//! same placement and compositing the GPU pipeline performs, one fragment
//! per covered pixel center.

use image::{Rgba, RgbaImage};

use crate::composite::shade_fragment;
use crate::error::Error;
use crate::params::DrawParams;
use crate::sampler::{BilinearImage, TextureSampler};
use crate::transform::{VertexOutput, place_vertex};

/// Quantize a [0,1] RGBA color to 8 bits, the way an `Rgba8Unorm` target
/// stores it.
#[must_use]
pub fn to_rgba8(c: [f32; 4]) -> Rgba<u8> {
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([q(c[0]), q(c[1]), q(c[2]), q(c[3])])
}

/// Fill the whole target with one color.
pub fn clear(target: &mut RgbaImage, color: [f32; 4]) {
    let px = to_rgba8(color);
    for p in target.pixels_mut() {
        *p = px;
    }
}

/// Render one draw into `target`. Discarded fragments leave the existing
/// pixel untouched, so clear colors show through outside grid tiles.
///
/// # Errors
/// Returns [`Error::BadParams`] when the params fail their contract and
/// [`Error::TargetMismatch`] when the target's dimensions differ from
/// `params.window_size`.
pub fn render_draw<S: TextureSampler>(
    target: &mut RgbaImage,
    params: &DrawParams,
    texture: &S,
) -> Result<(), Error> {
    params.validate()?;
    let (tw, th) = target.dimensions();
    if params.window_size != [tw as f32, th as f32] {
        return Err(Error::TargetMismatch {
            expect_w: params.window_size[0] as u32,
            expect_h: params.window_size[1] as u32,
            actual_w: tw,
            actual_h: th,
        });
    }

    let verts = [
        place_vertex(params, 0),
        place_vertex(params, 1),
        place_vertex(params, 2),
    ];
    let screen: Vec<[f32; 2]> = verts.iter().map(|v| to_screen(v, tw, th)).collect();
    let (a, b, c) = (screen[0], screen[1], screen[2]);

    let denom = edge(a, b, c);
    if denom.abs() < f32::EPSILON {
        return Ok(());
    }

    // Bounding box clamped to the target; the triangle usually overshoots it.
    let min_x = a[0].min(b[0]).min(c[0]).floor().max(0.0) as u32;
    let max_x = (a[0].max(b[0]).max(c[0]).ceil().min(tw as f32)) as u32;
    let min_y = a[1].min(b[1]).min(c[1]).floor().max(0.0) as u32;
    let max_y = (a[1].max(b[1]).max(c[1]).ceil().min(th as f32)) as u32;

    for y in min_y..max_y {
        for x in min_x..max_x {
            let p = [x as f32 + 0.5, y as f32 + 0.5];
            let w0 = edge(b, c, p) / denom;
            let w1 = edge(c, a, p) / denom;
            let w2 = edge(a, b, p) / denom;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }
            // Affine interpolation; the triangle is drawn with w = 1.
            let uv = [
                w0 * verts[0].uv[0] + w1 * verts[1].uv[0] + w2 * verts[2].uv[0],
                w0 * verts[0].uv[1] + w1 * verts[1].uv[1] + w2 * verts[2].uv[1],
            ];
            let quad_uv = [
                w0 * verts[0].quad_uv[0] + w1 * verts[1].quad_uv[0] + w2 * verts[2].quad_uv[0],
                w0 * verts[0].quad_uv[1] + w1 * verts[1].quad_uv[1] + w2 * verts[2].quad_uv[1],
            ];
            if let Some(color) = shade_fragment(params, uv, quad_uv, texture) {
                target.put_pixel(x, y, to_rgba8(color));
            }
        }
    }
    Ok(())
}

/// Render a sequence of draws over a cleared target, sampling each draw's
/// image bilinearly. Draw order is back to front.
///
/// # Errors
/// Fails when a draw references a missing image or any draw fails.
pub fn render_frame(
    target: &mut RgbaImage,
    clear_color: [f32; 4],
    draws: &[(usize, DrawParams)],
    images: &[RgbaImage],
) -> Result<(), Error> {
    clear(target, clear_color);
    for &(index, params) in draws {
        let image = images.get(index).ok_or_else(|| {
            Error::BadParams(format!(
                "draw references image {index} but only {} are loaded",
                images.len()
            ))
        })?;
        render_draw(target, &params, &BilinearImage::new(image))?;
    }
    Ok(())
}

fn to_screen(v: &VertexOutput, w: u32, h: u32) -> [f32; 2] {
    [
        (v.clip_position[0] + 1.0) * 0.5 * w as f32,
        (1.0 - v.clip_position[1]) * 0.5 * h as f32,
    ]
}

fn edge(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
}
