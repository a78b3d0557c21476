use viewplane::config::{CameraConfig, GridConfig};
use viewplane::grid::GridLayout;
use viewplane::params::DrawParams;
use viewplane::transform::{VertexOutput, place_vertex};
use viewplane::viewport::Camera;

fn close(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "{a} vs {b}");
}

/// Affine interpolation along the v0 -> v1 edge of the triangle.
fn lerp_uv(a: &VertexOutput, b: &VertexOutput, t: f32) -> [f32; 2] {
    [
        a.uv[0] + (b.uv[0] - a.uv[0]) * t,
        a.uv[1] + (b.uv[1] - a.uv[1]) * t,
    ]
}

#[test]
fn fitted_single_view_fills_the_short_axis() {
    // 3000x2000 on 1920x1080: fit = min(0.64, 0.54) = 0.54, so the image
    // spans the full height and 0.84375 of the half-width on each side.
    let mut cam = Camera::new(CameraConfig::default());
    cam.show_image([3000.0, 2000.0], [1920.0, 1080.0]);
    close(cam.zoom(), 0.54, 1e-6);

    let p = cam.params([3000.0, 2000.0], [1920.0, 1080.0]);
    let v0 = place_vertex(&p, 0);
    let v1 = place_vertex(&p, 1);
    close(v0.clip_position[0], -0.84375, 1e-5);
    close(v0.clip_position[1], -1.0, 1e-5);
    // The quad's right edge sits at the midpoint of v0 and v1.
    close((v0.clip_position[0] + v1.clip_position[0]) / 2.0, 0.84375, 1e-5);
}

#[test]
fn grid_tile_corners_land_on_the_pixel_rect() {
    // Index 8 at 1080p with 7 columns: second row, second column.
    let layout = GridLayout::new(&GridConfig::default());
    let origin = layout.origin(8, 1920.0, 0.0);
    assert_eq!(origin, [290.0, 290.0]);

    let p = DrawParams::grid_tile([100.0, 100.0], [1920.0, 1080.0], origin, 250.0, false);
    let v0 = place_vertex(&p, 0);
    let v1 = place_vertex(&p, 1);
    let v2 = place_vertex(&p, 2);
    // Top-left corner: (290, 290) px.
    close(v0.clip_position[0], 290.0 / 1920.0 * 2.0 - 1.0, 1e-6);
    close(v0.clip_position[1], 1.0 - 290.0 / 1080.0 * 2.0, 1e-6);
    // Right and bottom edges via edge midpoints: 540 px on both axes.
    close((v0.clip_position[0] + v1.clip_position[0]) / 2.0, -0.4375, 1e-6);
    close((v0.clip_position[1] + v2.clip_position[1]) / 2.0, 0.0, 1e-6);
}

#[test]
fn letterbox_margins_are_equal_on_both_sides() {
    // A 2:1 image inside a square tile occupies the middle half of the
    // tile's width; uv crosses 0 and 1 a quarter in from each side.
    let p = DrawParams::grid_tile([400.0, 200.0], [1000.0, 800.0], [20.0, 20.0], 250.0, false);
    let v0 = place_vertex(&p, 0);
    let v1 = place_vertex(&p, 1);
    // quad_uv.x runs 0..2 along this edge, so t = u/2.
    close(lerp_uv(&v0, &v1, 0.125)[0], 0.0, 1e-5);
    close(lerp_uv(&v0, &v1, 0.375)[0], 1.0, 1e-5);
    close(lerp_uv(&v0, &v1, 0.25)[0], 0.5, 1e-5);

    // Tall images spread the same way along v.
    let p = DrawParams::grid_tile([200.0, 400.0], [1000.0, 800.0], [20.0, 20.0], 250.0, false);
    let v0 = place_vertex(&p, 0);
    let v2 = place_vertex(&p, 2);
    close(v0.uv[1], -0.5, 1e-5);
    close(v2.uv[1], 3.5, 1e-5);
    close(v0.uv[0], 0.0, 1e-5);
}

#[test]
fn wheel_zoom_and_pan_compose_from_a_fitted_start() {
    // 1600x1200 on 800x600 fits at 0.5, which cancels the 2x base scale.
    let mut cam = Camera::new(CameraConfig::default());
    cam.show_image([1600.0, 1200.0], [800.0, 600.0]);
    let p = cam.params([1600.0, 1200.0], [800.0, 600.0]);
    assert_eq!(place_vertex(&p, 0).clip_position, [-1.0, -1.0, 0.0, 1.0]);

    // One wheel notch in: 0.5 * 1.1 scales the quad to 1.1x.
    cam.zoom_by(1.0);
    let p = cam.params([1600.0, 1200.0], [800.0, 600.0]);
    let v0 = place_vertex(&p, 0).clip_position;
    close(v0[0], -1.1, 1e-5);
    close(v0[1], -1.1, 1e-5);

    // Dragging 40 right and 30 down moves clip by (+0.1, -0.1).
    cam.pan_by(40.0, 30.0);
    let p = cam.params([1600.0, 1200.0], [800.0, 600.0]);
    let v0 = place_vertex(&p, 0).clip_position;
    close(v0[0], -1.0, 1e-5);
    close(v0[1], -1.2, 1e-5);
}
