//! Texture sampling for the CPU path.

use image::RgbaImage;

/// A texture the composite stage can sample. RGBA channels in [0,1].
pub trait TextureSampler {
    fn sample(&self, uv: [f32; 2]) -> [f32; 4];
}

/// Bilinear clamp-to-edge sampling over an [`RgbaImage`], matching a GPU
/// linear sampler: texel centers at half-integer positions, edge texels
/// repeated past the border.
pub struct BilinearImage<'a> {
    image: &'a RgbaImage,
}

impl<'a> BilinearImage<'a> {
    #[must_use]
    pub fn new(image: &'a RgbaImage) -> Self {
        Self { image }
    }

    fn texel(&self, x: i64, y: i64) -> [f32; 4] {
        let (w, h) = self.image.dimensions();
        let x = x.clamp(0, i64::from(w) - 1) as u32;
        let y = y.clamp(0, i64::from(h) - 1) as u32;
        let p = self.image.get_pixel(x, y).0;
        [
            f32::from(p[0]) / 255.0,
            f32::from(p[1]) / 255.0,
            f32::from(p[2]) / 255.0,
            f32::from(p[3]) / 255.0,
        ]
    }
}

impl TextureSampler for BilinearImage<'_> {
    fn sample(&self, uv: [f32; 2]) -> [f32; 4] {
        let (w, h) = self.image.dimensions();
        let tx = uv[0] * w as f32 - 0.5;
        let ty = uv[1] * h as f32 - 0.5;
        let fx = tx - tx.floor();
        let fy = ty - ty.floor();
        let x0 = tx.floor() as i64;
        let y0 = ty.floor() as i64;

        let c00 = self.texel(x0, y0);
        let c10 = self.texel(x0 + 1, y0);
        let c01 = self.texel(x0, y0 + 1);
        let c11 = self.texel(x0 + 1, y0 + 1);

        let mut out = [0.0f32; 4];
        for k in 0..4 {
            let top = c00[k] + (c10[k] - c00[k]) * fx;
            let bottom = c01[k] + (c11[k] - c01[k]) * fx;
            out[k] = top + (bottom - top) * fy;
        }
        out
    }
}

/// Uniform color standing in for a texture; used by tests and placeholders.
pub struct FlatColor(pub [f32; 4]);

impl TextureSampler for FlatColor {
    fn sample(&self, _uv: [f32; 2]) -> [f32; 4] {
        self.0
    }
}
