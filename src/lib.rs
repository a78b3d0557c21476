//! Placement and compositing core for an image viewer: a pannable,
//! zoomable single view and a scrollable thumbnail grid, rendered by one
//! vertex/fragment kernel with matching CPU and wgpu back ends.

pub mod composite;
pub mod config;
pub mod error;
pub mod gpu;
pub mod grid;
pub mod params;
pub mod raster;
pub mod sampler;
pub mod scene;
pub mod transform;
pub mod viewport;

pub use error::Error;
pub use params::{DrawMode, DrawParams, RawParams};
