//! wgpu back end: the same placement and compositing as the CPU path,
//! running on the GPU via `shaders/plane.wgsl`.

use anyhow::{Context, Result};
use bytemuck::Zeroable;
use image::RgbaImage;
use tracing::info;
use wgpu::util::DeviceExt;

use crate::params::{DrawParams, RawParams};

/// Render pipeline plus the bind group layouts every draw shares.
/// Texture + sampler bind at group 0, the params uniform at group 1.
pub struct PlaneRenderer {
    pipeline: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
    params_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
}

/// An uploaded image ready to draw.
pub struct ImageBinding {
    bind_group: wgpu::BindGroup,
    pub size: [f32; 2],
}

/// A per-draw uniform buffer with its bind group.
pub struct ParamsBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl PlaneRenderer {
    #[must_use]
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("plane-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/plane.wgsl").into()),
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("plane-texture-bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let params_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("plane-params-bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("plane-pipeline-layout"),
            bind_group_layouts: &[&texture_layout, &params_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("plane-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    // The composite output is the pixel; alpha passes
                    // through instead of blending with the target.
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("plane-sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            pipeline,
            texture_layout,
            params_layout,
            sampler,
        }
    }

    /// Upload an RGBA image as a texture and bind it with the shared
    /// sampler. `Rgba8Unorm`, no color-space conversion.
    #[must_use]
    pub fn upload_image(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &RgbaImage,
    ) -> ImageBinding {
        let (width, height) = img.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("plane-image"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            img,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("plane-image-bind-group"),
            layout: &self.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        ImageBinding {
            bind_group,
            size: [width as f32, height as f32],
        }
    }

    /// Create a uniform buffer for one draw's parameters.
    #[must_use]
    pub fn create_params(&self, device: &wgpu::Device) -> ParamsBinding {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("plane-params"),
            contents: bytemuck::bytes_of(&RawParams::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("plane-params-bind-group"),
            layout: &self.params_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        ParamsBinding { buffer, bind_group }
    }

    pub fn write_params(&self, queue: &wgpu::Queue, binding: &ParamsBinding, params: &DrawParams) {
        queue.write_buffer(&binding.buffer, 0, bytemuck::bytes_of(&params.to_raw()));
    }

    pub fn draw<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        image: &'pass ImageBinding,
        params: &'pass ParamsBinding,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &image.bind_group, &[]);
        pass.set_bind_group(1, &params.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}

/// Headless device/queue pair for offscreen rendering and tests.
pub struct Headless {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl Headless {
    /// Acquire any available adapter without a surface.
    ///
    /// # Errors
    /// Fails when the host has no usable GPU adapter.
    pub fn acquire() -> Result<Self> {
        let instance = wgpu::Instance::default();
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .context("no suitable GPU adapter")?;
        info!(adapter = ?adapter.get_info().name, "acquired headless adapter");
        let limits = adapter.limits();
        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("viewplane-device"),
            required_features: wgpu::Features::empty(),
            required_limits: limits,
            memory_hints: wgpu::MemoryHints::default(),
            trace: wgpu::Trace::default(),
        }))
        .context("request wgpu device")?;
        Ok(Self { device, queue })
    }
}

/// Round a row stride up to the copy alignment (256 bytes); 0 stays 0.
#[must_use]
pub fn compute_padded_stride(bytes_per_row: u32) -> u32 {
    bytes_per_row.div_ceil(wgpu::COPY_BYTES_PER_ROW_ALIGNMENT) * wgpu::COPY_BYTES_PER_ROW_ALIGNMENT
}

/// Render draws into an offscreen `Rgba8Unorm` target and read it back.
///
/// Each entry pairs an uploaded image with the parameters to draw it
/// under; draws happen in order into one pass over a cleared target.
///
/// # Errors
/// Fails when the readback copy cannot be mapped.
pub fn render_offscreen(
    gpu: &Headless,
    renderer: &PlaneRenderer,
    width: u32,
    height: u32,
    clear: [f32; 4],
    draws: &[(&ImageBinding, DrawParams)],
) -> Result<RgbaImage> {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let target = gpu.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("offscreen-target"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = target.create_view(&wgpu::TextureViewDescriptor::default());

    let bindings: Vec<ParamsBinding> = draws
        .iter()
        .map(|(_, params)| {
            let binding = renderer.create_params(&gpu.device);
            renderer.write_params(&gpu.queue, &binding, params);
            binding
        })
        .collect();

    let padded_stride = compute_padded_stride(4 * width);
    let readback = gpu.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("offscreen-readback"),
        size: u64::from(padded_stride) * u64::from(height),
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("offscreen-encoder"),
        });
    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("offscreen-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: f64::from(clear[0]),
                        g: f64::from(clear[1]),
                        b: f64::from(clear[2]),
                        a: f64::from(clear[3]),
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        for ((image, _), binding) in draws.iter().zip(&bindings) {
            renderer.draw(&mut pass, image, binding);
        }
    }
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            texture: &target,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &readback,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(padded_stride),
                rows_per_image: Some(height),
            },
        },
        size,
    );
    gpu.queue.submit(Some(encoder.finish()));

    let slice = readback.slice(..);
    let (sender, receiver) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |res| {
        let _ = sender.send(res);
    });
    let _ = gpu.device.poll(wgpu::PollType::Wait);
    receiver
        .recv()
        .context("receive map result")?
        .context("map readback buffer")?;

    let data = slice.get_mapped_range();
    let row_bytes = (4 * width) as usize;
    let mut pixels = vec![0u8; row_bytes * height as usize];
    for (y, row) in data
        .chunks(padded_stride as usize)
        .take(height as usize)
        .enumerate()
    {
        pixels[y * row_bytes..(y + 1) * row_bytes].copy_from_slice(&row[..row_bytes]);
    }
    drop(data);
    readback.unmap();

    RgbaImage::from_raw(width, height, pixels).context("assemble readback image")
}
