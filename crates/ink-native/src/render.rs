use std::path::Path;
use std::time::Instant;

use glam::Vec2;
use ink_core::{
    aspect_resolution, clamp_dimensions, subdivide_vertices, validate_chain, vertex_uvs, Controls,
    PipelineError, PointerState, SimulationState, StagePass, ASCII_REFERENCE_WIDTH,
    LENS_EASING_TICKS, MESH_SUBDIVISIONS,
};
use winit::window::Window;

use crate::assets;

pub(crate) mod ascii;
pub(crate) mod draw;
pub(crate) mod helpers;
pub(crate) mod post;
pub(crate) mod targets;

use ascii::{AsciiStage, AsciiUniforms};
use draw::{DrawStage, DrawUniforms};
use post::{PostStage, PostUniforms};
use targets::RenderTargets;

/// Colour targets of the fixed three-stage chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TargetId {
    Draw,
    Ascii,
    Surface,
}

const STAGE_CHAIN: [StagePass<TargetId>; 3] = [
    StagePass {
        name: "draw",
        reads: None,
        writes: TargetId::Draw,
    },
    StagePass {
        name: "ascii",
        reads: Some(TargetId::Draw),
        writes: TargetId::Ascii,
    },
    StagePass {
        name: "post",
        reads: Some(TargetId::Ascii),
        writes: TargetId::Surface,
    },
];

/// The Orchestrator: owns the GPU resources of all three stages plus the
/// per-frame pipeline state (controls, pointer, simulation, clock).
///
/// One `render` call is one tick; stages execute in the validated chain
/// order, so the read-after-write dependencies need no extra
/// synchronization.
pub struct Pipeline<'w> {
    pub window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    sampler: wgpu::Sampler,
    draw: DrawStage,
    ascii: AsciiStage,
    post: PostStage,

    uvs: Vec<Vec2>,
    sim: SimulationState,
    pub controls: Controls,
    pub pointer: PointerState,
    start: Option<Instant>,

    width: u32,
    height: u32,
    scale_factor: f64,
}

impl<'w> Pipeline<'w> {
    pub async fn new(
        window: &'w Window,
        atlas_path: &Path,
        mask_path: &Path,
    ) -> anyhow::Result<Pipeline<'w>> {
        validate_chain(&STAGE_CHAIN).map_err(PipelineError::from)?;

        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(PipelineError::InvalidDimensions {
                width: size.width,
                height: size.height,
            }
            .into());
        }

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("no GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sampler = helpers::linear_sampler(&device);
        let atlas = assets::load_texture(&device, &queue, "glyph_atlas", atlas_path)?;
        let mask = assets::load_texture(&device, &queue, "mask", mask_path)?;
        let atlas_view = atlas.create_view(&wgpu::TextureViewDescriptor::default());
        let mask_view = mask.create_view(&wgpu::TextureViewDescriptor::default());

        let targets = RenderTargets::new(&device, size.width, size.height);

        let vertices = subdivide_vertices(MESH_SUBDIVISIONS);
        let uvs = vertex_uvs(&vertices);
        let sim = SimulationState::new(uvs.len());

        let draw = DrawStage::new(&device, &vertices, &mask_view, &sampler)?;
        let ascii = AsciiStage::new(&device, &targets.draw_view, atlas_view, &sampler)?;
        let post = PostStage::new(&device, &targets.ascii_view, &sampler, format)?;

        log::info!(
            "pipeline ready: {}x{}, {} mesh vertices",
            size.width,
            size.height,
            uvs.len()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            targets,
            sampler,
            draw,
            ascii,
            post,
            uvs,
            sim,
            controls: Controls::default(),
            pointer: PointerState::default(),
            start: None,
            width: size.width,
            height: size.height,
            scale_factor: window.scale_factor(),
        })
    }

    /// One tick: simulation update, then the draw, ascii and post passes in
    /// chain order, then present.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let start = self.start.get_or_insert_with(Instant::now);
        let time_ms = start.elapsed().as_secs_f32() * 1000.0;
        let resolution = aspect_resolution(self.width, self.height);

        self.sim
            .update(&mut self.pointer, &self.controls, &self.uvs, resolution);

        let lens_target =
            self.controls.lens_distortion * if self.pointer.pressed { 2.0 } else { 1.0 };
        self.controls.lens_distortion_eased +=
            (lens_target - self.controls.lens_distortion_eased) / LENS_EASING_TICKS;

        self.draw.upload(
            &self.queue,
            &self.sim,
            DrawUniforms {
                resolution: resolution.to_array(),
                flow_offset: self.sim.flow_offset.to_array(),
                noise_scale: [self.controls.noise_scale, self.controls.noise_scale_detail],
                time_ms,
                noise_speed: self.controls.noise_speed,
                noise_contrast: self.controls.noise_contrast,
                noise_brightness: self.controls.noise_brightness,
                logo_falloff: self.controls.logo_falloff,
                spin: self.sim.spin_angle,
            },
        );

        let background = self.controls.background();
        let highlight = self.controls.highlight();
        self.ascii.upload(
            &self.queue,
            AsciiUniforms {
                resolution: resolution.to_array(),
                density: self.ascii_density(),
                highlight_falloff: self.controls.highlight_falloff,
                background: [background[0], background[1], background[2], 1.0],
                highlight: [highlight[0], highlight[1], highlight[2], 1.0],
            },
        );

        self.post.upload(
            &self.queue,
            PostUniforms {
                chaos: [
                    self.pointer.delta_magnitude,
                    self.pointer.delta.x,
                    self.pointer.delta.y,
                    0.0,
                ],
                aberration_base: self.controls.aberration_base,
                aberration_chaos: self.controls.aberration_chaos,
                lens_distortion: self.controls.lens_distortion_eased,
                _pad: 0.0,
            },
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.draw.encode(&mut encoder, &self.targets.draw_view);
        self.ascii.encode(&mut encoder, &self.targets.ascii_view);
        self.post.encode(&mut encoder, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Applies new canvas dimensions, clamped to at least one pixel per
    /// axis, recreating the offscreen targets and the bind groups that
    /// sample them.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = clamp_dimensions(width, height);
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, width, height);
        self.ascii
            .rebuild_bind_group(&self.device, &self.targets.draw_view, &self.sampler);
        self.post
            .rebuild_bind_group(&self.device, &self.targets.ascii_view, &self.sampler);
        log::debug!("resized to {}x{}", width, height);
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets the accent colour, clears the simulation fields and restarts
    /// the clock. Entry point for embedders that swap the accent colour at
    /// runtime.
    pub fn reinitialize(&mut self, colour: [u8; 3]) {
        self.controls.set_accent(colour);
        self.sim.reset();
        self.pointer = PointerState::default();
        self.start = None;
        log::info!("pipeline reinitialized, accent {:?}", colour);
    }

    /// Glyph density for the current canvas: `ascii_scale` corrected by the
    /// aspect ratio and the logical width, floored and kept at least 1 so a
    /// pathological control value cannot zero the cell size.
    fn ascii_density(&self) -> f32 {
        let aspect = self.height as f32 / self.width.max(1) as f32;
        let logical_width = self.width as f32 / self.scale_factor as f32;
        let density =
            (self.controls.ascii_scale * aspect * (logical_width / ASCII_REFERENCE_WIDTH)).floor();
        if density.is_finite() {
            density.max(1.0)
        } else {
            1.0
        }
    }
}
