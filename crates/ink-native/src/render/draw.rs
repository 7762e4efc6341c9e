use ink_core::{PipelineError, SimulationState};
use wgpu::util::DeviceExt;

use super::helpers;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DrawUniforms {
    pub resolution: [f32; 2],
    pub flow_offset: [f32; 2],
    pub noise_scale: [f32; 2],
    pub time_ms: f32,
    pub noise_speed: f32,
    pub noise_contrast: f32,
    pub noise_brightness: f32,
    pub logo_falloff: f32,
    pub spin: f32,
}

/// The mesh pass: per-vertex brightness/flow attributes over the static
/// grid, composited with the mask texture and the noise field.
pub(crate) struct DrawStage {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    position_vb: wgpu::Buffer,
    brightness_vb: wgpu::Buffer,
    flow_vb: wgpu::Buffer,
    vertex_count: u32,
}

impl DrawStage {
    pub(crate) fn new(
        device: &wgpu::Device,
        vertices: &[f32],
        mask_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> Result<Self, PipelineError> {
        let shader = helpers::create_shader_checked(device, "draw", ink_core::DRAW_WGSL)?;

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("draw_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("draw_uniforms"),
            size: std::mem::size_of::<DrawUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("draw_bg"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(mask_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        let vertex_count = (vertices.len() / 2) as u32;
        let position_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("draw_positions"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let brightness_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("draw_brightness"),
            size: (vertex_count as usize * std::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let flow_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("draw_flow"),
            size: (vertex_count as usize * 2 * std::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("draw_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let vertex_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<f32>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 0,
                    shader_location: 1,
                }],
            },
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 2,
                }],
            },
        ];
        let pipeline = helpers::create_pipeline_checked(
            device,
            "draw",
            &wgpu::RenderPipelineDescriptor {
                label: Some("draw_pipeline"),
                layout: Some(&pl),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_draw"),
                    buffers: &vertex_buffers,
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_draw"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: helpers::TARGET_FORMAT,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            },
        )?;

        Ok(Self {
            pipeline,
            uniform_buffer,
            bind_group,
            position_vb,
            brightness_vb,
            flow_vb,
            vertex_count,
        })
    }

    /// Pushes this tick's simulation fields and uniforms to the GPU.
    pub(crate) fn upload(
        &self,
        queue: &wgpu::Queue,
        sim: &SimulationState,
        uniforms: DrawUniforms,
    ) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        queue.write_buffer(&self.brightness_vb, 0, bytemuck::cast_slice(&sim.brightness));
        queue.write_buffer(&self.flow_vb, 0, bytemuck::cast_slice(&sim.flow));
    }

    pub(crate) fn encode(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("draw_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.position_vb.slice(..));
        rpass.set_vertex_buffer(1, self.brightness_vb.slice(..));
        rpass.set_vertex_buffer(2, self.flow_vb.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}
