use ink_core::PipelineError;

/// Offscreen targets use an 8-bit unorm format; writes clamp to `[0,1]`,
/// which the draw pass relies on for its over-saturated stamp highlights.
pub(crate) const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Creates a shader module inside a validation error scope so a broken
/// shader fails pipeline construction with the stage name and the full
/// compiler log instead of being silently replaced.
pub(crate) fn create_shader_checked(
    device: &wgpu::Device,
    stage: &'static str,
    source: &str,
) -> Result<wgpu::ShaderModule, PipelineError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(PipelineError::ShaderCompile {
            stage,
            log: error.to_string(),
        });
    }
    Ok(module)
}

/// Same error-scope treatment for render-pipeline creation, surfacing
/// interface mismatches between the shader and the pipeline layout.
pub(crate) fn create_pipeline_checked(
    device: &wgpu::Device,
    stage: &'static str,
    descriptor: &wgpu::RenderPipelineDescriptor,
) -> Result<wgpu::RenderPipeline, PipelineError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let pipeline = device.create_render_pipeline(descriptor);
    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(PipelineError::ProgramLink {
            stage,
            log: error.to_string(),
        });
    }
    Ok(pipeline)
}

pub(crate) fn create_color_target(
    device: &wgpu::Device,
    label: &'static str,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: TARGET_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

pub(crate) fn linear_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}
