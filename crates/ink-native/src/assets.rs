use std::path::Path;

use ink_core::PipelineError;
use wgpu::util::{DeviceExt, TextureDataOrder};

/// Decodes an image from disk into an RGBA8 texture.
///
/// A decode failure aborts pipeline construction; the pipeline never starts
/// with a missing texture. The glyph atlas and the mask are both loaded
/// through here.
pub(crate) fn load_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &'static str,
    path: &Path,
) -> Result<wgpu::Texture, PipelineError> {
    let decoded = image::open(path)
        .map_err(|error| PipelineError::AssetLoad {
            path: path.display().to_string(),
            source: Box::new(error),
        })?
        .into_rgba8();
    let (width, height) = decoded.dimensions();

    log::info!("loaded {label} ({width}x{height}) from {}", path.display());

    Ok(device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        },
        TextureDataOrder::LayerMajor,
        decoded.as_raw(),
    ))
}
