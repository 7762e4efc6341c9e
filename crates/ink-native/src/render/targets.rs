use ink_core::DRAW_TARGET_DIVISOR;

use super::helpers;

/// Offscreen colour targets chained between the passes.
///
/// The draw target runs at 1/10 canvas resolution; the ascii target at full
/// canvas resolution. Both are recreated on resize, after which the bind
/// groups that sample them must be rebuilt.
pub(crate) struct RenderTargets {
    pub(crate) draw_tex: wgpu::Texture,
    pub(crate) draw_view: wgpu::TextureView,
    pub(crate) ascii_tex: wgpu::Texture,
    pub(crate) ascii_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (draw_tex, draw_view) = helpers::create_color_target(
            device,
            "draw_target",
            (width / DRAW_TARGET_DIVISOR).max(1),
            (height / DRAW_TARGET_DIVISOR).max(1),
        );
        let (ascii_tex, ascii_view) =
            helpers::create_color_target(device, "ascii_target", width, height);
        Self {
            draw_tex,
            draw_view,
            ascii_tex,
            ascii_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.draw_tex, self.draw_view) = helpers::create_color_target(
            device,
            "draw_target",
            (width / DRAW_TARGET_DIVISOR).max(1),
            (height / DRAW_TARGET_DIVISOR).max(1),
        );
        (self.ascii_tex, self.ascii_view) =
            helpers::create_color_target(device, "ascii_target", width, height);
    }
}
