/// Default accent colour applied to glyph highlights until the embedder
/// overrides it.
pub const DEFAULT_ACCENT: [u8; 3] = [211, 241, 0];

/// Light-mode background, 8-bit channels.
pub const LIGHT_BACKGROUND: [u8; 3] = [245, 243, 241];

/// Flat configuration record read by every stage each tick.
///
/// An external panel may overwrite any field between ticks; consumers clamp
/// at the point of use, so no value can panic the pipeline, including
/// pathological ones outside the advertised ranges.
#[derive(Clone, Debug)]
pub struct Controls {
    /// Stamp radius of pointer ink deposits.
    pub stroke_width: f32,
    /// Brightness decay rate; the per-tick factor is `1 - stroke_decay/10`.
    pub stroke_decay: f32,
    /// Glyph density before aspect correction.
    pub ascii_scale: f32,
    /// Base octave spatial frequency of the noise field.
    pub noise_scale: f32,
    /// Detail octave spatial frequency.
    pub noise_scale_detail: f32,
    /// Wall-clock animation speed of the noise field.
    pub noise_speed: f32,
    pub noise_contrast: f32,
    pub noise_brightness: f32,
    /// Gain of pointer-motion flow deposits.
    pub noise_displacement: f32,
    pub aberration_base: f32,
    pub aberration_chaos: f32,
    pub lens_distortion: f32,
    /// Runtime copy of `lens_distortion`, eased over ~10 ticks and doubled
    /// while the pointer is pressed.
    pub lens_distortion_eased: f32,
    /// Pointer low-pass time constant in ticks.
    pub mouse_easing: f32,
    /// Coupling of pointer motion into the global spin integrator.
    pub liquid_spin: f32,
    /// Spin damping; the per-tick factor is `1 - viscosity/10`.
    pub viscosity: f32,
    /// Contrast stretch applied to the mask texture.
    pub logo_falloff: f32,
    /// How aggressively bright cells take the accent colour.
    pub highlight_falloff: f32,
    /// Switches the background palette between black and warm white.
    pub light_mode: bool,
    /// Accent colour, 8-bit channels.
    pub colour: [u8; 3],
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            stroke_width: 0.35,
            stroke_decay: 0.1,
            ascii_scale: 60.0,
            noise_scale: 2.0,
            noise_scale_detail: 8.0,
            noise_speed: 0.5,
            noise_contrast: 0.46,
            noise_brightness: -0.51,
            noise_displacement: 0.1,
            aberration_base: 0.0,
            aberration_chaos: 0.01,
            lens_distortion: 0.05,
            lens_distortion_eased: 0.05,
            mouse_easing: 3.0,
            liquid_spin: 0.03,
            viscosity: 0.2,
            logo_falloff: 3.0,
            highlight_falloff: 0.8,
            light_mode: false,
            colour: DEFAULT_ACCENT,
        }
    }
}

impl Controls {
    /// Re-initializes the highlight colour from an external accent call.
    pub fn set_accent(&mut self, colour: [u8; 3]) {
        self.colour = colour;
    }

    /// Background palette for the current mode, normalized to `[0,1]`.
    pub fn background(&self) -> [f32; 3] {
        if self.light_mode {
            normalize_rgb(LIGHT_BACKGROUND)
        } else {
            [0.0, 0.0, 0.0]
        }
    }

    /// Accent colour normalized to `[0,1]`.
    pub fn highlight(&self) -> [f32; 3] {
        normalize_rgb(self.colour)
    }
}

fn normalize_rgb(rgb: [u8; 3]) -> [f32; 3] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    ]
}
