// Shared tuning constants for the ink pipeline.

// Geometry
pub const MESH_SUBDIVISIONS: u32 = 100; // grid cells per axis; vertex count is 6 per cell
pub const STAMP_POINTS: usize = 20; // resampled points along the per-tick pointer segment

// Render targets
pub const DRAW_TARGET_DIVISOR: u32 = 10; // draw pass renders at 1/10 canvas resolution

// ASCII pass
pub const GLYPH_COUNT: u32 = 15; // glyphs tiled horizontally in the atlas
pub const ASCII_REFERENCE_WIDTH: f32 = 700.0; // logical width at which ascii_scale maps 1:1 to density

// Per-tick damping; ticks are pinned to the display refresh
pub const FLOW_VELOCITY_DAMPING: f32 = 0.98; // global flow integrator
pub const VERTEX_FLOW_DECAY: f32 = 0.99; // per-vertex flow field
pub const LENS_EASING_TICKS: f32 = 10.0; // lens distortion approach rate
