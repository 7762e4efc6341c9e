use glam::Vec2;

/// Pointer state shared between the event handlers and the per-tick
/// simulation update.
///
/// Handlers write `raw` and `pressed`; the eased position, previous eased
/// position, delta and delta magnitude are derived once per tick by
/// [`crate::sim::SimulationState::update`]. All positions live in the
/// normalized `[0,1]²` canvas domain with `y` growing downward.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub raw: Vec2,
    pub eased: Vec2,
    pub last_eased: Vec2,
    pub delta: Vec2,
    pub delta_magnitude: f32,
    pub pressed: bool,
}

impl PointerState {
    pub fn set_position(&mut self, position: Vec2) {
        self.raw = position;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// One discrete exponential step toward the raw position. `easing` is
    /// the time constant in ticks; non-finite or sub-1 values are treated
    /// as 1 so an external control write can never divide by zero.
    pub fn ease(&mut self, easing: f32) {
        let easing = if easing.is_finite() { easing.max(1.0) } else { 1.0 };
        self.eased += (self.raw - self.eased) / easing;
    }
}
