//! Per-frame simulation state: the brightness and flow fields stamped by
//! pointer motion, plus the global flow and spin integrators.
//!
//! All damping constants are applied once per tick and assume ticks pinned
//! to the display refresh; simulation speed tracks the refresh rate while
//! the noise animation runs on wall-clock time.

use glam::Vec2;

use crate::constants::{FLOW_VELOCITY_DAMPING, STAMP_POINTS, VERTEX_FLOW_DECAY};
use crate::controls::Controls;
use crate::path::interpolate_points;
use crate::pointer::PointerState;

/// Per-vertex brightness/flow scalars and the two global integrators.
///
/// `brightness` holds one scalar in `[0,1]` per mesh vertex; `flow` holds an
/// interleaved xy pair per vertex. Both are index-aligned with the vertex
/// list and live from pipeline init to teardown.
pub struct SimulationState {
    pub brightness: Vec<f32>,
    pub flow: Vec<f32>,
    pub flow_offset: Vec2,
    pub flow_velocity: Vec2,
    pub spin_angle: f32,
    pub spin_velocity: f32,
}

impl SimulationState {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            brightness: vec![0.0; vertex_count],
            flow: vec![0.0; vertex_count * 2],
            flow_offset: Vec2::ZERO,
            flow_velocity: Vec2::ZERO,
            spin_angle: 0.0,
            spin_velocity: 0.0,
        }
    }

    /// Zeroes every field; used when the pipeline is re-initialized.
    pub fn reset(&mut self) {
        self.brightness.fill(0.0);
        self.flow.fill(0.0);
        self.flow_offset = Vec2::ZERO;
        self.flow_velocity = Vec2::ZERO;
        self.spin_angle = 0.0;
        self.spin_velocity = 0.0;
    }

    /// Advances the simulation by one tick.
    ///
    /// `uvs` are the precomputed screen UVs of the mesh vertices and
    /// `resolution` is the aspect-corrected pair `[max(w/h,1), max(h/w,1)]`.
    /// Eases the pointer, resamples the motion segment into stamp points,
    /// integrates the global flow and spin springs, deposits brightness and
    /// flow along the stamp, then decays and re-clamps the fields.
    pub fn update(
        &mut self,
        pointer: &mut PointerState,
        controls: &Controls,
        uvs: &[Vec2],
        resolution: Vec2,
    ) {
        pointer.ease(controls.mouse_easing);

        let stamp = interpolate_points(&[pointer.eased, pointer.last_eased], STAMP_POINTS);

        pointer.delta = pointer.last_eased - pointer.eased;
        pointer.delta_magnitude = pointer
            .delta
            .x
            .abs()
            .max(pointer.delta.y.abs())
            .clamp(0.0, 1.0);

        // Global flow: damped velocity, no restoring force.
        let flow_gain = controls.noise_displacement * 1.5 / 10.0;
        self.flow_velocity += pointer.delta * flow_gain;
        self.flow_velocity *= FLOW_VELOCITY_DAMPING;
        self.flow_offset += self.flow_velocity;

        // Global spin: torque grows with distance from the canvas center.
        let spin_force = pointer.delta.x * controls.liquid_spin * (pointer.eased.y * 2.0 - 1.0)
            - pointer.delta.y * controls.liquid_spin * (pointer.eased.x * 2.0 - 1.0);
        self.spin_velocity += spin_force;
        self.spin_velocity *= (1.0 - controls.viscosity / 10.0).clamp(0.0, 1.0);
        self.spin_angle += self.spin_velocity;

        let size_multiplier = if pointer.pressed { 0.5 } else { 1.0 };
        let radius = (30.0 - controls.stroke_width * 30.0)
            * size_multiplier
            * (1.0 - pointer.delta_magnitude);
        let flow_radius = 3.0 * (1.0 - pointer.delta_magnitude);
        let brightness_decay = (1.0 - controls.stroke_decay / 10.0).clamp(0.0, 1.0);

        for (i, uv) in uvs.iter().enumerate() {
            for point in &stamp {
                let bx = (point.x - uv.x) * resolution.x * radius;
                let by = (point.y - uv.y) * resolution.y * radius;
                let falloff = (1.0 - (bx * bx + by * by).sqrt()).max(0.0);
                self.brightness[i] += falloff * pointer.delta_magnitude;

                let fx = (point.x - uv.x) * resolution.x * flow_radius;
                let fy = (point.y - uv.y) * resolution.y * flow_radius;
                let falloff_flow = (1.0 - (fx * fx + fy * fy).sqrt()).max(0.0);
                self.flow[i * 2] += falloff_flow * pointer.delta.x * controls.noise_displacement;
                self.flow[i * 2 + 1] +=
                    falloff_flow * pointer.delta.y * controls.noise_displacement;
            }

            self.flow[i * 2] *= VERTEX_FLOW_DECAY;
            self.flow[i * 2 + 1] *= VERTEX_FLOW_DECAY;
            self.brightness[i] = (self.brightness[i] * brightness_decay).clamp(0.0, 1.0);
        }

        pointer.last_eased = pointer.eased;
    }
}
