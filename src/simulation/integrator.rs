//! Explicit first-order Euler update for a single body
//!
//! Both the position and velocity updates read the pre-step state. Position
//! moves with the old velocity, so this is not the semi-implicit variant.

use super::states::{Body, NVec2};

/// x_n+1 = x_n + v_n * dt
pub fn next_position(body: &Body, dt: f64) -> NVec2 {
    body.x + body.v * dt
}

/// v_n+1 = v_n + (F / m) * dt
pub fn next_velocity(body: &Body, force: &NVec2, dt: f64) -> NVec2 {
    body.v + (*force / body.m) * dt
}

/// Advance `body` in place by one Euler step under `force`.
pub fn advance(body: &mut Body, force: &NVec2, dt: f64) {
    let x_next = next_position(body, dt);
    let v_next = next_velocity(body, force, dt);
    body.x = x_next;
    body.v = v_next;
}
