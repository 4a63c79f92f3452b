use std::cell::Cell;
use std::f64::consts::PI;

use nbody2d::simulation::engine::step;
use nbody2d::simulation::forces::{ForceModel, NewtonianGravity};
use nbody2d::simulation::integrator::{advance, next_position, next_velocity};
use nbody2d::simulation::states::{center_of_mass, total_momentum, Body, NVec2, System};
use nbody2d::simulation::vector_math::{angle, distance, force_magnitude, G};
use nbody2d::Error;

/// Body from the `(x, y, m, vx, vy)` layout, bypassing validation
fn body(x: f64, y: f64, m: f64, vx: f64, vy: f64) -> Body {
    Body {
        x: NVec2::new(x, y),
        v: NVec2::new(vx, vy),
        m,
    }
}

/// A = (0, 0, 1000, 0, 0), B = (10, 0, 1, 0, 0)
fn heavy_light_system() -> System {
    System::new(vec![
        body(0.0, 0.0, 1000.0, 0.0, 0.0),
        body(10.0, 0.0, 1.0, 0.0, 0.0),
    ])
}

fn gravity() -> NewtonianGravity {
    NewtonianGravity::default()
}

/// Counts pairwise evaluations and returns a unit x force
struct CountingForce {
    calls: Cell<usize>,
}

impl ForceModel for CountingForce {
    fn pairwise_force(&self, _on: &Body, _by: &Body) -> NVec2 {
        self.calls.set(self.calls.get() + 1);
        NVec2::new(1.0, 0.0)
    }
}

// ==================================================================================
// Vector math tests
// ==================================================================================

#[test]
fn distance_is_euclidean() {
    let a = body(1.0, 2.0, 1.0, 0.0, 0.0);
    let b = body(4.0, 6.0, 1.0, 0.0, 0.0);
    assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
    assert!((distance(&b, &a) - 5.0).abs() < 1e-12);
}

#[test]
fn distance_of_coincident_bodies_is_zero() {
    let a = body(3.0, -2.0, 1.0, 5.0, 5.0);
    let b = body(3.0, -2.0, 7.0, 0.0, 0.0);
    assert_eq!(distance(&a, &b), 0.0);
    assert!(force_magnitude(G, a.m, b.m, 0.0).is_infinite());
}

#[test]
fn angle_covers_all_quadrants() {
    let o = body(0.0, 0.0, 1.0, 0.0, 0.0);
    let cases = [
        ((1.0, 0.0), 0.0),
        ((0.0, 1.0), PI / 2.0),
        ((-1.0, 0.0), PI),
        ((0.0, -1.0), -PI / 2.0),
        ((-1.0, -1.0), -3.0 * PI / 4.0),
    ];
    for ((x, y), expected) in cases {
        let b = body(x, y, 1.0, 0.0, 0.0);
        let got = angle(&o, &b);
        assert!((got - expected).abs() < 1e-12, "angle to ({}, {}) = {}", x, y, got);
    }
}

#[test]
fn angle_of_coincident_bodies_is_zero() {
    let a = body(2.0, 2.0, 1.0, 0.0, 0.0);
    assert_eq!(angle(&a, &a.clone()), 0.0);
}

#[test]
fn force_magnitude_inverse_square() {
    let f1 = force_magnitude(G, 2.0, 3.0, 1.0);
    let f2 = force_magnitude(G, 2.0, 3.0, 2.0);
    assert!((f1 - G * 6.0).abs() < 1e-18);
    assert!((f1 / f2 - 4.0).abs() < 1e-12);
}

// ==================================================================================
// Force model tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let a = body(-1.5, 0.7, 2.0, 0.0, 0.0);
    let b = body(2.0, -3.1, 3.0, 0.0, 0.0);
    let g = gravity();

    let f_ab = g.pairwise_force(&a, &b);
    let f_ba = g.pairwise_force(&b, &a);
    let net = f_ab + f_ba;

    assert!(net.norm() < 1e-12 * f_ab.norm(), "forces not opposite: {:?} vs {:?}", f_ab, f_ba);
    assert!((f_ab.norm() - f_ba.norm()).abs() < 1e-12 * f_ab.norm());
}

#[test]
fn gravity_points_toward_other_body() {
    let a = body(1.0, 1.0, 1.0, 0.0, 0.0);
    let b = body(-2.0, 5.0, 4.0, 0.0, 0.0);
    let f = gravity().pairwise_force(&a, &b);

    let dx = b.x - a.x;
    assert!(f.dot(&dx) > 0.0, "force is not toward second body");
    assert!((f.norm() - force_magnitude(G, 1.0, 4.0, 5.0)).abs() < 1e-15);
}

#[test]
fn net_forces_single_body_is_zero() {
    let bodies = vec![body(4.0, 4.0, 10.0, 1.0, 1.0)];
    let out = gravity().net_force_vec(&bodies);
    assert_eq!(out, vec![NVec2::zeros()]);
}

#[test]
fn net_forces_empty_set() {
    let out = gravity().net_force_vec(&[]);
    assert!(out.is_empty());
}

#[test]
fn net_forces_sums_n_minus_one_contributions_per_body() {
    let bodies: Vec<Body> = (0..6).map(|i| body(i as f64, 0.0, 1.0, 0.0, 0.0)).collect();
    let model = CountingForce { calls: Cell::new(0) };

    let out = model.net_force_vec(&bodies);

    assert_eq!(model.calls.get(), 6 * 5);
    for f in &out {
        assert_eq!(*f, NVec2::new(5.0, 0.0));
    }
}

#[test]
fn identical_bodies_are_not_skipped() {
    // same five values, still two distinct bodies
    let bodies = vec![
        body(1.0, 1.0, 2.0, 0.0, 0.0),
        body(1.0, 1.0, 2.0, 0.0, 0.0),
        body(5.0, 1.0, 2.0, 0.0, 0.0),
    ];
    let model = CountingForce { calls: Cell::new(0) };

    let out = model.net_force_vec(&bodies);

    assert_eq!(model.calls.get(), 3 * 2);
    assert_eq!(out[0], NVec2::new(2.0, 0.0));
    assert_eq!(out[1], NVec2::new(2.0, 0.0));
}

#[test]
fn net_forces_overwrites_stale_buffer() {
    let bodies = vec![body(0.0, 0.0, 1.0, 0.0, 0.0), body(0.0, 2.0, 1.0, 0.0, 0.0)];
    let mut out = vec![NVec2::new(99.0, 99.0); 2];
    gravity().net_forces(&bodies, &mut out);

    let expected = force_magnitude(G, 1.0, 1.0, 2.0);
    assert!(out[0].x.abs() < 1e-15);
    assert!((out[0].y - expected).abs() < 1e-15);
    assert!((out[1].y + expected).abs() < 1e-15);
}

#[test]
fn net_forces_superpose() {
    // body 0 sits between two equal masses, the pulls cancel
    let bodies = vec![
        body(0.0, 0.0, 1.0, 0.0, 0.0),
        body(-3.0, 0.0, 5.0, 0.0, 0.0),
        body(3.0, 0.0, 5.0, 0.0, 0.0),
    ];
    let out = gravity().net_force_vec(&bodies);
    assert!(out[0].norm() < 1e-15);
    assert!(out[1].x > 0.0);
    assert!(out[2].x < 0.0);
}

#[test]
fn coincident_bodies_produce_non_finite_force() {
    let bodies = vec![body(1.0, 1.0, 1.0, 0.0, 0.0), body(1.0, 1.0, 1.0, 0.0, 0.0)];
    let out = gravity().net_force_vec(&bodies);
    assert!(!out[0].x.is_finite());
    assert!(!out[0].y.is_finite());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn position_uses_pre_step_velocity() {
    let mut b = body(1.0, 2.0, 2.0, 3.0, -1.0);
    let f = NVec2::new(4.0, 8.0);
    let dt = 0.5;

    assert_eq!(next_position(&b, dt), NVec2::new(2.5, 1.5));
    assert_eq!(next_velocity(&b, &f, dt), NVec2::new(4.0, 1.0));

    advance(&mut b, &f, dt);
    // not semi-implicit: x moved with v = (3, -1), not the updated (4, 1)
    assert_eq!(b.x, NVec2::new(2.5, 1.5));
    assert_eq!(b.v, NVec2::new(4.0, 1.0));
    assert_eq!(b.m, 2.0);
}

// ==================================================================================
// Simulation step tests
// ==================================================================================

#[test]
fn deterministic_two_body_step() {
    let mut sys = heavy_light_system();
    let f = G * 1000.0 * 1.0 / 100.0;

    step(&mut sys, &gravity(), 1.0);

    let a = &sys.bodies[0];
    let b = &sys.bodies[1];

    // positions move with the pre-step (zero) velocity
    assert_eq!(a.x, NVec2::new(0.0, 0.0));
    assert_eq!(b.x, NVec2::new(10.0, 0.0));

    // A is pulled along +x toward B, B along -x toward A
    assert!((a.v.x - f / 1000.0).abs() < 1e-9);
    assert!(a.v.y.abs() < 1e-9);
    assert!((b.v.x + f).abs() < 1e-9);
    assert!(b.v.y.abs() < 1e-9);
    assert_eq!(sys.t, 1.0);

    // second tick carries the velocities into positions
    step(&mut sys, &gravity(), 1.0);
    assert!((sys.bodies[0].x.x - f / 1000.0).abs() < 1e-9);
    assert!((sys.bodies[1].x.x - (10.0 - f)).abs() < 1e-9);
}

#[test]
fn zero_dt_leaves_state_unchanged() {
    let mut sys = System::new(vec![
        body(0.0, 0.0, 50.0, 0.1, -0.2),
        body(3.0, 4.0, 2.0, -1.0, 0.5),
        body(-6.0, 1.0, 9.0, 0.0, 0.3),
    ]);
    let before = sys.bodies.clone();

    step(&mut sys, &gravity(), 0.0);

    assert_eq!(sys.bodies, before);
}

#[test]
fn momentum_conserved_for_isolated_pair() {
    let mut sys = System::new(vec![
        body(0.0, 0.0, 1000.0, 0.0, -0.00008),
        body(10.0, 0.0, 1.0, 0.0, 0.08),
    ]);
    let p0 = total_momentum(&sys.bodies);
    let dt = 0.5;
    let steps = 400;

    for _ in 0..steps {
        step(&mut sys, &gravity(), dt);
    }

    let drift = (total_momentum(&sys.bodies) - p0).norm();
    let tol = 1e-12 * dt * steps as f64;
    assert!(drift < tol, "momentum drifted by {}", drift);
}

#[test]
fn forces_use_pre_step_snapshot() {
    // a step on the whole set must match forces computed up front
    let bodies = vec![
        body(0.0, 0.0, 5.0, 1.0, 0.0),
        body(1.0, 1.0, 3.0, 0.0, 1.0),
        body(-2.0, 0.5, 7.0, -0.5, 0.0),
    ];
    let forces = gravity().net_force_vec(&bodies);
    let dt = 0.25;

    let mut expected = bodies.clone();
    for (b, f) in expected.iter_mut().zip(forces.iter()) {
        advance(b, f, dt);
    }

    let mut sys = System::new(bodies);
    step(&mut sys, &gravity(), dt);

    assert_eq!(sys.bodies, expected);
}

#[test]
fn step_on_empty_system_only_advances_time() {
    let mut sys = System::default();
    step(&mut sys, &gravity(), 2.0);
    assert!(sys.bodies.is_empty());
    assert_eq!(sys.t, 2.0);
}

#[test]
fn step_accepts_trait_object() {
    let model: Box<dyn ForceModel> = Box::new(gravity());
    let mut sys = heavy_light_system();
    step(&mut sys, model.as_ref(), 1.0);
    assert!(sys.bodies[1].v.x < 0.0);
}

// ==================================================================================
// Centre of mass and body construction tests
// ==================================================================================

#[test]
fn center_of_mass_symmetric_pair() {
    let bodies = vec![body(-1.0, 0.0, 3.0, 0.0, 0.0), body(1.0, 0.0, 3.0, 0.0, 0.0)];
    let com = center_of_mass(&bodies);
    assert!(com.norm() < 1e-15);
}

#[test]
fn center_of_mass_is_mass_weighted() {
    let sys = heavy_light_system();
    let com = sys.center_of_mass();
    assert!((com.x - 10.0 / 1001.0).abs() < 1e-12);
    assert_eq!(com.y, 0.0);
}

#[test]
fn center_of_mass_of_empty_set_is_nan() {
    let com = center_of_mass(&[]);
    assert!(com.x.is_nan() && com.y.is_nan());
}

#[test]
fn body_rejects_non_positive_mass() {
    assert_eq!(Body::new(0.0, 0.0, 0.0, 0.0, 0.0), Err(Error::NonPositiveMass(0.0)));
    assert!(Body::new(0.0, 0.0, -1.0, 0.0, 0.0).is_err());
    assert!(Body::new(0.0, 0.0, f64::INFINITY, 0.0, 0.0).is_err());
    assert!(Body::new(0.0, 0.0, f64::NAN, 0.0, 0.0).is_err());
}

#[test]
fn body_array_layout() {
    let b = Body::from_array([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(b.x, NVec2::new(1.0, 2.0));
    assert_eq!(b.m, 3.0);
    assert_eq!(b.v, NVec2::new(4.0, 5.0));
    assert_eq!(b.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);

    assert_eq!(Body::from_slice(&[1.0, 2.0, 3.0]), Err(Error::InvalidBodyLength(3)));
}
