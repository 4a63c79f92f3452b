use std::time::Instant;

use crate::simulation::engine::step;
use crate::simulation::forces::{ForceModel, NewtonianGravity};
use crate::simulation::states::{Body, NVec2, System};

// deterministic layout, no rand needed; no two bodies coincide
fn spiral_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let r = 1.0 + 0.05 * i_f;
            Body {
                x: NVec2::new(r * (i_f * 0.37).cos(), r * (i_f * 0.37).sin()),
                v: NVec2::zeros(),
                m: 1.0 + (i_f * 0.13).sin().abs(),
            }
        })
        .collect()
}

/// Time `net_forces` for growing body counts.
pub fn bench_net_forces() {
    let ns = [100, 200, 400, 800, 1600];
    let gravity = NewtonianGravity::default();

    for n in ns {
        let bodies = spiral_bodies(n);
        let mut out = vec![NVec2::zeros(); n];

        let reps = 5;
        let start = Instant::now();
        for _ in 0..reps {
            gravity.net_forces(&bodies, &mut out);
        }
        let per_call = start.elapsed().as_secs_f64() / reps as f64;

        println!(
            "net_forces n = {:5}  {:10.3} ms/call  {:8.1} ns/pair",
            n,
            per_call * 1e3,
            per_call * 1e9 / (n * (n - 1)) as f64
        );
    }
}

/// Time full steps (forces + Euler update) for growing body counts.
pub fn bench_step() {
    let ns = [100, 200, 400, 800];
    let gravity = NewtonianGravity::default();
    let dt = 0.01;
    let steps = 10;

    for n in ns {
        let mut sys = System::new(spiral_bodies(n));

        let start = Instant::now();
        for _ in 0..steps {
            step(&mut sys, &gravity, dt);
        }
        let per_step = start.elapsed().as_secs_f64() / steps as f64;

        println!("step       n = {:5}  {:10.3} ms/step", n, per_step * 1e3);
    }
}
