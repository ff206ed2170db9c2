#![cfg(test)]

use crate::{
    frame, series, solvers, Gust86Orbit, OrbitalElements, Satellite, StateError, StateVectors,
    Trajectory,
};
use glam::{DMat3, DVec3};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::TAU;
use std::thread;

const DAY: f64 = 86_400.0;

/// Time sweep used by the whole-pipeline tests: +-10000 days around J2000,
/// in seconds, on a step that is deliberately not a multiple of any
/// satellite's period.
fn sweep_times() -> impl Iterator<Item = f64> {
    (-40..=40).map(|i| f64::from(i) * 250.25 * DAY)
}

fn assert_almost_eq(a: f64, b: f64, tolerance: f64, what: &str) {
    let difference = (a - b).abs();
    assert!(
        difference <= tolerance,
        "{what} mismatch: {a} vs {b} (difference {difference}, tolerance {tolerance})"
    );
}

fn assert_finite(v: DVec3, what: &str) {
    assert!(v.is_finite(), "{what} is not finite: {v:?}");
}

fn state_bits(state: &StateVectors) -> [u64; 6] {
    [
        state.position.x.to_bits(),
        state.position.y.to_bits(),
        state.position.z.to_bits(),
        state.velocity.x.to_bits(),
        state.velocity.y.to_bits(),
        state.velocity.z.to_bits(),
    ]
}

#[test]
fn states_are_finite_over_twenty_thousand_days() {
    for satellite in Satellite::ALL {
        let orbit = Gust86Orbit::new(satellite);

        for t in sweep_times() {
            let state = orbit
                .state(t)
                .unwrap_or_else(|e| panic!("{} at t={t}: {e:?}", satellite.name()));

            assert_finite(state.position, "position");
            assert_finite(state.velocity, "velocity");
        }
    }
}

#[test]
fn state_is_deterministic_across_repeated_calls() {
    for satellite in Satellite::ALL {
        let orbit = Gust86Orbit::new(satellite);

        for t in sweep_times() {
            let first = orbit.state(t).unwrap();
            let second = orbit.state(t).unwrap();

            assert_eq!(
                state_bits(&first),
                state_bits(&second),
                "{} at t={t} not bit-identical",
                satellite.name()
            );
        }
    }
}

#[test]
fn state_is_deterministic_across_threads() {
    let times: Vec<f64> = sweep_times().collect();

    for satellite in Satellite::ALL {
        let orbit = Gust86Orbit::new(satellite);

        let reference: Vec<[u64; 6]> = times
            .iter()
            .map(|&t| state_bits(&orbit.state(t).unwrap()))
            .collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let times = times.clone();
                thread::spawn(move || {
                    let orbit = Gust86Orbit::new(satellite);
                    times
                        .iter()
                        .map(|&t| state_bits(&orbit.state(t).unwrap()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    }
}

#[test]
fn distance_stays_near_the_mean_orbital_radius() {
    for satellite in Satellite::ALL {
        let orbit = Gust86Orbit::new(satellite);
        let bound = orbit.bounding_radius();

        for t in sweep_times() {
            let distance = orbit.position(t).unwrap().length();

            assert!(
                distance < bound,
                "{} at t={t}: distance {distance} km exceeds bound {bound} km",
                satellite.name()
            );
            assert!(
                distance > 0.8 * bound,
                "{} at t={t}: distance {distance} km implausibly small",
                satellite.name()
            );
        }
    }
}

#[test]
fn position_is_approximately_periodic() {
    // Periodic perturbation terms keep this from being exact, hence the
    // relatively loose tolerance.
    for satellite in Satellite::ALL {
        let orbit = Gust86Orbit::new(satellite);
        let period = orbit.period();

        for base in [0.0, 123.0 * DAY, -4567.0 * DAY] {
            let here = orbit.position(base).unwrap();
            let next = orbit.position(base + period).unwrap();

            let relative = (next - here).length() / here.length();
            assert!(
                relative < 1e-3,
                "{} from t={base}: relative drift {relative} over one period",
                satellite.name()
            );
        }
    }
}

#[test]
fn kepler_solver_converges_for_realistic_eccentricities() {
    let mut rng = StdRng::seed_from_u64(0x6755_5438_36);

    for _ in 0..10_000 {
        let eccentricity: f64 = rng.random_range(0.0..=0.1);
        let pericenter = rng.random_range(0.0..TAU);
        let h = eccentricity * pericenter.cos();
        let k = eccentricity * pericenter.sin();
        let l = rng.random_range(-10.0 * TAU..10.0 * TAU);

        let f = solvers::solve_eccentric_longitude(l, h, k)
            .unwrap_or_else(|e| panic!("no convergence for L={l}, h={h}, k={k}: {e:?}"));

        // The solution must actually satisfy the equation.
        let residual = l - f - h * f.sin() + k * f.cos();
        assert_almost_eq(residual, 0.0, 1e-12, "Kepler residual");
    }
}

#[test]
fn kepler_solver_is_exact_at_zero_eccentricity() {
    // The non-singular form degenerates to F = L when h = k = 0.
    for l in [-5.0, -0.4, 0.0, 0.7, 3.0, 12.0] {
        let f = solvers::solve_eccentric_longitude(l, 0.0, 0.0).unwrap();
        assert_almost_eq(f, l, 1e-14, "circular eccentric longitude");
    }
}

#[test]
fn kepler_solver_reports_nonconvergence_instead_of_hanging() {
    // h = 1, k = 0, L = 0 drives the Newton denominator to zero at the
    // seed, which poisons the iteration with NaN. The solver must run to
    // its cap and return the recoverable error.
    let result = solvers::solve_eccentric_longitude(0.0, 1.0, 0.0);
    assert_eq!(result, Err(StateError::NumericalNonConvergence));
}

#[test]
fn frame_rotation_is_orthonormal() {
    let r = frame::URANICENTRIC_TO_EMEJ2000;
    let product = r.transpose() * r;

    assert!(
        product.abs_diff_eq(DMat3::IDENTITY, 1e-12),
        "R^T R deviates from identity: {product:?}"
    );
    assert_almost_eq(r.determinant(), 1.0, 1e-12, "rotation determinant");
}

#[test]
fn miranda_longitude_bias_matches_the_published_constant() {
    assert_eq!(series::longitude_bias(Satellite::Miranda), -0.23805158);
}

#[test]
fn elements_at_epoch_satisfy_the_solver_contract() {
    for satellite in Satellite::ALL {
        let elements = OrbitalElements::at(0.0, satellite);

        assert!(elements.n > 0.0, "{}: mean motion", satellite.name());
        assert!(elements.l.is_finite());
        assert!(
            elements.eccentricity() < 0.02,
            "{}: eccentricity {} out of the fitted range",
            satellite.name(),
            elements.eccentricity()
        );
        assert!(elements.p.hypot(elements.q) < 0.1);
    }
}

#[test]
fn mean_motions_decrease_outward() {
    let motions: Vec<f64> = Satellite::ALL
        .iter()
        .map(|&s| OrbitalElements::at(0.0, s).n)
        .collect();

    for pair in motions.windows(2) {
        assert!(
            pair[0] > pair[1],
            "mean motions not ordered by distance: {motions:?}"
        );
    }
}

#[test]
fn periods_match_the_known_values() {
    // Sidereal periods in days, from the GUST86 paper.
    let expected = [1.413, 2.520, 4.144, 8.706, 13.46];

    for (satellite, expected_days) in Satellite::ALL.into_iter().zip(expected) {
        let period_days = Gust86Orbit::new(satellite).period() / DAY;
        assert_almost_eq(period_days, expected_days, 0.01, satellite.name());
    }
}

#[test]
fn velocity_matches_finite_difference_of_position() {
    let step = 0.5; // seconds
    let mut rng = StdRng::seed_from_u64(42);

    for satellite in Satellite::ALL {
        let orbit = Gust86Orbit::new(satellite);

        for _ in 0..20 {
            let t = rng.random_range(-1000.0 * DAY..1000.0 * DAY);

            let state = orbit.state(t).unwrap();
            let ahead = orbit.position(t + step).unwrap();
            let behind = orbit.position(t - step).unwrap();

            let numeric = (ahead - behind) / (2.0 * step);
            let difference = (numeric - state.velocity).length();

            // The analytic velocity is osculating and omits the slow drift
            // of the elements themselves, so the bound is loose.
            assert!(
                difference < 1e-3 * state.velocity.length().max(1.0),
                "{} at t={t}: analytic velocity {:?} vs finite difference {numeric:?}",
                satellite.name(),
                state.velocity
            );
        }
    }
}

#[test]
fn satellite_metadata_is_consistent() {
    assert_eq!(Satellite::ALL.len(), 5);

    for (index, satellite) in Satellite::ALL.into_iter().enumerate() {
        assert_eq!(satellite.index(), index);
        assert!(!satellite.name().is_empty());
        assert!(satellite.gravitational_parameter() > 0.0);
        assert!(satellite.bounding_radius() > 0.0);
    }

    // Bounding radii grow with distance from Uranus.
    for pair in Satellite::ALL.windows(2) {
        assert!(pair[0].bounding_radius() < pair[1].bounding_radius());
    }
}
