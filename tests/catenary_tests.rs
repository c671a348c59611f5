use approx::{assert_relative_eq, relative_eq};
use drape::{catenary_length, CatenarySolver, RopeConfig};

#[test]
fn deep_sag_length() {
    let length: f64 = catenary_length(100.0, 20.0);
    assert!(length > 100.0);
    assert_relative_eq!(length, 109.9718, epsilon = 1e-3);
}

#[test]
fn single_precision_matches_double() {
    let single: f32 = catenary_length(40.0, 5.0);
    let double: f64 = catenary_length(40.0, 5.0);
    assert_relative_eq!(single as f64, double, epsilon = 1e-3);
    assert_relative_eq!(double, 41.6207, epsilon = 1e-3);
}

#[test]
fn parameter_reproduces_sag() {
    let solver = CatenarySolver::default();
    let (span, sag) = (60.0f64, 10.0f64);
    let a = solver.parameter(span, sag);
    assert_relative_eq!(a * ((span / (2.0 * a)).cosh() - 1.0), sag, epsilon = 1e-6);
}

#[test]
fn length_scales_with_geometry() {
    let small: f64 = catenary_length(100.0, 20.0);
    let large: f64 = catenary_length(200.0, 40.0);
    assert_relative_eq!(large, 2.0 * small, max_relative = 1e-6);
}

#[test]
fn repeated_solves_agree() {
    let first: f32 = catenary_length(80.0, 16.0);
    for _ in 0..10 {
        assert_eq!(catenary_length(80.0f32, 16.0), first);
    }
}

#[test]
fn more_iterations_do_not_disturb_converged_result() {
    let coarse = CatenarySolver::default().length(100.0f64, 20.0);
    let fine = CatenarySolver::new(40).length(100.0f64, 20.0);
    assert!(relative_eq!(coarse, fine, epsilon = 1e-6));
}

#[test]
fn shallow_sag_stays_finite() {
    // Does not converge within the default budget. The length is wrong but finite.
    let length: f64 = catenary_length(100.0, 1.0);
    assert!(length.is_finite());
}

#[test]
fn config_spreads_catenary_over_links() {
    let config = RopeConfig::<f32>::new(6).with_catenary_sag(100.0, 20.0);
    assert_relative_eq!(config.distance_per_segment * 5.0, 109.9718, epsilon = 1e-2);
}
