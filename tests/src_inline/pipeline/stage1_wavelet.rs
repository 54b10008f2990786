use super::*;
use crate::input::normalize_sequence;
use crate::model::propensity::PropensityTables;

#[test]
fn test_morlet_kernel() {
    assert_eq!(morlet(0.0), 1.0);
    let t = 0.7;
    assert!((morlet(t) - morlet(-t)).abs() < 1e-15);
    let expected = (-0.5f64).exp() * 5.0f64.cos();
    assert!((morlet(1.0) - expected).abs() < 1e-15);
}

#[test]
fn test_wavelet_transform_impulse() {
    let values = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
    let coeffs = wavelet_transform(&values, 1.0);
    assert_eq!(coeffs.len(), values.len());
    assert!((coeffs[3] - 1.0).abs() < 1e-12);
    assert!((coeffs[2] - morlet(1.0)).abs() < 1e-12);
    assert!((coeffs[4] - morlet(-1.0)).abs() < 1e-12);
    // offset 3 lies on the kernel edge (3 * scale), offset 4 is outside
    assert!((coeffs[0] - morlet(3.0)).abs() < 1e-12);
}

#[test]
fn test_wavelet_transform_scale_normalization() {
    let values = [0.0, 2.0, 0.0];
    let coeffs = wavelet_transform(&values, 4.0);
    assert!((coeffs[1] - 2.0 / 2.0).abs() < 1e-12);
}

#[test]
fn test_wavelet_transform_empty() {
    assert!(wavelet_transform(&[], 9.0).is_empty());
}

#[test]
fn test_find_extrema_strict_with_noise_floor() {
    let coeffs = [0.0, 0.5, 0.0, -0.5, 0.0];
    assert_eq!(find_extrema(&coeffs, 0.1), vec![1, 3]);
    assert!(find_extrema(&coeffs, 0.6).is_empty());
    // plateaus are not strict extrema
    assert!(find_extrema(&[0.0, 0.5, 0.5, 0.0], 0.1).is_empty());
    // endpoints are never sites
    assert!(find_extrema(&[1.0, 0.0], 0.1).is_empty());
    assert_eq!(find_extrema(&[0.0, -0.3, 0.0], 0.1), vec![1]);
}

#[test]
fn test_find_signal_sites_short_sequence() {
    let tables = PropensityTables::jiang_alpha_beta_v1();
    let seq = normalize_sequence("WG").unwrap();
    let scorer = ResidueScorer::new(&seq, &tables);
    assert!(find_signal_sites(&scorer, &SignalParams::default_v1()).is_empty());
}

#[test]
fn test_wavelet_transform_oversized_scales() {
    let values = [1.0, 2.0, 3.0];
    let wide = wavelet_transform(&values, 1e20);
    assert_eq!(wide.len(), 3);
    assert!(wide.iter().all(|c| c.is_finite()));

    for scale in [f64::INFINITY, f64::NAN, f64::NEG_INFINITY, -1.0] {
        assert_eq!(wavelet_transform(&values, scale), vec![0.0; 3]);
    }
}
