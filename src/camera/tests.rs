//! Camera domain: tests for smoothing, zoom targets and shake bookkeeping.

use super::follow::{smoothing_factor, target_zoom_scale};
use super::shake::sample_shake_offset;
use super::{CameraShake, CameraTuning, ShakeRng};

#[test]
fn test_smoothing_factor_is_bounded_and_monotonic() {
    assert_eq!(smoothing_factor(10.0, 0.0), 0.0);
    let small = smoothing_factor(10.0, 1.0 / 120.0);
    let large = smoothing_factor(10.0, 1.0 / 30.0);
    assert!(small > 0.0 && small < large && large < 1.0);
}

#[test]
fn test_two_half_frames_match_one_full_frame() {
    let dt = 1.0 / 60.0;
    let full = smoothing_factor(10.0, dt);
    let half = smoothing_factor(10.0, dt / 2.0);
    let combined = 1.0 - (1.0 - half) * (1.0 - half);
    assert!((full - combined).abs() < 1e-6);
}

#[test]
fn test_zoom_scales_with_speed_and_saturates() {
    let t = CameraTuning::default();
    assert_eq!(target_zoom_scale(0.0, &t), t.base_scale);
    let half = target_zoom_scale(t.max_player_speed / 2.0, &t);
    assert!((half - (t.base_scale + t.max_scale_increase / 2.0)).abs() < 1e-5);
    assert_eq!(
        target_zoom_scale(t.max_player_speed * 10.0, &t),
        t.base_scale + t.max_scale_increase
    );
}

#[test]
fn test_shake_offsets_stay_within_magnitude() {
    let mut rng = ShakeRng::from_seed(7);
    for _ in 0..200 {
        let offset = sample_shake_offset(&mut rng.0, 5.0);
        assert!(offset.x.abs() <= 5.0 && offset.y.abs() <= 5.0);
    }
    assert_eq!(sample_shake_offset(&mut rng.0, 0.0).length(), 0.0);
}

#[test]
fn test_seeded_shake_is_reproducible() {
    let mut a = ShakeRng::from_seed(42);
    let mut b = ShakeRng::from_seed(42);
    for _ in 0..10 {
        assert_eq!(
            sample_shake_offset(&mut a.0, 3.0),
            sample_shake_offset(&mut b.0, 3.0)
        );
    }
}

#[test]
fn test_weaker_request_does_not_cut_a_shake_short() {
    let mut shake = CameraShake::default();
    assert!(!shake.is_active());
    shake.request(0.5, 8.0);
    shake.request(0.1, 2.0);
    assert_eq!(shake.remaining, 0.5);
    assert_eq!(shake.magnitude, 8.0);
    assert!(shake.is_active());
}
