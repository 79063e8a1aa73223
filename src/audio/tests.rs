//! Audio domain: tests for volume stepping.

use super::AudioSettings;

#[test]
fn test_volume_is_clamped() {
    let mut settings = AudioSettings::default();
    settings.set_volume(1.7);
    assert_eq!(settings.music_volume, 1.0);
    settings.set_volume(-0.2);
    assert_eq!(settings.music_volume, 0.0);
}

#[test]
fn test_volume_steps_land_on_bounds() {
    let mut settings = AudioSettings::default();
    for _ in 0..20 {
        settings.step_volume(1.0);
    }
    assert_eq!(settings.music_volume, 1.0);

    for _ in 0..20 {
        settings.step_volume(-1.0);
    }
    assert_eq!(settings.music_volume, 0.0);
}

#[test]
fn test_single_step_moves_by_a_tenth() {
    let mut settings = AudioSettings::default();
    settings.step_volume(1.0);
    assert!((settings.music_volume - 0.6).abs() < 1e-6);
}
