//! Effects domain: tests for particle lifetimes.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::{Lifetime, tick_lifetimes};

#[test]
fn test_fraction_left_counts_down() {
    let mut lifetime = Lifetime::new(0.5);
    assert_eq!(lifetime.fraction_left(), 1.0);
    lifetime.remaining = 0.25;
    assert!((lifetime.fraction_left() - 0.5).abs() < 1e-6);
    lifetime.remaining = -1.0;
    assert_eq!(lifetime.fraction_left(), 0.0);
    assert_eq!(Lifetime::new(0.0).fraction_left(), 0.0);
}

#[test]
fn test_expired_particles_are_despawned_and_live_ones_fade() {
    let mut world = World::new();
    world.init_resource::<Time>();
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(100));

    let short = world.spawn(Lifetime::new(0.05)).id();
    let long = world
        .spawn((
            Lifetime::new(0.2),
            Sprite {
                color: Color::WHITE,
                ..default()
            },
        ))
        .id();

    world.run_system_once(tick_lifetimes).unwrap();

    assert!(world.get_entity(short).is_err());
    let sprite = world.get::<Sprite>(long).unwrap();
    assert!(sprite.color.alpha() <= 0.5 + 1e-6);
    assert!(sprite.color.alpha() > 0.0);
}
