//! Effects domain: short-lived particles for deaths and dash trails.

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use rand::Rng;

use crate::combat::DashState;
use crate::core::{GameState, GameplaySet};
use crate::levels::LevelEntity;
use crate::movement::Player;

const BURST_PARTICLES: usize = 12;
const BURST_SPEED: (f32, f32) = (80.0, 260.0);
const BURST_LIFETIME: (f32, f32) = (0.3, 0.6);
const BURST_PARTICLE_SIZE: f32 = 6.0;
const PARTICLE_DRAG: f32 = 3.0;
const AFTERIMAGE_LIFETIME: f32 = 0.08;
const AFTERIMAGE_ALPHA: f32 = 0.45;

/// Despawns its entity when it runs out, fading the sprite on the way.
#[derive(Component, Debug)]
pub struct Lifetime {
    pub remaining: f32,
    pub total: f32,
}

impl Lifetime {
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds,
            total: seconds,
        }
    }

    pub fn fraction_left(&self) -> f32 {
        if self.total <= 0.0 {
            return 0.0;
        }
        (self.remaining / self.total).clamp(0.0, 1.0)
    }
}

/// Free-flying particle velocity, slowed by drag each frame
#[derive(Component, Debug)]
pub struct Drift(pub Vec2);

#[derive(Component, Debug)]
pub struct Afterimage;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            spawn_dash_afterimages.in_set(GameplaySet::Resolve),
        )
        .add_systems(
            Update,
            (move_particles, tick_lifetimes)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Scatter a ring of particles from `position`.
pub fn spawn_death_burst(commands: &mut Commands, position: Vec2, color: Color) {
    let mut rng = rand::rng();

    for i in 0..BURST_PARTICLES {
        let base_angle = i as f32 / BURST_PARTICLES as f32 * std::f32::consts::TAU;
        let angle = base_angle + rng.random_range(-0.3_f32..0.3);
        let speed = rng.random_range(BURST_SPEED.0..BURST_SPEED.1);
        let lifetime = rng.random_range(BURST_LIFETIME.0..BURST_LIFETIME.1);

        commands.spawn((
            LevelEntity,
            Lifetime::new(lifetime),
            Drift(Vec2::from_angle(angle) * speed),
            Sprite {
                color,
                custom_size: Some(Vec2::splat(BURST_PARTICLE_SIZE)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 3.0),
        ));
    }
}

fn spawn_dash_afterimages(
    mut commands: Commands,
    query: Query<(&Transform, &Sprite, &DashState), With<Player>>,
) {
    for (transform, sprite, dash) in &query {
        if !dash.is_active() {
            continue;
        }

        commands.spawn((
            LevelEntity,
            Afterimage,
            Lifetime::new(AFTERIMAGE_LIFETIME),
            Sprite {
                color: sprite.color.with_alpha(AFTERIMAGE_ALPHA),
                custom_size: sprite.custom_size,
                flip_x: sprite.flip_x,
                ..default()
            },
            Transform::from_translation(transform.translation.truncate().extend(-0.5)),
        ));
    }
}

fn move_particles(time: Res<Time>, mut query: Query<(&mut Transform, &mut Drift)>) {
    let dt = time.delta_secs();
    for (mut transform, mut drift) in &mut query {
        transform.translation += drift.0.extend(0.0) * dt;
        drift.0 *= (-PARTICLE_DRAG * dt).exp();
    }
}

pub(crate) fn tick_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Lifetime, Option<&mut Sprite>)>,
) {
    let dt = time.delta_secs();

    for (entity, mut lifetime, sprite) in &mut query {
        lifetime.remaining -= dt;
        if lifetime.remaining <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }

        if let Some(mut sprite) = sprite {
            let alpha = sprite.color.alpha().min(lifetime.fraction_left());
            sprite.color.set_alpha(alpha);
        }
    }
}
