//! Audio domain: looping background music with adjustable volume.

#[cfg(test)]
mod tests;

use bevy::audio::Volume;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Linear volume in 0..=1
    pub music_volume: f32,
    /// Asset path of the looping track
    pub music_path: String,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            music_path: "audio/music.ogg".to_string(),
        }
    }
}

impl AudioSettings {
    pub const VOLUME_STEP: f32 = 0.1;

    pub fn set_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
    }

    pub fn step_volume(&mut self, steps: f32) {
        // Round to a whole step so repeated presses land on 0.0 and 1.0 exactly
        let stepped = ((self.music_volume + steps * Self::VOLUME_STEP) / Self::VOLUME_STEP).round()
            * Self::VOLUME_STEP;
        self.set_volume(stepped);
    }
}

#[derive(Component, Debug)]
pub struct BackgroundMusic;

pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioSettings>()
            .add_systems(Startup, start_music)
            .add_systems(Update, apply_music_volume);
    }
}

fn start_music(mut commands: Commands, asset_server: Res<AssetServer>, settings: Res<AudioSettings>) {
    info!("Starting background music '{}'", settings.music_path);
    commands.spawn((
        BackgroundMusic,
        AudioPlayer::new(asset_server.load(settings.music_path.clone())),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(settings.music_volume)),
    ));
}

/// Push volume changes to the playing sink.
fn apply_music_volume(
    settings: Res<AudioSettings>,
    mut sinks: Query<&mut AudioSink, With<BackgroundMusic>>,
    mut warned: Local<bool>,
    mut pending: Local<bool>,
) {
    if settings.is_changed() {
        *pending = true;
    }
    if !*pending {
        return;
    }

    let mut applied = false;
    for mut sink in &mut sinks {
        sink.set_volume(Volume::Linear(settings.music_volume));
        applied = true;
    }

    if applied {
        *pending = false;
        debug!("Music volume set to {:.1}", settings.music_volume);
    } else if !*warned {
        *warned = true;
        warn!("Background music sink not found; volume change deferred");
    }
}
