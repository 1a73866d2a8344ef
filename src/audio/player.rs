use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::Sound;

/// Playback state of one sound instance. Stands in for whatever audio
/// backend actually produces samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioPlayer {
    /// Clip location, copied from the sound record
    pub location: String,
    pub position: Vector3<f64>,
    pub volume: f64,
    pub pitch: f64,
    pub spatial_blend: f64,
    pub max_audible_distance: f64,
    pub looping: bool,
    pub playing: bool,
}

impl AudioPlayer {
    pub fn for_sound(sound: &Sound, position: Vector3<f64>) -> Self {
        Self {
            location: sound.location.clone(),
            position,
            volume: 1.0,
            pitch: 1.0,
            spatial_blend: sound.spatial_blend,
            max_audible_distance: sound.max_audible_distance,
            looping: sound.kind.loops(),
            playing: false,
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }
}
