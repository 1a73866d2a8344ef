use std::collections::HashMap;

use nalgebra::Vector3;
use tracing::debug;

use super::error::{AudioError, Result};
use super::{AudioPlayer, Sound, SoundKind};

/// Suffix appended to the registry key of ambient sounds. Each play
/// spawns an instance named `<base key><counter>`, so `*` is reserved
/// and never appears in user-supplied names.
pub const AMBIENT_SUFFIX: &str = "*Base";

/// Registry and playback table for all sounds.
///
/// Background kinds get one long-lived player created at registration.
/// Ambient kinds get a player per play, named by a per-sound counter;
/// the counter only resets once no instance of that sound is left, so a
/// fresh instance can never collide with a live one.
#[derive(Debug)]
pub struct SoundMixer {
    sounds: HashMap<String, Sound>,
    players: HashMap<String, AudioPlayer>,
    ambient_counts: HashMap<String, u32>,
    kind_volumes: [f64; SoundKind::COUNT],
    default_position: Vector3<f64>,
}

impl SoundMixer {
    pub fn new() -> Self {
        Self {
            sounds: HashMap::new(),
            players: HashMap::new(),
            ambient_counts: HashMap::new(),
            kind_volumes: [1.0; SoundKind::COUNT],
            default_position: Vector3::zeros(),
        }
    }

    /// Register a sound. Background kinds are forced positionless and
    /// given their player immediately.
    pub fn register(&mut self, sound: Sound) -> Result<()> {
        if sound.name.contains('*') {
            return Err(AudioError::ReservedName(sound.name));
        }
        let ambient_key = format!("{}{}", sound.name, AMBIENT_SUFFIX);
        if self.sounds.contains_key(&sound.name) || self.sounds.contains_key(&ambient_key) {
            return Err(AudioError::DuplicateSound(sound.name));
        }

        debug!(target: "audio", sound = %sound, "registering sound");
        match sound.kind {
            SoundKind::None | SoundKind::Background | SoundKind::ConditionalBackground => {
                let sound = sound.with_spatial_blend(0.0);
                let player = AudioPlayer::for_sound(&sound, self.default_position);
                self.players.insert(sound.name.clone(), player);
                self.sounds.insert(sound.name.clone(), sound);
            }
            SoundKind::Ambient => {
                self.ambient_counts.insert(ambient_key.clone(), 0);
                self.sounds.insert(ambient_key, sound);
            }
            SoundKind::ConditionalAmbient => {
                self.sounds.insert(sound.name.clone(), sound);
            }
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sounds.contains_key(name)
            || self
                .sounds
                .contains_key(&format!("{}{}", name, AMBIENT_SUFFIX))
    }

    /// Start a background-kind sound. Positional sounds need `play_at`.
    pub fn play(&mut self, name: &str, volume: f64) -> Result<()> {
        let sound = self
            .sounds
            .get(name)
            .ok_or_else(|| AudioError::UnknownSound(name.to_string()))?;
        if !sound.kind.is_background() {
            return Err(AudioError::KindMismatch {
                name: name.to_string(),
                kind: sound.kind,
            });
        }

        let scaled = volume * self.kind_volumes[sound.kind.index()];
        let looping = sound.kind.loops();
        let player = self
            .players
            .get_mut(name)
            .ok_or_else(|| AudioError::NoActivePlayer(name.to_string()))?;
        player.volume = scaled;
        player.looping = looping;
        player.play();
        Ok(())
    }

    /// Start an ambient-kind sound at a position. Returns the instance
    /// name, which is the handle for `stop`, `set_position` and
    /// `set_pitch`.
    pub fn play_at(&mut self, name: &str, position: Vector3<f64>, volume: f64) -> Result<String> {
        let key = if self.sounds.contains_key(name) {
            name.to_string()
        } else {
            let ambient_key = format!("{}{}", name, AMBIENT_SUFFIX);
            if self.sounds.contains_key(&ambient_key) {
                ambient_key
            } else {
                return Err(AudioError::UnknownSound(name.to_string()));
            }
        };

        let sound = &self.sounds[&key];
        if !sound.kind.is_ambient() {
            return Err(AudioError::KindMismatch {
                name: name.to_string(),
                kind: sound.kind,
            });
        }

        let scaled = volume * self.kind_volumes[sound.kind.index()];
        match sound.kind {
            SoundKind::Ambient => {
                let count = self
                    .ambient_counts
                    .entry(key.clone())
                    .and_modify(|count| *count += 1)
                    .or_insert(1);
                let instance = format!("{}{}", key, count);
                if self.players.contains_key(&instance) {
                    return Err(AudioError::PlayerExists(instance));
                }

                let mut player = AudioPlayer::for_sound(&self.sounds[&key], position);
                player.volume = scaled;
                player.play();
                debug!(target: "audio", instance = %instance, "playing ambient sound");
                self.players.insert(instance.clone(), player);
                Ok(instance)
            }
            // ConditionalAmbient: one-shot. The player is fired and not
            // retained, so it cannot be stopped or moved afterwards.
            _ => {
                let mut player = AudioPlayer::for_sound(sound, position);
                player.volume = scaled;
                player.play();
                debug!(target: "audio", sound = %key, "firing one-shot sound");
                Ok(key)
            }
        }
    }

    /// Stop playback, keeping the player for reuse
    pub fn stop(&mut self, name: &str) -> Result<()> {
        self.check_stoppable(name)?;
        self.players
            .get_mut(name)
            .ok_or_else(|| AudioError::NoActivePlayer(name.to_string()))?
            .stop();
        Ok(())
    }

    /// Stop playback and destroy the player. For ambient instances the
    /// per-sound counter resets only when no sibling instance is live,
    /// so live instance names are never reissued.
    pub fn stop_and_remove(&mut self, name: &str) -> Result<()> {
        self.check_stoppable(name)?;
        self.players
            .remove(name)
            .ok_or_else(|| AudioError::NoActivePlayer(name.to_string()))?;

        if name.contains('*') {
            let base = ambient_base_name(name);
            let siblings = self
                .players
                .keys()
                .filter(|key| key.contains('*') && ambient_base_name(key) == base)
                .count();
            if siblings == 0 {
                self.ambient_counts.insert(base.to_string(), 0);
            }
        }
        Ok(())
    }

    /// Move a positional player
    pub fn set_position(&mut self, name: &str, position: Vector3<f64>) -> Result<()> {
        let player = self
            .players
            .get_mut(name)
            .ok_or_else(|| AudioError::NoActivePlayer(name.to_string()))?;
        player.position = position;
        Ok(())
    }

    /// Change a player's pitch, e.g. to speed a track up
    pub fn set_pitch(&mut self, name: &str, pitch: f64) -> Result<()> {
        let player = self
            .players
            .get_mut(name)
            .ok_or_else(|| AudioError::NoActivePlayer(name.to_string()))?;
        player.pitch = pitch;
        Ok(())
    }

    /// Global volume multiplier applied to every sound of a kind
    pub fn set_kind_volume(&mut self, kind: SoundKind, multiplier: f64) {
        self.kind_volumes[kind.index()] = multiplier;
    }

    pub fn kind_volume(&self, kind: SoundKind) -> f64 {
        self.kind_volumes[kind.index()]
    }

    pub fn player(&self, name: &str) -> Option<&AudioPlayer> {
        self.players.get(name)
    }

    pub fn active_players(&self) -> usize {
        self.players.len()
    }

    /// Drop every sound and player, e.g. on scene unload
    pub fn clear(&mut self) {
        self.sounds.clear();
        self.players.clear();
        self.ambient_counts.clear();
    }

    fn check_stoppable(&self, name: &str) -> Result<()> {
        // Instance names carry the reserved '*', so they never appear in
        // the registry; only plain names are checked against it.
        let is_instance = name.contains('*');
        if !is_instance && !self.sounds.contains_key(name) {
            return Err(AudioError::UnknownSound(name.to_string()));
        }
        Ok(())
    }
}

impl Default for SoundMixer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the instance counter off an ambient instance name
fn ambient_base_name(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_ascii_digit())
}
