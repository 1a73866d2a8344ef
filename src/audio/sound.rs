use serde::{Deserialize, Serialize};
use std::fmt;

/// How a sound is played and who hears it.
///
/// Conditional kinds play once; the others loop. Background kinds are
/// positionless and audible everywhere; ambient kinds are positional and
/// attenuate with distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundKind {
    /// Background playback with no particular classification
    None,
    /// Constant positionless loop, e.g. background music
    Background,
    /// Looping positional source, e.g. a fire
    Ambient,
    /// One-shot positionless sound that changes often, e.g. footsteps
    ConditionalBackground,
    /// One-shot positional sound, e.g. an explosion
    ConditionalAmbient,
}

impl SoundKind {
    pub const COUNT: usize = 5;

    pub fn loops(self) -> bool {
        !matches!(
            self,
            SoundKind::ConditionalBackground | SoundKind::ConditionalAmbient
        )
    }

    pub fn is_background(self) -> bool {
        matches!(
            self,
            SoundKind::None | SoundKind::Background | SoundKind::ConditionalBackground
        )
    }

    pub fn is_ambient(self) -> bool {
        matches!(self, SoundKind::Ambient | SoundKind::ConditionalAmbient)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            SoundKind::None => 0,
            SoundKind::Background => 1,
            SoundKind::Ambient => 2,
            SoundKind::ConditionalBackground => 3,
            SoundKind::ConditionalAmbient => 4,
        }
    }
}

/// Registration record for one sound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sound {
    pub name: String,
    pub kind: SoundKind,

    /// Where the clip lives; opaque to the mixer
    pub location: String,

    /// 0 is fully 2D, 1 is fully positional
    pub spatial_blend: f64,

    /// Distance beyond which the sound is inaudible [m]
    pub max_audible_distance: f64,
}

impl Sound {
    pub fn new(name: impl Into<String>, kind: SoundKind, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            location: location.into(),
            spatial_blend: 1.0,
            max_audible_distance: 10.0,
        }
    }

    pub fn with_spatial_blend(mut self, spatial_blend: f64) -> Self {
        self.spatial_blend = spatial_blend;
        self
    }

    pub fn with_max_audible_distance(mut self, max_audible_distance: f64) -> Self {
        self.max_audible_distance = max_audible_distance;
        self
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?}, {})", self.name, self.kind, self.location)
    }
}
