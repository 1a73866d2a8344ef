mod error;
mod mixer;
mod player;
mod sound;

pub use error::AudioError;
pub use mixer::{SoundMixer, AMBIENT_SUFFIX};
pub use player::AudioPlayer;
pub use sound::{Sound, SoundKind};
