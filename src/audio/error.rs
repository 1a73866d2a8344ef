use thiserror::Error;

use super::SoundKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    #[error("sound is already registered: {0}")]
    DuplicateSound(String),

    #[error("sound names may not contain '*': {0}")]
    ReservedName(String),

    #[error("no such sound: {0}")]
    UnknownSound(String),

    #[error("sound {name} of kind {kind:?} is not supported by this play method")]
    KindMismatch { name: String, kind: SoundKind },

    #[error("a player already exists for: {0}")]
    PlayerExists(String),

    #[error("no active player for: {0}")]
    NoActivePlayer(String),
}

pub type Result<T> = std::result::Result<T, AudioError>;
