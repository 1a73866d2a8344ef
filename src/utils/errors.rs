use std::io;
use thiserror::Error;

use crate::audio::AudioError;
use crate::components::aircraft::ConfigError;
use crate::fsm::FsmError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("State machine error: {0}")]
    Fsm(#[from] FsmError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
