use thiserror::Error;

use super::StateId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsmError {
    #[error("state {0} is already registered")]
    DuplicateState(StateId),

    #[error("state {0} is not registered")]
    UnknownState(StateId),

    #[error("no idle state has been designated")]
    NoIdleState,

    #[error("the idle state cannot be removed")]
    IdleStateRemoval,

    #[error("the current state cannot be removed")]
    CurrentStateRemoval,
}

pub type Result<T> = std::result::Result<T, FsmError>;
