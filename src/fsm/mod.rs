mod delegate;
mod error;
mod machine;
mod state;

pub use delegate::DelegateState;
pub use error::FsmError;
pub use machine::{MachineSnapshot, StateMachine};
pub use state::{State, StateId, StateMeta};
