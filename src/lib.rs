pub mod audio;
pub mod components;
pub mod fsm;
pub mod systems;
pub mod utils;
pub mod vehicles;

pub use audio::{Sound, SoundKind, SoundMixer};
pub use components::{AircraftConfig, AircraftType};
pub use fsm::{DelegateState, State, StateId, StateMachine, StateMeta};
pub use systems::{ControlInputs, InputShaper, RawInputs};
pub use utils::SimError;
pub use vehicles::{Aircraft, AircraftFactory};
