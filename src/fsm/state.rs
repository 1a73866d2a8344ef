use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a state within one machine
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct StateId(pub u32);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity and transition data shared by every state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateMeta {
    pub id: StateId,
    pub name: String,

    /// Ids this state may transition to
    pub allowed_transitions: Vec<StateId>,

    /// When several transition candidates qualify, the highest priority
    /// wins
    pub priority: i32,
}

impl StateMeta {
    pub fn new(
        id: StateId,
        name: impl Into<String>,
        allowed_transitions: Vec<StateId>,
        priority: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            allowed_transitions,
            priority,
        }
    }
}

/// One behavior state, evaluated against a caller-owned context `C`.
///
/// Only `meta` and `condition` carry required behavior; the lifecycle
/// hooks default to no-ops.
pub trait State<C> {
    fn meta(&self) -> &StateMeta;

    /// Whether this state wants to be (or remain) the current state
    fn condition(&self, ctx: &C) -> bool {
        let _ = ctx;
        false
    }

    /// Runs once when the state becomes current
    fn on_enter(&mut self, ctx: &mut C) {
        let _ = ctx;
    }

    /// Runs once when the state stops being current
    fn on_leave(&mut self, ctx: &mut C) {
        let _ = ctx;
    }

    /// Per-frame housekeeping while current
    fn update(&mut self, ctx: &mut C) {
        let _ = ctx;
    }

    /// The state's per-physics-tick action while current
    fn fixed_update(&mut self, ctx: &mut C) {
        let _ = ctx;
    }
}
