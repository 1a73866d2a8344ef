use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{FsmError, Result};
use super::{State, StateId};

/// A cooperative, single-threaded state machine.
///
/// Each frame, `update` evaluates the current state's condition and
/// scans only its allowed transitions. A candidate qualifies when its
/// own condition holds and either the current state's condition has
/// lapsed or the candidate outranks it in priority. When the current
/// state's condition lapses and nothing qualifies, the machine falls
/// back to the idle state.
///
/// A recently-changed guard suppresses a second transition until
/// `perform_action` has run, so every state performs at least one action
/// before being re-evaluated.
pub struct StateMachine<C> {
    states: HashMap<StateId, Box<dyn State<C>>>,
    idle: Option<StateId>,
    current: Option<StateId>,
    transition_lock: bool,
    recently_changed: bool,
    tick: u64,
    entered_at: u64,
}

/// Serializable view of a machine's bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub current: Option<StateId>,
    pub current_name: Option<String>,
    pub idle: Option<StateId>,
    pub tick: u64,
    pub entered_at: u64,
    pub transition_lock: bool,
}

impl<C> StateMachine<C> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            idle: None,
            current: None,
            transition_lock: false,
            recently_changed: false,
            tick: 0,
            entered_at: 0,
        }
    }

    /// Register a state. Ids must be unique within the machine.
    pub fn add_state<S: State<C> + 'static>(&mut self, state: S) -> Result<StateId> {
        let id = state.meta().id;
        if self.states.contains_key(&id) {
            return Err(FsmError::DuplicateState(id));
        }
        self.states.insert(id, Box::new(state));
        Ok(id)
    }

    /// Register a state, designate it as the idle fallback, and enter it
    pub fn set_idle_state<S: State<C> + 'static>(
        &mut self,
        state: S,
        ctx: &mut C,
    ) -> Result<StateId> {
        let id = self.add_state(state)?;
        self.idle = Some(id);
        self.current = Some(id);
        self.entered_at = self.tick;
        self.state_mut(id)?.on_enter(ctx);
        debug!(target: "fsm", state = %id, "entered idle state");
        Ok(id)
    }

    /// Unregister a state. The idle and current states cannot be removed.
    pub fn remove_state(&mut self, id: StateId) -> Result<()> {
        if self.idle == Some(id) {
            return Err(FsmError::IdleStateRemoval);
        }
        if self.current == Some(id) {
            return Err(FsmError::CurrentStateRemoval);
        }
        self.states
            .remove(&id)
            .map(|_| ())
            .ok_or(FsmError::UnknownState(id))
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.states.contains_key(&id)
    }

    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    pub fn current_name(&self) -> Option<&str> {
        let id = self.current?;
        self.states.get(&id).map(|state| state.meta().name.as_str())
    }

    /// Freeze or unfreeze transitions from outside
    pub fn lock_transitions(&mut self, locked: bool) {
        self.transition_lock = locked;
    }

    pub fn transitions_locked(&self) -> bool {
        self.transition_lock
    }

    /// Fixed ticks elapsed since the current state was entered
    pub fn time_in_state(&self) -> u64 {
        self.tick - self.entered_at
    }

    /// Per-frame advance. Runs the current state's `update`, then
    /// resolves at most one transition. Returns the current state id.
    pub fn update(&mut self, ctx: &mut C) -> Result<StateId> {
        let current_id = self.current.ok_or(FsmError::NoIdleState)?;
        self.state_mut(current_id)?.update(ctx);

        if self.transition_lock || self.recently_changed {
            return Ok(current_id);
        }

        let current = self.state(current_id)?;
        let current_holds = current.condition(ctx);
        let current_priority = current.meta().priority;
        let allowed = current.meta().allowed_transitions.clone();

        let mut best: Option<(StateId, i32)> = None;
        for target_id in allowed {
            let target = match self.states.get(&target_id) {
                Some(target) => target,
                None => {
                    warn!(target: "fsm", state = %target_id, "transition target not registered, skipping");
                    continue;
                }
            };
            if !target.condition(ctx) {
                continue;
            }
            let priority = target.meta().priority;
            if current_holds && priority <= current_priority {
                continue;
            }
            if best.map_or(true, |(_, best_priority)| priority > best_priority) {
                best = Some((target_id, priority));
            }
        }

        if let Some((next, _)) = best {
            self.transition_to(next, ctx)?;
        } else if !current_holds {
            let idle = self.idle.ok_or(FsmError::NoIdleState)?;
            if idle != current_id {
                self.transition_to(idle, ctx)?;
            }
        }

        Ok(self.current.unwrap_or(current_id))
    }

    /// Physics-tick advance. Runs the current state's action and clears
    /// the recently-changed guard.
    pub fn perform_action(&mut self, ctx: &mut C) -> Result<()> {
        let current_id = self.current.ok_or(FsmError::NoIdleState)?;
        self.state_mut(current_id)?.fixed_update(ctx);
        self.recently_changed = false;
        self.tick += 1;
        Ok(())
    }

    /// Leave the current state and enter `next`, setting the
    /// recently-changed guard
    pub fn transition_to(&mut self, next: StateId, ctx: &mut C) -> Result<()> {
        if !self.states.contains_key(&next) {
            return Err(FsmError::UnknownState(next));
        }
        let current_id = self.current.ok_or(FsmError::NoIdleState)?;

        self.state_mut(current_id)?.on_leave(ctx);
        debug!(
            target: "fsm",
            from = %current_id,
            to = %next,
            "state transition"
        );
        self.current = Some(next);
        self.entered_at = self.tick;
        self.state_mut(next)?.on_enter(ctx);
        self.recently_changed = true;
        Ok(())
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            current: self.current,
            current_name: self.current_name().map(str::to_string),
            idle: self.idle,
            tick: self.tick,
            entered_at: self.entered_at,
            transition_lock: self.transition_lock,
        }
    }

    /// Snapshot serialized as JSON, for logging or persistence
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }

    fn state(&self, id: StateId) -> Result<&dyn State<C>> {
        self.states
            .get(&id)
            .map(|state| state.as_ref())
            .ok_or(FsmError::UnknownState(id))
    }

    fn state_mut(&mut self, id: StateId) -> Result<&mut (dyn State<C> + 'static)> {
        self.states
            .get_mut(&id)
            .map(|state| state.as_mut())
            .ok_or(FsmError::UnknownState(id))
    }
}

impl<C> Default for StateMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}
