use super::{State, StateMeta};

type Condition<C> = Box<dyn Fn(&C) -> bool>;
type Hook<C> = Box<dyn FnMut(&mut C)>;

/// A state assembled from injected closures, so a controller can define
/// behavior without writing a `State` type per state. Only the condition
/// is required; every other hook is optional.
pub struct DelegateState<C> {
    meta: StateMeta,
    condition: Condition<C>,
    action: Option<Hook<C>>,
    enter: Option<Hook<C>>,
    leave: Option<Hook<C>>,
    update: Option<Hook<C>>,
}

impl<C> DelegateState<C> {
    pub fn new(meta: StateMeta, condition: impl Fn(&C) -> bool + 'static) -> Self {
        Self {
            meta,
            condition: Box::new(condition),
            action: None,
            enter: None,
            leave: None,
            update: None,
        }
    }

    /// Per-physics-tick action
    pub fn with_action(mut self, action: impl FnMut(&mut C) + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn with_enter(mut self, enter: impl FnMut(&mut C) + 'static) -> Self {
        self.enter = Some(Box::new(enter));
        self
    }

    pub fn with_leave(mut self, leave: impl FnMut(&mut C) + 'static) -> Self {
        self.leave = Some(Box::new(leave));
        self
    }

    pub fn with_update(mut self, update: impl FnMut(&mut C) + 'static) -> Self {
        self.update = Some(Box::new(update));
        self
    }
}

impl<C> State<C> for DelegateState<C> {
    fn meta(&self) -> &StateMeta {
        &self.meta
    }

    fn condition(&self, ctx: &C) -> bool {
        (self.condition)(ctx)
    }

    fn on_enter(&mut self, ctx: &mut C) {
        if let Some(enter) = self.enter.as_mut() {
            enter(ctx);
        }
    }

    fn on_leave(&mut self, ctx: &mut C) {
        if let Some(leave) = self.leave.as_mut() {
            leave(ctx);
        }
    }

    fn update(&mut self, ctx: &mut C) {
        if let Some(update) = self.update.as_mut() {
            update(ctx);
        }
    }

    fn fixed_update(&mut self, ctx: &mut C) {
        if let Some(action) = self.action.as_mut() {
            action(ctx);
        }
    }
}
