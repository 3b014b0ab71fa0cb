use std::collections::VecDeque;
use std::fmt::Debug;

use crate::Change;

/// Handle a state uses to talk to the stack that owns it.
///
/// Requests are queued and take effect at the next
/// [`StateStack::apply_changes`](crate::StateStack::apply_changes); the stack
/// a state sees is unchanged for the rest of the current pass.
pub struct StateCtx<'a, I> {
    changes: &'a mut VecDeque<Change<I>>,
    top: I,
}

impl<'a, I: Copy + Debug> StateCtx<'a, I> {
    pub(crate) fn new(changes: &'a mut VecDeque<Change<I>>, top: I) -> Self {
        Self { changes, top }
    }

    pub fn request_push(&mut self, id: I) {
        log::trace!("state requested push {id:?}");
        self.changes.push_back(Change::Push(id));
    }

    pub fn request_pop(&mut self) {
        log::trace!("state requested pop");
        self.changes.push_back(Change::Pop);
    }

    pub fn request_clear(&mut self) {
        log::trace!("state requested clear");
        self.changes.push_back(Change::Clear);
    }

    /// Identifier on top of the stack when the current pass started.
    pub fn request_state_on_top(&self) -> I {
        self.top
    }
}
