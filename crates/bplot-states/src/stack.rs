use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use bplot_engine::input::InputEvent;
use bplot_engine::overlay::Overlay;
use bplot_engine::scene::Canvas;

use crate::{State, StateCtx};

type Factory<I> = Box<dyn Fn() -> Box<dyn State<I>>>;

/// A queued stack mutation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Change<I> {
    Push(I),
    Pop,
    Clear,
}

/// Ordered collection of active states, bottom (index 0) to top.
///
/// `push`, `pop` and `clear` only enqueue; the queue is drained in issue order
/// by [`apply_changes`](Self::apply_changes). Misuse (pushing an identifier
/// with no registered factory, popping or querying an empty stack) is a bug
/// in the caller and panics.
pub struct StateStack<I> {
    states: Vec<(I, Box<dyn State<I>>)>,
    pending: VecDeque<Change<I>>,
    factories: HashMap<I, Factory<I>>,
}

impl<I> Default for StateStack<I> {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            pending: VecDeque::new(),
            factories: HashMap::new(),
        }
    }
}

impl<I> fmt::Debug for StateStack<I>
where
    I: Copy + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStack")
            .field("states", &self.states.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .field("pending", &self.pending)
            .field("registered", &self.factories.len())
            .finish()
    }
}

impl<I> StateStack<I>
where
    I: Copy + Eq + Hash + fmt::Debug + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    // ── registry ──────────────────────────────────────────────────────────

    /// Registers the constructor used when `id` is pushed.
    ///
    /// Constructor arguments are moved into the closure. Registering the same
    /// identifier again replaces the previous factory.
    pub fn save_state<F, S>(&mut self, id: I, factory: F)
    where
        F: Fn() -> S + 'static,
        S: State<I> + 'static,
    {
        let replaced = self
            .factories
            .insert(id, Box::new(move || Box::new(factory()) as Box<dyn State<I>>))
            .is_some();
        log::trace!("registered state {id:?}{}", if replaced { " (replaced)" } else { "" });
    }

    /// Registers a state type built with [`Default`].
    pub fn save_default_state<S>(&mut self, id: I)
    where
        S: State<I> + Default + 'static,
    {
        self.save_state(id, S::default);
    }

    pub fn is_registered(&self, id: I) -> bool {
        self.factories.contains_key(&id)
    }

    // ── queued transitions ────────────────────────────────────────────────

    pub fn push(&mut self, id: I) {
        self.pending.push_back(Change::Push(id));
    }

    pub fn pop(&mut self) {
        self.pending.push_back(Change::Pop);
    }

    pub fn clear(&mut self) {
        self.pending.push_back(Change::Clear);
    }

    /// Drops every state and every queued change right now.
    pub fn force_instant_clear(&mut self) {
        if !self.states.is_empty() || !self.pending.is_empty() {
            log::debug!(
                "force clear: dropping {} state(s), {} pending change(s)",
                self.states.len(),
                self.pending.len()
            );
        }
        // Top first, matching the order a sequence of pops would use.
        while self.states.pop().is_some() {}
        self.pending.clear();
    }

    /// Applies queued changes in the order they were issued.
    ///
    /// # Panics
    ///
    /// On a push of an unregistered identifier or a pop of an empty stack.
    pub fn apply_changes(&mut self) {
        while let Some(change) = self.pending.pop_front() {
            match change {
                Change::Push(id) => {
                    let factory = self
                        .factories
                        .get(&id)
                        .unwrap_or_else(|| panic!("push of unregistered state {id:?}"));
                    self.states.push((id, factory()));
                    log::debug!("pushed {id:?}, depth {}", self.states.len());
                }
                Change::Pop => {
                    let (id, _) = self.states.pop().unwrap_or_else(|| panic!("pop on an empty state stack"));
                    log::debug!("popped {id:?}, depth {}", self.states.len());
                }
                Change::Clear => {
                    log::debug!("cleared {} state(s)", self.states.len());
                    while self.states.pop().is_some() {}
                }
            }
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Identifier of the top state.
    ///
    /// # Panics
    ///
    /// When the stack is empty.
    pub fn top(&self) -> I {
        match self.states.last() {
            Some((id, _)) => *id,
            None => panic!("top() on an empty state stack"),
        }
    }

    /// Identifiers bottom to top.
    pub fn ids(&self) -> Vec<I> {
        self.states.iter().map(|(id, _)| *id).collect()
    }

    pub fn pending_changes(&self) -> usize {
        self.pending.len()
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    pub fn update(&mut self, dt: f32) {
        self.dispatch(|state, ctx| state.update(ctx, dt));
    }

    pub fn fixed_update(&mut self, dt: f32) {
        self.dispatch(|state, ctx| state.fixed_update(ctx, dt));
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        self.dispatch(|state, ctx| state.handle_event(ctx, event));
    }

    pub fn update_overlay(&mut self, ui: &mut Overlay<'_>, dt: f32) {
        self.dispatch(|state, ctx| state.update_overlay(ctx, ui, dt));
    }

    /// Draws the visible states bottom to top.
    ///
    /// Visibility is found top-down: the walk includes each state and stops
    /// after the first one that [obscures](State::obscures_below) the rest.
    pub fn draw(&self, canvas: &mut Canvas<'_>) {
        let mut first_visible = 0;
        for (index, (_, state)) in self.states.iter().enumerate().rev() {
            if state.obscures_below() {
                first_visible = index;
                break;
            }
        }

        for (_, state) in &self.states[first_visible..] {
            state.draw(canvas);
        }
    }

    /// Calls `pass` on each state from the top down until one returns `false`.
    fn dispatch<F>(&mut self, mut pass: F)
    where
        F: FnMut(&mut dyn State<I>, &mut StateCtx<'_, I>) -> bool,
    {
        let Some(top) = self.states.last().map(|(id, _)| *id) else {
            return;
        };
        let mut ctx = StateCtx::new(&mut self.pending, top);

        for (_, state) in self.states.iter_mut().rev() {
            if !pass(state.as_mut(), &mut ctx) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Blank;
    impl State<u8> for Blank {}

    #[test]
    fn requests_are_deferred_until_apply() {
        let mut stack = StateStack::<u8>::new();
        stack.save_default_state::<Blank>(1);

        stack.push(1);
        assert!(stack.empty());
        assert_eq!(stack.pending_changes(), 1);

        stack.apply_changes();
        assert_eq!(stack.ids(), [1]);
        assert_eq!(stack.pending_changes(), 0);
    }

    #[test]
    fn clear_in_queue_drops_states_pushed_before_it() {
        let mut stack = StateStack::<u8>::new();
        stack.save_default_state::<Blank>(1);
        stack.save_default_state::<Blank>(2);

        stack.push(1);
        stack.push(2);
        stack.clear();
        stack.push(2);
        stack.apply_changes();

        assert_eq!(stack.ids(), [2]);
    }

    #[test]
    fn dispatch_on_empty_stack_is_a_no_op() {
        let mut stack = StateStack::<u8>::new();
        stack.update(0.016);
        stack.fixed_update(0.016);
        assert_eq!(stack.pending_changes(), 0);
    }

    #[test]
    fn debug_lists_ids_bottom_to_top() {
        let mut stack = StateStack::<u8>::new();
        stack.save_default_state::<Blank>(7);
        stack.save_default_state::<Blank>(9);
        stack.push(7);
        stack.push(9);
        stack.apply_changes();

        let text = format!("{stack:?}");
        assert!(text.contains("[7, 9]"), "{text}");
    }
}
