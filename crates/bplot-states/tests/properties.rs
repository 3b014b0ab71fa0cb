//! Property-based tests for stack dispatch and transition ordering.

use std::cell::RefCell;
use std::rc::Rc;

use bplot_states::{State, StateCtx, StateStack};
use proptest::prelude::*;

type Visits = Rc<RefCell<Vec<usize>>>;

struct Layer {
    index: usize,
    opaque: bool,
    visits: Visits,
}

impl State<usize> for Layer {
    fn update(&mut self, _ctx: &mut StateCtx<'_, usize>, _dt: f32) -> bool {
        self.visits.borrow_mut().push(self.index);
        !self.opaque
    }
}

/// `n` layers, bottom = 0; the layer at `opaque` (if any) blocks the pass.
fn build(n: usize, opaque: Option<usize>, visits: &Visits) -> StateStack<usize> {
    let mut stack = StateStack::new();
    for index in 0..n {
        let visits = Rc::clone(visits);
        stack.save_state(index, move || Layer {
            index,
            opaque: opaque == Some(index),
            visits: Rc::clone(&visits),
        });
        stack.push(index);
    }
    stack.apply_changes();
    stack
}

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
    Clear,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..4u8).prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => Just(Op::Clear),
    ]
}

#[derive(Default)]
struct Plain;
impl State<u8> for Plain {}

proptest! {
    #[test]
    fn all_transparent_visits_every_layer_top_down(n in 1usize..12) {
        let visits = Visits::default();
        let mut stack = build(n, None, &visits);

        stack.update(0.016);

        let expected: Vec<usize> = (0..n).rev().collect();
        prop_assert_eq!(visits.borrow().clone(), expected);
    }

    #[test]
    fn opaque_layer_is_the_last_visited(n in 1usize..12, depth in 0usize..12) {
        let depth = depth % n;
        let opaque = n - 1 - depth;
        let visits = Visits::default();
        let mut stack = build(n, Some(opaque), &visits);

        stack.update(0.016);

        let expected: Vec<usize> = (opaque..n).rev().collect();
        prop_assert_eq!(visits.borrow().clone(), expected);
    }

    #[test]
    fn applied_queue_matches_a_plain_vec_model(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut stack = StateStack::<u8>::new();
        for id in 0..4u8 {
            stack.save_default_state::<Plain>(id);
        }

        let mut model: Vec<u8> = Vec::new();
        for op in &ops {
            match op {
                Op::Push(id) => {
                    stack.push(*id);
                    model.push(*id);
                }
                // Popping an empty stack is a contract violation; skip it in the model too.
                Op::Pop if model.is_empty() => continue,
                Op::Pop => {
                    stack.pop();
                    model.pop();
                }
                Op::Clear => {
                    stack.clear();
                    model.clear();
                }
            }
        }

        prop_assert!(stack.pending_changes() <= ops.len());
        stack.apply_changes();
        prop_assert_eq!(stack.ids(), model);
        prop_assert_eq!(stack.pending_changes(), 0);
    }
}
