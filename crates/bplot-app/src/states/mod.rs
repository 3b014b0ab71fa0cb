//! Viewer states and their identifiers.

mod exit_application;
mod id;
mod main_app_open;

pub use exit_application::ExitApplicationState;
pub use id::StateId;
pub use main_app_open::MainAppOpen;

use bplot_states::StateStack;

/// Registers every viewer state with `stack`.
pub fn register_all(stack: &mut StateStack<StateId>) {
    stack.save_default_state::<ExitApplicationState>(StateId::ExitApplicationState);
    stack.save_default_state::<MainAppOpen>(StateId::MainAppOpen);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_id_is_registered() {
        let mut stack = StateStack::new();
        register_all(&mut stack);

        for id in StateId::ALL {
            let expected = id != StateId::None;
            assert_eq!(stack.is_registered(id), expected, "{id}");
        }
    }
}
