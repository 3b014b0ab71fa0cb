use bplot_states::State;

use super::StateId;

/// Marker state: the driver stops once this is on top of the stack.
#[derive(Debug, Default)]
pub struct ExitApplicationState;

impl State<StateId> for ExitApplicationState {}
