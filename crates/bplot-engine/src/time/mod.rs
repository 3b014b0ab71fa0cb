//! Frame timing.
//!
//! - [`FrameClock`]: clamped variable delta time, ticked once per presented frame
//! - [`FixedStep`]: accumulator turning variable frame time into constant ticks

mod fixed_step;
mod frame_clock;

pub use fixed_step::FixedStep;
pub use frame_clock::{FrameClock, FrameTime};
