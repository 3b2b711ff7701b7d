//! Timing utilities.

mod tick_schedule;

pub use tick_schedule::TickSchedule;
