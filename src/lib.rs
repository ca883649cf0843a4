//! Time-of-day value for the danibot controller, plus the pieces the clock
//! firmware builds on top of it.
#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod display;
mod font;
pub mod time;

pub use time::Time;
