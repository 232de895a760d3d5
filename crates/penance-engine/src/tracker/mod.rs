//! Minigame domain logic built on top of the core field interface.
//!
//! - [`fields`] - the coordinate contract: every UI field the tracker reads
//! - [`Role`] - the four-role catalog with the call vocabulary tables
//! - [`Wave`] - per-wave counters, point accumulation, and summary rendering
//! - [`WaveTimer`] - elapsed time within a wave, drives the call rotation

pub use self::{role::*, timer::*, wave::*};

pub mod fields;
mod role;
mod timer;
mod wave;
