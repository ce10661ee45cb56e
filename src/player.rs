//! Playback and queue controller.
//!
//! `Controller` owns the `PlaybackState` and is its only mutator. The UI gets
//! read-only access through `Controller::state`, and the runtime drives the
//! simulated clock through a `Scheduler` that follows the controller's
//! `Clock` generation.

mod clock;
mod controller;
mod duration;
mod error;
mod state;
mod ticker;

pub use controller::Controller;
pub use state::PlaybackState;
pub use ticker::{Scheduler, Tick};
