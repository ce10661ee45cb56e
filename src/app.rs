//! Application module: the view state shared by the TUI and runtime.
//!
//! `App` (in `app::model`) pairs the catalog and the playback controller with
//! cursor/focus state, and applies `Command`s produced by the key map.

mod command;
mod model;

pub use command::Command;
pub use model::*;
