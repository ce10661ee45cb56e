//! Track catalog: the static list of tracks the player can load.
//!
//! The catalog is either the built-in mock list or a TOML file named by the
//! `[catalog] path` setting. Tracks are immutable once loaded and are looked
//! up by id or iterated in file order.

mod builtin;
mod load;
mod model;

pub use model::*;

#[cfg(test)]
mod tests;
