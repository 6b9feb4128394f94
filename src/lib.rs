//! Wayfarer - a turn-based text adventure.
//!
//! The library holds the whole game: combat, progression, items,
//! exploration and JSON saves. The binary only reads lines and prints
//! events.

pub mod character;
pub mod combat;
pub mod core;
pub mod utils;
pub mod world;

pub use crate::character::{Player, SaveStore};
pub use crate::core::{GameConfig, GameError, Session, SessionEvent, Step};
