//! The player character, items, input decoding and persistence.

#![allow(unused_imports)]

pub mod combatant;
pub mod input;
pub mod items;
pub mod player;
pub mod save;

pub use combatant::*;
pub use input::*;
pub use items::*;
pub use player::*;
pub use save::*;
