//! Core rules, state and session orchestration.

#![allow(unused_imports)]

pub mod combat_math;
pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod progression;
pub mod session;

pub use config::GameConfig;
pub use constants::*;
pub use error::GameError;
pub use game_state::*;
pub use progression::*;
pub use session::*;
