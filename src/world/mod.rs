//! Locations, enemy catalog and random exploration.

#![allow(unused_imports)]

mod data;
mod explore;

pub use data::*;
pub use explore::{explore, Encounter, World};
