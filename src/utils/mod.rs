//! Utility modules: build info, logging, JSON persistence.

#![allow(unused_imports)]

pub mod build_info;
pub mod logging;
pub mod persistence;

pub use build_info::*;
pub use logging::*;
