//! Tabstrip Core
//!
//! Geometry, collection, logging and profiling utilities shared by the
//! tabstrip crates.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod platform;
pub mod profiling;
