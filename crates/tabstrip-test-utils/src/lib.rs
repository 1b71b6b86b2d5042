//! Test utilities for the tabstrip crates.
//!
//! - [`MockMeasure`] - a [`HeaderMeasure`](tabstrip::HeaderMeasure) with fixed
//!   label sizes that records every measurement
//! - [`fixtures`] - panes pre-filled with uniform tabs
//!
//! # Example
//!
//! ```rust
//! use tabstrip_test_utils::fixtures::{PaneFixture, tab_ids};
//!
//! let pane = PaneFixture::new(5).width(300.0).build();
//! assert_eq!(pane.tabs().len(), 5);
//! assert!(pane.is_overflowed());
//! assert_eq!(tab_ids(5)[0], "t0".into());
//! ```

pub mod fixtures;
pub mod measure;

pub use fixtures::*;
pub use measure::*;
