//! Core state machinery for the dituria catalog browser.
//!
//! Everything here is UI-toolkit-agnostic: the per-screen load
//! lifecycle, payload-shape normalization, the pure video filter, the
//! subject-category enumeration, the navigation stack with its
//! write-only title bridge, and app configuration.

pub mod config;
pub mod error;
pub mod filter;
pub mod hierarchy;
pub mod loadstate;
pub mod nav;
pub mod subjects;
