//! Common types and logic for the instrument cluster.
//!
//! This crate contains platform-agnostic code shared between the simulator
//! and the target hardware build:
//!
//! - [`colors`]: RGB565 color constants for the display
//! - [`config`]: Layout constants and runtime thresholds
//! - [`styles`]: Pre-computed text styles
//! - [`geometry`]: Precomputed polar point tables for the dial faces
//! - [`button`]: Per-channel edge detection with debounce
//! - [`gesture`]: Double-click and long-press detectors, demo-mode latch
//! - [`gear`]: Sequential gearbox state machine
//! - [`animate`]: Needle filters, gear-dot spring, demo jitter
//! - [`remote`]: Wireless RPM mailbox and frame decoding
//! - [`banner`]: Segmented scrolling text strip
//! - [`outputs`]: Turn signals, horn and lamp output contract
//! - [`cluster`]: The whole cluster state and its per-tick update
//! - [`render`]: Frame composition onto any RGB565 draw target
//! - [`widgets`]: The individual drawing routines
//! - [`profiling`]: Debug log buffer (no time dependencies)
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! It avoids any dependencies on `std::time` or platform-specific types.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animate;
pub mod banner;
pub mod button;
pub mod cluster;
pub mod colors;
pub mod config;
pub mod gear;
pub mod gesture;
pub mod geometry;
pub mod outputs;
pub mod profiling;
pub mod remote;
pub mod render;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use cluster::ClusterState;
pub use colors::*;
pub use config::*;
pub use remote::RpmMailbox;
