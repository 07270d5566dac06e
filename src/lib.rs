//! camscope library crate.
//!
//! Exposes the internal components for integration testing.

pub mod app;
pub mod config;
pub mod display;
pub mod input;
pub mod overlay;
pub mod pipeline;
pub mod vision;
