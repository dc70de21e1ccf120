//! Library exports for embedding the overscribe engine.
//!
//! Exposes the stroke engine, command dispatcher and overlay visibility
//! controller so that platform shells (window container, status-bar menu,
//! global hotkey registration) can feed events in and render the annotation
//! layer out, alongside the configuration structures they share with the
//! CLI binary.

pub mod config;
pub mod draw;
pub mod input;
pub mod overlay;
pub mod util;

pub use config::Config;
