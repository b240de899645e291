//! Side-scrolling runner game library crate.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(feature = "sdl")]
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod app;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg(feature = "sdl")]
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod platform;

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod systems;
pub mod texture;
