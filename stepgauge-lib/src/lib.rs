#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for stepgauge
//!
//! This library holds all functionality for the stepgauge tool: a step-progress panel fed
//! through a signal connector, and a demo that drives it from the terminal.
//!
//! # Module Organization
//!
//! - [`progress`]: Step counter, display, and the initialize/progress signal relay
//! - [`surfaces`]: Terminal renderings of a display (indicatif bar, plain text)
//! - [`demo`]: Next/Prev/Reset step driver
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod demo;
pub mod progress;
pub mod surfaces;

pub use crate::commands::{Host, run};
