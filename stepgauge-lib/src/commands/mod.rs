//! Command-line interface for stepgauge
//!
//! This module implements the CLI commands and wires the progress model, the surfaces and
//! the demo driver together.
//!
//! # Commands
//!
//! - **demo**: Build a display, a connector bound to it, and a demo driver; then apply
//!   actions (`next`, `prev`, `reset`, `show`, `hide`, `quit`) read from stdin or from
//!   `--script`
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and value ranges
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. All output goes through a [`Host`] so that commands can be
//! exercised against in-memory buffers.
//!
//! The `common` module provides shared functionality like logging setup and color mode
//! handling. Configuration is a TOML file (`gauge.toml`) whose every field is optional.

mod common;
mod config;
mod demo;
mod host;
mod init;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use common::{ColorMode, LogLevel, SurfaceKind};
pub use demo::{DemoArgs, run_demo};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
