//! # keybridge-cli
//!
//! Host-side driver for `keybridge-core`: reads key events and text from a
//! line protocol, runs them through [`keybridge_core::KeyboardInput`] and
//! prints every resulting HID action as JSON.
//!
//! - **`command`** – Parses one input line into a [`command::Command`].
//! - **`config`** – TOML configuration (character map, log level, output).
//! - **`output`** – [`output::JsonLineSink`], the printing transport.
//! - **`session`** – Glues the three together over a reader and a writer.

pub mod command;
pub mod config;
pub mod output;
pub mod session;
