//! Chatline is a line-oriented terminal client for a newline-delimited TCP
//! chat protocol.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`protocol`] defines the typed commands and the `VERB:arg1:arg2` wire
//!   codec.
//! - [`transport`] owns the TCP byte stream, line framing, and the
//!   one-request-at-a-time [`transport::Connection`].
//! - [`core`] holds configuration, the session state, and the
//!   [`core::controller::SessionController`] state machine.
//! - [`modes`] implements the per-mode input loops (global, private, group,
//!   notifications, profile, help).
//! - [`ui`] provides the console abstraction and the main menu.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod cli;
pub mod core;
pub mod modes;
pub mod protocol;
pub mod transport;
pub mod ui;
pub mod utils;
