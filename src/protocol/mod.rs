//! Wire protocol: typed commands, replies, and the line codec.

pub mod codec;
pub mod command;
pub mod error;

pub use codec::{decode_command, decode_response, encode};
pub use command::{Command, Response, Verb};
pub use error::ProtocolError;
