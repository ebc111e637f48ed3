//! Protocol module containing the control-channel message types and the
//! pairing handshake parser.

pub mod handshake;
pub mod messages;

pub use handshake::{parse_handshake_token, HandshakeError};
pub use messages::*;
