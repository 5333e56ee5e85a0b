//! Networking: wire protocol, relay link and matchmaking deadline

pub mod link;
pub mod protocol;
pub mod timer;

pub use link::{NetEvent, NetLink};
pub use protocol::{Command, Frame, FrameReader, ProtocolError, FRAME_LEN};
pub use timer::MatchTimer;
