//! Fixed-size binary frames exchanged with the relay server
//!
//! Every frame is 5 bytes, big-endian:
//!
//! ```text
//! [ command: u8 ][ player_id: u16 ][ x: u8 ][ y: u8 ]
//! ```

use std::io::{self, ErrorKind, Read};

/// Bytes per frame
pub const FRAME_LEN: usize = 5;

/// Frame command codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Client -> server once after connecting, player id 0
    ReportId = 1,
    /// Both directions: a stone placed at (x, y)
    MakeMove = 2,
    /// Server -> client: player id carries the assigned identifier
    AssignId = 3,
    /// Server -> client: x = own color, y = opponent color (1 first, 2 second)
    GameStart = 4,
    /// Server -> client: x = 1 means this client won
    GameEnd = 5,
    /// Server -> client: the peer's transport closed
    Disconnect = 6,
}

impl TryFrom<u8> for Command {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            1 => Command::ReportId,
            2 => Command::MakeMove,
            3 => Command::AssignId,
            4 => Command::GameStart,
            5 => Command::GameEnd,
            6 => Command::Disconnect,
            other => return Err(ProtocolError::UnknownCommand(other)),
        })
    }
}

/// Framing failures. Any of these ends the connection.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("unknown command byte {0:#04x}")]
    UnknownCommand(u8),

    #[error("stream closed after {0} of 5 frame bytes")]
    Truncated(usize),

    #[error("invalid color code {0} in game start frame")]
    InvalidColor(u8),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One decoded frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub command: Command,
    pub player_id: u16,
    pub x: u8,
    pub y: u8,
}

impl Frame {
    pub const fn new(command: Command, player_id: u16, x: u8, y: u8) -> Self {
        Self { command, player_id, x, y }
    }

    /// The frame a client sends right after connecting
    pub const fn report_id() -> Self {
        Self::new(Command::ReportId, 0, 0, 0)
    }

    pub const fn make_move(player_id: u16, x: u8, y: u8) -> Self {
        Self::new(Command::MakeMove, player_id, x, y)
    }

    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let [hi, lo] = self.player_id.to_be_bytes();
        [self.command as u8, hi, lo, self.x, self.y]
    }

    pub fn decode(bytes: &[u8; FRAME_LEN]) -> Result<Self, ProtocolError> {
        Ok(Self {
            command: Command::try_from(bytes[0])?,
            player_id: u16::from_be_bytes([bytes[1], bytes[2]]),
            x: bytes[3],
            y: bytes[4],
        })
    }
}

/// Reads whole frames from a byte stream.
///
/// Short reads are accumulated until a full frame is available.
pub struct FrameReader<R> {
    inner: R,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Next frame, or `Ok(None)` when the peer closed the stream cleanly
    /// on a frame boundary.
    pub fn read_frame(&mut self) -> Result<Option<Frame>, ProtocolError> {
        let mut buf = [0u8; FRAME_LEN];
        let mut filled = 0;

        while filled < FRAME_LEN {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => return Err(ProtocolError::Truncated(filled)),
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Frame::decode(&buf).map(Some)
    }
}
