//! TCP link to the relay server
//!
//! The link owns the write half and a background receive loop. The loop
//! never touches game state: it only decodes frames and forwards them as
//! [`NetEvent`]s over a channel drained by the session.

use std::io::{self, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Sender;
use tracing::{debug, info, warn};

use super::protocol::{Frame, FrameReader, ProtocolError};

/// Messages delivered to the session's event queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetEvent {
    /// A complete frame from the server
    Frame(Frame),
    /// The server closed the stream on a frame boundary
    Closed,
    /// Framing failed; the stream has been shut down
    ProtocolError(String),
    /// The matchmaking deadline passed without a match
    MatchTimeout,
}

/// Connected stream plus its receive loop
pub struct NetLink {
    stream: TcpStream,
    peer: SocketAddr,
    reader: Option<JoinHandle<()>>,
}

impl NetLink {
    /// Connect to `addr`, announce ourselves with `ReportId` and start the
    /// receive loop feeding `events`.
    ///
    /// Fails synchronously if no resolved address accepts the connection.
    pub fn connect(addr: &str, timeout: Duration, events: Sender<NetEvent>) -> io::Result<Self> {
        let mut last_err = None;
        let mut connected = None;
        for candidate in addr.to_socket_addrs()? {
            match TcpStream::connect_timeout(&candidate, timeout) {
                Ok(stream) => {
                    connected = Some((stream, candidate));
                    break;
                }
                Err(e) => last_err = Some(e),
            }
        }
        let (stream, peer) = connected.ok_or_else(|| {
            last_err.unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{addr} did not resolve")))
        })?;
        stream.set_nodelay(true)?;
        info!(%peer, "connected to relay");

        let reader_stream = stream.try_clone()?;
        let reader = thread::Builder::new()
            .name("gomoku-recv".into())
            .spawn(move || receive_loop(reader_stream, events))?;

        let mut link = Self {
            stream,
            peer,
            reader: Some(reader),
        };
        link.send_frame(Frame::report_id())?;
        Ok(link)
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Write one frame. Best-effort: no write timeout is applied.
    pub fn send_frame(&mut self, frame: Frame) -> io::Result<()> {
        debug!(?frame, "send");
        self.stream.write_all(&frame.encode())
    }

    /// Close both directions; the receive loop exits on its next read
    pub fn close(&mut self) {
        let _ = self.stream.shutdown(Shutdown::Both);
        if let Some(handle) = self.reader.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for NetLink {
    fn drop(&mut self) {
        self.close();
    }
}

fn receive_loop(stream: TcpStream, events: Sender<NetEvent>) {
    let mut reader = FrameReader::new(stream);
    loop {
        let event = match reader.read_frame() {
            Ok(Some(frame)) => {
                debug!(?frame, "recv");
                NetEvent::Frame(frame)
            }
            Ok(None) => {
                info!("relay closed the connection");
                let _ = events.send(NetEvent::Closed);
                break;
            }
            Err(ProtocolError::Io(e)) if is_local_shutdown(&e) => {
                debug!(error = %e, "receive loop stopped");
                let _ = events.send(NetEvent::Closed);
                break;
            }
            Err(e) => {
                warn!(error = %e, "dropping connection");
                let _ = reader.get_ref().shutdown(Shutdown::Both);
                let _ = events.send(NetEvent::ProtocolError(e.to_string()));
                break;
            }
        };
        if events.send(event).is_err() {
            break;
        }
    }
}

fn is_local_shutdown(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionAborted | io::ErrorKind::ConnectionReset | io::ErrorKind::NotConnected
    )
}
