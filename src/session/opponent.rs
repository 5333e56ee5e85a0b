//! The side of the board the local human does not control
//!
//! A session drives its opponent through two calls: `deliver_move` tells it
//! about each local move, `propose_next_move` asks for its reply when it
//! owns the turn. The heuristic answers synchronously; a remote peer answers
//! whenever its frame arrives.

use std::collections::VecDeque;
use std::io;

use crossbeam_channel::Receiver;
use tracing::{debug, warn};

use crate::board::{Board, Pos, Stone};
use crate::eval::Evaluator;
use crate::net::{Command, Frame, NetEvent, NetLink};

/// Out-of-band happenings reported by an opponent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpponentEvent {
    /// The relay declared the game over; `won` is from the local side's view
    GameEnd { won: bool },
    /// The relay reported that the peer left
    PeerDisconnected,
    /// Our own transport closed
    ConnectionLost,
    /// Framing failed and the transport was closed
    ProtocolError(String),
}

pub trait Opponent {
    /// Color this opponent plays
    fn color(&self) -> Stone;

    /// The opponent's next move, or `None` if it has none yet
    fn propose_next_move(&mut self, board: &Board, evaluator: &Evaluator) -> Option<Pos>;

    /// Inform the opponent of a move played by the local side
    fn deliver_move(&mut self, pos: Pos) -> io::Result<()>;

    /// Collect pending events. Called once per main-loop tick.
    fn poll(&mut self) -> Vec<OpponentEvent> {
        Vec::new()
    }

    /// True if moves come from another process
    fn is_remote(&self) -> bool {
        false
    }
}

/// The single-ply line heuristic
#[derive(Debug, Clone, Copy)]
pub struct LocalHeuristicOpponent {
    color: Stone,
}

impl LocalHeuristicOpponent {
    pub fn new(color: Stone) -> Self {
        Self { color }
    }
}

impl Opponent for LocalHeuristicOpponent {
    fn color(&self) -> Stone {
        self.color
    }

    fn propose_next_move(&mut self, board: &Board, evaluator: &Evaluator) -> Option<Pos> {
        evaluator.select_move(&board.snapshot(), self.color)
    }

    fn deliver_move(&mut self, _pos: Pos) -> io::Result<()> {
        Ok(())
    }
}

/// A peer reached through the relay
pub struct RemoteOpponent {
    color: Stone,
    player_id: u16,
    link: NetLink,
    events: Receiver<NetEvent>,
    inbox: VecDeque<Pos>,
}

impl RemoteOpponent {
    pub fn new(color: Stone, player_id: u16, link: NetLink, events: Receiver<NetEvent>) -> Self {
        Self {
            color,
            player_id,
            link,
            events,
            inbox: VecDeque::new(),
        }
    }

    /// Moves received but not yet applied
    pub fn pending_moves(&self) -> usize {
        self.inbox.len()
    }
}

impl Opponent for RemoteOpponent {
    fn color(&self) -> Stone {
        self.color
    }

    fn propose_next_move(&mut self, _board: &Board, _evaluator: &Evaluator) -> Option<Pos> {
        self.inbox.pop_front()
    }

    fn deliver_move(&mut self, pos: Pos) -> io::Result<()> {
        self.link.send_frame(Frame::make_move(self.player_id, pos.x, pos.y))
    }

    fn poll(&mut self) -> Vec<OpponentEvent> {
        let mut out = Vec::new();
        for event in self.events.try_iter() {
            match event {
                NetEvent::Frame(frame) => match frame.command {
                    Command::MakeMove => self.inbox.push_back(Pos::new(frame.x, frame.y)),
                    Command::GameEnd => out.push(OpponentEvent::GameEnd { won: frame.x == 1 }),
                    Command::Disconnect => out.push(OpponentEvent::PeerDisconnected),
                    other => debug!(?other, "ignoring frame during play"),
                },
                NetEvent::Closed => out.push(OpponentEvent::ConnectionLost),
                NetEvent::ProtocolError(msg) => out.push(OpponentEvent::ProtocolError(msg)),
                NetEvent::MatchTimeout => warn!("match timeout after the match started"),
            }
        }
        out
    }

    fn is_remote(&self) -> bool {
        true
    }
}
