//! Session state machine
//!
//! A session owns one board and one evaluator for a single game and decides
//! who may move. All board and evaluator mutation happens here, on the
//! caller's thread; the network threads only feed the event channel.
//!
//! ```text
//! Idle ──start(Ai)──────────────────────────────▶ LocalAi ──win/draw──▶ GameOver
//! Idle ──start(Pvp)─────────────────────────────▶ LocalPvp ─win/draw──▶ GameOver
//! Idle ──start(Network)──▶ Connecting ──AssignId──▶ WaitingForMatch ──GameStart──▶ NetworkPlay
//!                            │  connect error ▶ LocalAi       │ deadline ▶ LocalAi
//! ```

use std::collections::VecDeque;
use std::fmt;

use crossbeam_channel::{unbounded, Receiver};
use tracing::{debug, info, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::{AppConfig, DisconnectPolicy, NetworkConfig, PlayMode};
use crate::error::MoveError;
use crate::eval::Evaluator;
use crate::net::{Command, Frame, MatchTimer, NetEvent, NetLink, ProtocolError};
use crate::rules::find_five_line_at_pos;

use super::opponent::{LocalHeuristicOpponent, Opponent, OpponentEvent, RemoteOpponent};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Connecting,
    WaitingForMatch,
    LocalAi,
    LocalPvp,
    NetworkPlay,
    GameOver,
}

/// Result of applying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Win(Stone),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    FiveInRow,
    BoardFull,
    /// Declared by the relay
    Remote,
    /// The peer left and the game was closed
    Abandoned,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for draws and abandoned games
    pub winner: Option<Stone>,
    pub reason: EndReason,
    pub winning_line: Option<[Pos; 5]>,
}

/// Why a networked game became a local one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    ConnectFailed(String),
    MatchTimeout,
    ConnectionLost,
    ProtocolError(String),
    PeerDisconnected,
}

/// Status updates for the frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Connecting { addr: String },
    WaitingForMatch { player_id: u16 },
    Matched { my_color: Stone },
    FellBack(FallbackReason),
    PeerMoved(Pos),
    PeerDisconnected,
    ProtocolError(String),
    /// A remote move could not be applied and was dropped
    RejectedPeerMove { pos: Pos, error: MoveError },
    GameOver(GameResult),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Connecting { addr } => write!(f, "Connecting to {addr}..."),
            Notice::WaitingForMatch { player_id } => {
                write!(f, "Connected (id {player_id}), waiting for an opponent...")
            }
            Notice::Matched { my_color } => write!(f, "Matched! You play {}", color_name(*my_color)),
            Notice::FellBack(reason) => match reason {
                FallbackReason::ConnectFailed(e) => write!(f, "Server unreachable ({e}), playing the computer"),
                FallbackReason::MatchTimeout => write!(f, "No opponent found, playing the computer"),
                FallbackReason::ConnectionLost => write!(f, "Connection lost, playing the computer"),
                FallbackReason::ProtocolError(e) => write!(f, "Protocol error ({e}), playing the computer"),
                FallbackReason::PeerDisconnected => write!(f, "Opponent left, the computer takes over"),
            },
            Notice::PeerMoved(pos) => write!(f, "Opponent played {pos}"),
            Notice::PeerDisconnected => write!(f, "Opponent disconnected"),
            Notice::ProtocolError(e) => write!(f, "Protocol error: {e}"),
            Notice::RejectedPeerMove { pos, error } => write!(f, "Ignored opponent move {pos}: {error}"),
            Notice::GameOver(result) => match (result.winner, result.reason) {
                (Some(winner), _) => write!(f, "{} wins!", color_name(winner)),
                (None, EndReason::Abandoned) => write!(f, "Game abandoned"),
                (None, _) => write!(f, "Draw!"),
            },
        }
    }
}

fn color_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "nobody",
    }
}

/// Connection state before a match is confirmed
struct Matchmaking {
    link: NetLink,
    events: Receiver<NetEvent>,
    timer: MatchTimer,
}

/// One game from start to game over
pub struct Session {
    network: NetworkConfig,
    ai_human_color: Stone,

    board: Board,
    evaluator: Evaluator,
    phase: Phase,
    turn_owner: Stone,
    /// Color the local human controls; `None` means both (hotseat)
    local_human: Option<Stone>,
    my_color: Option<Stone>,
    peer_color: Option<Stone>,
    player_id: u16,

    matchmaking: Option<Matchmaking>,
    opponent: Option<Box<dyn Opponent>>,
    peer_gone: bool,

    result: Option<GameResult>,
    history: Vec<(Pos, Stone)>,
    notices: VecDeque<Notice>,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            network: config.network.clone(),
            ai_human_color: config.game.human_color.into(),
            board: Board::new(),
            evaluator: Evaluator::new(),
            phase: Phase::Idle,
            turn_owner: Stone::Black,
            local_human: None,
            my_color: None,
            peer_color: None,
            player_id: 0,
            matchmaking: None,
            opponent: None,
            peer_gone: false,
            result: None,
            history: Vec::new(),
            notices: VecDeque::new(),
        }
    }

    /// Create a session and start it in `mode`
    pub fn start_new(config: &AppConfig, mode: PlayMode) -> Self {
        let mut session = Self::new(config);
        session.start(mode);
        session
    }

    /// Leave `Idle`. Has no effect once started.
    pub fn start(&mut self, mode: PlayMode) {
        if self.phase != Phase::Idle {
            warn!(phase = ?self.phase, "session already started");
            return;
        }
        match mode {
            PlayMode::Ai => self.enter_local_ai(self.ai_human_color),
            PlayMode::Pvp => {
                info!("starting two-player game");
                self.phase = Phase::LocalPvp;
                self.local_human = None;
            }
            PlayMode::Network => self.connect(),
        }
    }

    fn connect(&mut self) {
        let addr = self.network.server_addr.clone();
        self.phase = Phase::Connecting;
        self.notify(Notice::Connecting { addr: addr.clone() });

        let (tx, rx) = unbounded();
        match NetLink::connect(&addr, self.network.connect_timeout(), tx.clone()) {
            Ok(link) => {
                let timer = MatchTimer::start(self.network.match_deadline(), tx);
                self.matchmaking = Some(Matchmaking { link, events: rx, timer });
            }
            Err(e) => {
                warn!(%addr, error = %e, "connect failed");
                self.fall_back(FallbackReason::ConnectFailed(e.to_string()));
            }
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Color authorised to move next
    pub fn turn_owner(&self) -> Stone {
        self.turn_owner
    }

    /// Assigned by the relay; networked games only
    pub fn my_color(&self) -> Option<Stone> {
        self.my_color
    }

    pub fn peer_color(&self) -> Option<Stone> {
        self.peer_color
    }

    pub fn player_id(&self) -> u16 {
        self.player_id
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// True if the peer left a game that is still on the board
    pub fn peer_gone(&self) -> bool {
        self.peer_gone
    }

    /// True while waiting on the network: the caller should keep ticking
    pub fn is_networked(&self) -> bool {
        self.matchmaking.is_some() || self.opponent.as_ref().is_some_and(|o| o.is_remote())
    }

    /// True if the local human may place a stone now
    pub fn is_human_turn(&self) -> bool {
        match self.phase {
            Phase::LocalPvp => true,
            Phase::LocalAi | Phase::NetworkPlay => self.local_human == Some(self.turn_owner),
            _ => false,
        }
    }

    /// Drain queued status notices, oldest first
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    fn notify(&mut self, notice: Notice) {
        debug!(%notice, "notice");
        self.notices.push_back(notice);
    }

    // ---------------------------------------------------------------------
    // Moves
    // ---------------------------------------------------------------------

    /// Place a stone for the local human.
    ///
    /// Against the heuristic the reply is computed and applied before this
    /// returns. Returns the game's outcome after every synchronous move.
    pub fn play(&mut self, pos: Pos) -> Result<MoveOutcome, MoveError> {
        let color = match self.phase {
            Phase::Idle | Phase::Connecting | Phase::WaitingForMatch => return Err(MoveError::NotReady),
            Phase::GameOver => return Err(MoveError::GameOver),
            Phase::LocalPvp => self.turn_owner,
            Phase::LocalAi | Phase::NetworkPlay => self.local_human.unwrap_or(self.turn_owner),
        };

        let mut outcome = self.submit_move(pos, color)?;

        if let Some(opponent) = self.opponent.as_mut() {
            if let Err(e) = opponent.deliver_move(pos) {
                warn!(error = %e, "failed to deliver move");
                self.handle_opponent_event(OpponentEvent::ConnectionLost);
            }
        }

        if outcome == MoveOutcome::Continue {
            outcome = self.drive_opponent().unwrap_or(outcome);
        }
        Ok(outcome)
    }

    /// Apply a move for `color` with full turn discipline.
    ///
    /// On success the turn passes to the other color unless the game ended.
    pub fn submit_move(&mut self, pos: Pos, color: Stone) -> Result<MoveOutcome, MoveError> {
        match self.phase {
            Phase::GameOver => return Err(MoveError::GameOver),
            Phase::Idle | Phase::Connecting | Phase::WaitingForMatch => return Err(MoveError::NotReady),
            Phase::LocalAi | Phase::LocalPvp | Phase::NetworkPlay => {}
        }
        if color != self.turn_owner {
            return Err(MoveError::NotYourTurn {
                attempted: color,
                expected: self.turn_owner,
            });
        }

        self.board.place(pos, color)?;
        self.evaluator.update(pos, color);
        self.history.push((pos, color));
        debug!(%pos, ?color, "stone placed");

        if self.board.check_win(pos) {
            self.finish(GameResult {
                winner: Some(color),
                reason: EndReason::FiveInRow,
                winning_line: find_five_line_at_pos(&self.board, pos),
            });
            return Ok(MoveOutcome::Win(color));
        }
        if self.board.is_full() {
            self.finish(GameResult {
                winner: None,
                reason: EndReason::BoardFull,
                winning_line: None,
            });
            return Ok(MoveOutcome::Draw);
        }

        self.turn_owner = color.opponent();
        Ok(MoveOutcome::Continue)
    }

    /// Suggested move for the side to move
    pub fn hint(&self) -> Option<Pos> {
        match self.phase {
            Phase::LocalAi | Phase::LocalPvp | Phase::NetworkPlay => {
                self.evaluator.select_move(&self.board.snapshot(), self.turn_owner)
            }
            _ => None,
        }
    }

    /// Let the opponent move for as long as it owns the turn and has a move.
    ///
    /// Returns the outcome of the last move applied, if any.
    fn drive_opponent(&mut self) -> Option<MoveOutcome> {
        let mut last = None;
        loop {
            if !matches!(self.phase, Phase::LocalAi | Phase::NetworkPlay) {
                break;
            }
            let Some(opponent) = self.opponent.as_mut() else {
                break;
            };
            let color = opponent.color();
            if color != self.turn_owner {
                break;
            }
            let Some(pos) = opponent.propose_next_move(&self.board, &self.evaluator) else {
                break;
            };
            let remote = opponent.is_remote();

            match self.submit_move(pos, color) {
                Ok(outcome) => {
                    if remote {
                        self.notify(Notice::PeerMoved(pos));
                    }
                    last = Some(outcome);
                    if outcome != MoveOutcome::Continue {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%pos, %error, "opponent move rejected");
                    self.notify(Notice::RejectedPeerMove { pos, error });
                    if !remote {
                        break;
                    }
                }
            }
        }
        last
    }

    fn finish(&mut self, result: GameResult) {
        info!(winner = ?result.winner, reason = ?result.reason, moves = self.history.len(), "game over");
        self.phase = Phase::GameOver;
        self.result = Some(result);
        self.notify(Notice::GameOver(result));
    }

    // ---------------------------------------------------------------------
    // Main loop
    // ---------------------------------------------------------------------

    /// Process everything the network threads queued since the last call.
    ///
    /// Call once per main-loop iteration.
    pub fn tick(&mut self) {
        self.pump_matchmaking();

        let events = match self.opponent.as_mut() {
            Some(opponent) => opponent.poll(),
            None => Vec::new(),
        };
        for event in events {
            self.handle_opponent_event(event);
        }

        self.drive_opponent();
    }

    fn pump_matchmaking(&mut self) {
        // One event at a time: a GameStart hands the channel to the remote opponent
        while let Some(event) = self.matchmaking.as_ref().and_then(|m| m.events.try_recv().ok()) {
            self.handle_match_event(event);
        }
    }

    fn handle_match_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::Frame(frame) => match frame.command {
                Command::AssignId => {
                    self.player_id = frame.player_id;
                    if self.phase == Phase::Connecting {
                        info!(player_id = frame.player_id, "waiting for match");
                        self.phase = Phase::WaitingForMatch;
                    }
                    self.notify(Notice::WaitingForMatch {
                        player_id: frame.player_id,
                    });
                }
                Command::GameStart => self.begin_network_play(frame),
                other => debug!(?other, "ignoring frame before match"),
            },
            NetEvent::MatchTimeout => {
                let matched = self.matchmaking.as_ref().map_or(true, |m| m.timer.is_matched());
                if !matched && matches!(self.phase, Phase::Connecting | Phase::WaitingForMatch) {
                    self.fall_back(FallbackReason::MatchTimeout);
                }
            }
            NetEvent::Closed => self.fall_back(FallbackReason::ConnectionLost),
            NetEvent::ProtocolError(msg) => {
                self.notify(Notice::ProtocolError(msg.clone()));
                self.fall_back(FallbackReason::ProtocolError(msg));
            }
        }
    }

    fn begin_network_play(&mut self, frame: Frame) {
        let colors = match (Stone::from_code(frame.x), Stone::from_code(frame.y)) {
            (Some(mine), Some(peer)) if mine != peer => Ok((mine, peer)),
            (Some(_), Some(_)) => Err(format!("both players assigned color {}", frame.x)),
            (None, _) => Err(ProtocolError::InvalidColor(frame.x).to_string()),
            (_, None) => Err(ProtocolError::InvalidColor(frame.y).to_string()),
        };
        let (mine, peer) = match colors {
            Ok(colors) => colors,
            Err(msg) => {
                warn!(%msg, "bad game start");
                self.notify(Notice::ProtocolError(msg.clone()));
                self.fall_back(FallbackReason::ProtocolError(msg));
                return;
            }
        };
        let Some(mut matchmaking) = self.matchmaking.take() else {
            return;
        };
        matchmaking.timer.confirm();

        info!(?mine, player_id = self.player_id, peer = %matchmaking.link.peer(), "match started");
        self.phase = Phase::NetworkPlay;
        self.my_color = Some(mine);
        self.peer_color = Some(peer);
        self.local_human = Some(mine);
        self.turn_owner = Stone::Black;
        let Matchmaking { link, events, .. } = matchmaking;
        self.opponent = Some(Box::new(RemoteOpponent::new(peer, self.player_id, link, events)));
        self.notify(Notice::Matched { my_color: mine });
    }

    fn fall_back(&mut self, reason: FallbackReason) {
        info!(?reason, "falling back to local play");
        self.matchmaking = None;
        self.notify(Notice::FellBack(reason));
        self.enter_local_ai(self.ai_human_color);
    }

    fn enter_local_ai(&mut self, human: Stone) {
        info!(?human, "playing against the heuristic");
        self.phase = Phase::LocalAi;
        self.local_human = Some(human);
        self.opponent = Some(Box::new(LocalHeuristicOpponent::new(human.opponent())));
        self.drive_opponent();
    }

    fn handle_opponent_event(&mut self, event: OpponentEvent) {
        match event {
            OpponentEvent::GameEnd { won } => {
                if self.phase != Phase::NetworkPlay {
                    debug!(won, "game end after local game over");
                    return;
                }
                let winner = if won { self.my_color } else { self.peer_color };
                self.finish(GameResult {
                    winner,
                    reason: EndReason::Remote,
                    winning_line: self.last_move().and_then(|pos| find_five_line_at_pos(&self.board, pos)),
                });
            }
            OpponentEvent::PeerDisconnected | OpponentEvent::ConnectionLost => self.peer_left(None),
            OpponentEvent::ProtocolError(msg) => self.peer_left(Some(msg)),
        }
    }

    fn peer_left(&mut self, protocol_error: Option<String>) {
        if self.peer_gone {
            return;
        }
        self.peer_gone = true;
        if let Some(msg) = protocol_error {
            self.notify(Notice::ProtocolError(msg));
        }
        if self.phase != Phase::NetworkPlay {
            return;
        }

        warn!(policy = ?self.network.on_peer_disconnect, "peer left");
        match self.network.on_peer_disconnect {
            DisconnectPolicy::Notify => self.notify(Notice::PeerDisconnected),
            DisconnectPolicy::EndGame => {
                self.notify(Notice::PeerDisconnected);
                self.finish(GameResult {
                    winner: None,
                    reason: EndReason::Abandoned,
                    winning_line: None,
                });
            }
            DisconnectPolicy::ResumeLocal => {
                let human = self.my_color.unwrap_or(self.ai_human_color);
                self.notify(Notice::FellBack(FallbackReason::PeerDisconnected));
                self.enter_local_ai(human);
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("phase", &self.phase)
            .field("turn_owner", &self.turn_owner)
            .field("my_color", &self.my_color)
            .field("player_id", &self.player_id)
            .field("moves", &self.history.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    fn config() -> AppConfig {
        AppConfig::default()
    }

    fn pvp() -> Session {
        Session::start_new(&config(), PlayMode::Pvp)
    }

    #[test]
    fn test_new_session_is_idle() {
        let mut session = Session::new(&config());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.play(Pos::new(8, 8)), Err(MoveError::NotReady));
        assert!(session.hint().is_none());
    }

    #[test]
    fn test_pvp_turns_alternate() {
        let mut session = pvp();
        assert_eq!(session.turn_owner(), Stone::Black);
        assert_eq!(session.play(Pos::new(8, 8)), Ok(MoveOutcome::Continue));
        assert_eq!(session.turn_owner(), Stone::White);
        assert_eq!(session.play(Pos::new(8, 9)), Ok(MoveOutcome::Continue));
        assert_eq!(session.board().get(Pos::new(8, 9)), Stone::White);
        assert_eq!(session.turn_owner(), Stone::Black);
        assert_eq!(session.last_move(), Some(Pos::new(8, 9)));
    }

    #[test]
    fn test_submit_out_of_turn_is_rejected() {
        let mut session = pvp();
        let err = session.submit_move(Pos::new(8, 8), Stone::White).unwrap_err();
        assert_eq!(
            err,
            MoveError::NotYourTurn {
                attempted: Stone::White,
                expected: Stone::Black
            }
        );
        assert!(session.board().is_board_empty());
        assert_eq!(session.turn_owner(), Stone::Black);
    }

    #[test]
    fn test_rejected_placement_keeps_turn() {
        let mut session = pvp();
        session.play(Pos::new(8, 8)).unwrap();
        let err = session.play(Pos::new(8, 8)).unwrap_err();
        assert!(matches!(err, MoveError::Board(_)));
        assert_eq!(session.turn_owner(), Stone::White);
        let err = session.play(Pos::new(0, 3)).unwrap_err();
        assert!(matches!(err, MoveError::Board(_)));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_pvp_win_ends_game() {
        let mut session = pvp();
        for y in 1..5 {
            session.play(Pos::new(3, y)).unwrap();
            session.play(Pos::new(9, y)).unwrap();
        }
        assert_eq!(session.play(Pos::new(3, 5)), Ok(MoveOutcome::Win(Stone::Black)));
        assert_eq!(session.phase(), Phase::GameOver);

        let result = session.result().unwrap();
        assert_eq!(result.winner, Some(Stone::Black));
        assert_eq!(result.reason, EndReason::FiveInRow);
        assert_eq!(result.winning_line.unwrap()[0], Pos::new(3, 1));

        // No further moves from either color
        assert_eq!(session.play(Pos::new(12, 12)), Err(MoveError::GameOver));
        assert_eq!(session.submit_move(Pos::new(12, 12), Stone::White), Err(MoveError::GameOver));
        assert!(session
            .drain_notices()
            .iter()
            .any(|n| matches!(n, Notice::GameOver(r) if r.winner == Some(Stone::Black))));
    }

    #[test]
    fn test_pvp_full_board_is_draw() {
        let mut session = pvp();
        // Runs of at most two in every direction, so nobody ever gets five
        let color_at = |x: u8, y: u8| -> Stone {
            if (x as u32 + 2 * y as u32) % 4 < 2 {
                Stone::Black
            } else {
                Stone::White
            }
        };
        let mut blacks: Vec<Pos> = Vec::new();
        let mut whites: Vec<Pos> = Vec::new();
        for pos in Pos::playable() {
            match color_at(pos.x, pos.y) {
                Stone::Black => blacks.push(pos),
                _ => whites.push(pos),
            }
        }
        // Black moves first and one more stone than White on 225 cells
        assert_eq!(blacks.len(), whites.len() + 1);

        let mut outcome = MoveOutcome::Continue;
        for i in 0..blacks.len() {
            outcome = session.play(blacks[i]).unwrap();
            if let Some(&w) = whites.get(i) {
                assert_eq!(outcome, MoveOutcome::Continue);
                outcome = session.play(w).unwrap();
                assert_eq!(outcome, MoveOutcome::Continue);
            }
        }
        assert_eq!(outcome, MoveOutcome::Draw);
        assert_eq!(session.result().unwrap().reason, EndReason::BoardFull);
        assert_eq!(session.result().unwrap().winner, None);
    }

    #[test]
    fn test_local_ai_replies_synchronously() {
        let mut session = Session::start_new(&config(), PlayMode::Ai);
        assert_eq!(session.phase(), Phase::LocalAi);
        assert!(session.is_human_turn());

        assert_eq!(session.play(Pos::new(8, 8)), Ok(MoveOutcome::Continue));
        assert_eq!(session.history().len(), 2);
        let (reply, color) = session.history()[1];
        assert_eq!(color, Stone::White);
        assert_eq!(session.board().get(reply), Stone::White);
        assert_eq!(session.turn_owner(), Stone::Black);
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_local_ai_rejects_human_playing_ai_color() {
        let mut session = Session::start_new(&config(), PlayMode::Ai);
        let err = session.submit_move(Pos::new(8, 8), Stone::White).unwrap_err();
        assert!(matches!(err, MoveError::NotYourTurn { .. }));
    }

    #[test]
    fn test_local_ai_opens_when_human_is_white() {
        let mut cfg = config();
        cfg.game.human_color = ColorChoice::White;
        let session = Session::start_new(&cfg, PlayMode::Ai);

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].1, Stone::Black);
        // Empty board: every score ties at zero and the last scanned cell wins
        assert_eq!(session.history()[0].0, Pos::new(15, 15));
        assert_eq!(session.turn_owner(), Stone::White);
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_local_ai_game_runs_to_completion() {
        let mut session = Session::start_new(&config(), PlayMode::Ai);
        // Human plays the first empty cell each turn
        for _ in 0..200 {
            if session.is_over() {
                break;
            }
            let pos = Pos::playable().find(|&p| session.board().is_empty(p)).unwrap();
            session.play(pos).unwrap();
        }
        assert!(session.is_over());
        assert!(session.result().is_some());
    }

    #[test]
    fn test_hint_matches_evaluator() {
        let mut session = pvp();
        session.play(Pos::new(8, 8)).unwrap();
        let hint = session.hint().unwrap();
        assert_eq!(
            Some(hint),
            session.evaluator().select_move(&session.board().snapshot(), Stone::White)
        );
    }

    #[test]
    fn test_start_twice_is_ignored() {
        let mut session = pvp();
        session.play(Pos::new(8, 8)).unwrap();
        session.start(PlayMode::Ai);
        assert_eq!(session.phase(), Phase::LocalPvp);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(
            Notice::Matched { my_color: Stone::White }.to_string(),
            "Matched! You play White"
        );
        assert_eq!(
            Notice::FellBack(FallbackReason::MatchTimeout).to_string(),
            "No opponent found, playing the computer"
        );
    }
}
