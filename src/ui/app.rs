//! Main application for the Gomoku GUI
//!
//! The app owns one [`Session`] and drives it from `update`: each frame it
//! ticks the session, collects its notices and renders the result.

use std::collections::VecDeque;

use eframe::egui;
use egui::{CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use crate::board::{Pos, Stone};
use crate::config::{AppConfig, PlayMode};
use crate::session::{EndReason, Notice, Phase, Session};

use super::board_view::{BoardScene, BoardView};
use super::theme::*;

const NOTICE_LOG_LEN: usize = 6;

/// Main Gomoku application
pub struct GomokuApp {
    config: AppConfig,
    mode: PlayMode,
    session: Session,
    board_view: BoardView,
    hint: Option<Pos>,
    /// Move count the hint was computed for
    hint_at: usize,
    notices: VecDeque<String>,
    error: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, mode: PlayMode) -> Self {
        let session = Session::start_new(&config, mode);
        let mut app = Self {
            config,
            mode,
            session,
            board_view: BoardView::default(),
            hint: None,
            hint_at: 0,
            notices: VecDeque::new(),
            error: None,
        };
        app.collect_notices();
        app
    }

    /// Replace the session with a fresh one in `mode`
    fn new_game(&mut self, mode: PlayMode) {
        debug!(?mode, "new game");
        self.mode = mode;
        self.session = Session::start_new(&self.config, mode);
        self.hint = None;
        self.notices.clear();
        self.error = None;
        self.collect_notices();
    }

    fn collect_notices(&mut self) {
        for notice in self.session.drain_notices() {
            self.notices.push_back(notice.to_string());
            while self.notices.len() > NOTICE_LOG_LEN {
                self.notices.pop_front();
            }
        }
    }

    fn hints_enabled(&self) -> bool {
        self.config.ui.show_hints && self.session.phase() == Phase::LocalPvp
    }

    fn request_hint(&mut self) {
        if self.hints_enabled() {
            self.hint = self.session.hint();
            self.hint_at = self.session.history().len();
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Computer)").clicked() {
                        self.new_game(PlayMode::Ai);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Two Players)").clicked() {
                        self.new_game(PlayMode::Pvp);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Online)").clicked() {
                        self.new_game(PlayMode::Network);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.mode_label());
                });
            });
        });
    }

    fn mode_label(&self) -> String {
        match self.session.phase() {
            Phase::Idle => "Idle".to_string(),
            Phase::Connecting => format!("Online - connecting to {}", self.config.network.server_addr),
            Phase::WaitingForMatch => format!("Online - player #{}", self.session.player_id()),
            Phase::NetworkPlay => match self.session.my_color() {
                Some(color) => format!("Online - You: {}", color_label(color)),
                None => "Online".to_string(),
            },
            Phase::LocalAi => "vs Computer".to_string(),
            Phase::LocalPvp => "Two Players".to_string(),
            Phase::GameOver => "Game Over".to_string(),
        }
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(text) = self.game_over_text() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &text);
                }

                if let Some(msg) = self.error.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg, Color32::from_rgb(80, 40, 30));
                }

                if !self.notices.is_empty() {
                    ui.add_space(10.0);
                    self.render_notice_card(ui);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.turn_owner();
            let accent = match turn {
                Stone::White => Color32::from_rgb(220, 220, 225),
                _ => Color32::from_rgb(70, 70, 75),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_label(turn).to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = match self.session.phase() {
                        Phase::Idle | Phase::Connecting => ("Connecting...", STATUS_WAIT),
                        Phase::WaitingForMatch => ("Waiting for opponent...", STATUS_WAIT),
                        Phase::GameOver => ("Game Over", WIN_HIGHLIGHT),
                        _ if self.session.is_human_turn() => ("Your turn", STATUS_OK),
                        _ if self.session.peer_gone() => ("Opponent left", STATUS_ALERT),
                        _ => ("Opponent's turn", STATUS_WAIT),
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("New Game (N)").clicked() {
                    self.new_game(self.mode);
                }
                if self.hints_enabled() && ui.button("Hint (H)").clicked() {
                    self.request_hint();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn game_over_text(&self) -> Option<String> {
        let result = self.session.result()?;
        Some(match (result.winner, result.reason) {
            (Some(winner), EndReason::FiveInRow) => format!("{} wins by five in a row", color_label(winner)),
            (Some(winner), _) => format!("{} wins", color_label(winner)),
            (None, EndReason::Abandoned) => "Game abandoned".to_string(),
            (None, _) => "Draw: the board is full".to_string(),
        })
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, text: &str) {
        Frame::new()
            .fill(Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(16.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.new_game(self.mode);
                    }
                });
            });
    }

    fn render_notice_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for line in self.notices.iter().rev() {
                ui.label(RichText::new(line).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str, fill: Color32) {
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if self.hint_at != self.session.history().len() {
                self.hint = None;
            }

            let scene = BoardScene {
                board: self.session.board(),
                turn: self.session.turn_owner(),
                last_move: self.session.last_move(),
                hint: self.hint,
                winning_line: self.session.result().and_then(|r| r.winning_line),
                interactive: self.session.is_human_turn(),
            };
            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                match self.session.play(pos) {
                    Ok(outcome) => {
                        debug!(%pos, ?outcome, "human move");
                        self.error = None;
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, hint) = ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::H)));
        if new_game {
            self.new_game(self.mode);
        }
        if hint {
            self.request_hint();
        }
    }
}

fn color_label(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "-",
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.tick();
        self.collect_notices();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.collect_notices();

        // Network events arrive without input; keep the loop running
        if self.session.is_networked() {
            ctx.request_repaint_after(self.config.ui.tick());
        }
    }
}
