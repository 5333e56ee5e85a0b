//! Board rendering for the Gomoku GUI
//!
//! Only the playable cells (`PLAY_MIN..=PLAY_MAX` on both axes) are drawn.
//! `x` runs down the rows and `y` across the columns, matching the wire
//! coordinates sent to the relay.

use crate::board::{Board, Pos, Stone, PLAY_MAX, PLAY_MIN};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

const LINES: u8 = PLAY_MAX - PLAY_MIN + 1;

/// Per-frame inputs for [`BoardView::show`]
pub struct BoardScene<'a> {
    pub board: &'a Board,
    /// Color previewed under the pointer
    pub turn: Stone,
    pub last_move: Option<Pos>,
    pub hint: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
    /// False while the local human may not move
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (LINES as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, scene.board);

        if let Some(pos) = scene.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = scene.winning_line {
            self.draw_winning_line(&painter, &line);
        }
        if let Some(pos) = scene.hint {
            self.draw_hint(&painter, pos, scene.turn);
        }

        if !scene.interactive {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = scene.board.is_empty(board_pos);
        self.draw_hover_preview(&painter, board_pos, scene.turn, is_valid);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (LINES as f32 - 1.0) * self.cell_size;

        for i in 0..LINES {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Label rows and columns with their wire coordinates
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for v in PLAY_MIN..=PLAY_MAX {
            let offset = BOARD_MARGIN + (v - PLAY_MIN) as f32 * self.cell_size;
            let label = v.to_string();

            // columns (y)
            let x = self.board_rect.min.x + offset;
            for y in [self.board_rect.min.y + 12.0, self.board_rect.max.y - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            }

            // rows (x)
            let y = self.board_rect.min.y + offset;
            for x in [self.board_rect.min.x + 14.0, self.board_rect.max.x - 14.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in Pos::playable() {
            let stone = board.get(pos);
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    fn draw_hint(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let (fill, text) = match turn {
            Stone::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_STONE),
            Stone::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_STONE),
            Stone::Empty => return,
        };

        painter.circle_filled(center, radius, fill);
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(14.0), text);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let color = match (is_valid, turn) {
            (false, _) => hover_invalid(),
            (true, Stone::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Stone::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            (true, Stone::Empty) => return,
        };
        painter.circle_filled(self.board_to_screen(pos), self.cell_size * STONE_RADIUS_RATIO, color);
    }

    /// Convert screen coordinates to a playable board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;

        let range = 0..LINES as i32;
        if range.contains(&row) && range.contains(&col) {
            Some(Pos::new(row as u8 + PLAY_MIN, col as u8 + PLAY_MIN))
        } else {
            None
        }
    }

    /// Convert a board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let col = pos.y.saturating_sub(PLAY_MIN) as f32;
        let row = pos.x.saturating_sub(PLAY_MIN) as f32;
        Pos2::new(
            self.board_rect.min.x + BOARD_MARGIN + col * self.cell_size,
            self.board_rect.min.y + BOARD_MARGIN + row * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 30.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(2.0 * BOARD_MARGIN + 14.0 * 30.0)),
        }
    }

    #[test]
    fn test_screen_board_round_trip_covers_playable_area() {
        let view = view();
        for pos in Pos::playable() {
            let screen = view.board_to_screen(pos);
            assert_eq!(view.screen_to_board(screen + Vec2::new(5.0, -5.0)), Some(pos));
        }
    }

    #[test]
    fn test_corners_map_to_play_bounds() {
        let view = view();
        let top_left = Pos2::new(BOARD_MARGIN, BOARD_MARGIN);
        assert_eq!(view.screen_to_board(top_left), Some(Pos::new(PLAY_MIN, PLAY_MIN)));
        let bottom_right = top_left + Vec2::splat(14.0 * 30.0);
        assert_eq!(view.screen_to_board(bottom_right), Some(Pos::new(PLAY_MAX, PLAY_MAX)));
    }

    #[test]
    fn test_outside_grid_is_none() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(1.0, 1.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(BOARD_MARGIN, 2.0 * BOARD_MARGIN + 15.0 * 30.0)), None);
    }
}
