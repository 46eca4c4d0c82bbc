//! Board rendering for the Isolation GUI

use crate::{Board, Move, Player};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    width: u8,
    height: u8,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            width: crate::BOARD_WIDTH,
            height: crate::BOARD_HEIGHT,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if it is a legal move
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Move>,
        suggested_move: Option<Move>,
        show_legal: bool,
        game_over: bool,
    ) -> Option<Move> {
        self.width = board.width();
        self.height = board.height();

        let available_size = ui.available_size();
        let longest = self.width.max(self.height) as f32;
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / longest;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(
                2.0 * BOARD_MARGIN + self.cell_size * self.width as f32,
                2.0 * BOARD_MARGIN + self.cell_size * self.height as f32,
            ),
            Sense::click(),
        );
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        self.draw_cells(&painter, board);
        self.draw_coordinates(&painter);

        let legal = board.legal_moves();
        if show_legal && !game_over {
            for &mv in &legal {
                self.draw_legal_dot(&painter, mv);
            }
        }

        self.draw_pieces(&painter, board);

        if let Some(mv) = last_move {
            self.draw_last_move_marker(&painter, mv);
        }

        if let Some(mv) = suggested_move {
            self.draw_suggestion(&painter, mv, board.active_player());
        }

        let mut clicked = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(mv) = self.screen_to_board(pointer_pos) {
                    let is_valid = legal.contains(&mv);
                    let hover_color = if is_valid {
                        hover_valid()
                    } else {
                        hover_invalid()
                    };
                    painter.rect_filled(self.cell_rect(mv), CornerRadius::same(3), hover_color);

                    if response.clicked() && is_valid {
                        clicked = Some(mv);
                    }
                }
            }
        }

        clicked
    }

    /// Draw blank and burned tiles
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for row in 0..self.height as i8 {
            for col in 0..self.width as i8 {
                let mv = Move::new(row, col);
                let rect = self.cell_rect(mv);

                if board.is_blank(mv) {
                    painter.rect_filled(rect, CornerRadius::same(3), CELL_BLANK);
                } else {
                    painter.rect_filled(rect, CornerRadius::same(3), CELL_BURNED);
                    let inset = rect.shrink(rect.width() * 0.3);
                    let stroke = Stroke::new(2.0, CELL_BURNED_CROSS);
                    painter.line_segment([inset.left_top(), inset.right_bottom()], stroke);
                    painter.line_segment([inset.right_top(), inset.left_bottom()], stroke);
                }
                painter.rect_stroke(
                    rect,
                    CornerRadius::same(3),
                    Stroke::new(1.0, GRID_LINE),
                    StrokeKind::Inside,
                );
            }
        }
    }

    /// Draw coordinate labels (column letters, row numbers)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.width {
            let letter = (b'A' + col) as char;
            let x = self.cell_center(Move::new(0, col as i8)).x;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), TEXT_SECONDARY);
        }

        for row in 0..self.height {
            let y = self.cell_center(Move::new(row as i8, 0)).y;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", row),
                font.clone(),
                TEXT_SECONDARY,
            );
        }
    }

    /// Draw both players where they stand
    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for player in [Player::One, Player::Two] {
            if let Some(mv) = board.location(player) {
                self.draw_piece(painter, mv, player);
            }
        }
    }

    fn draw_piece(&self, painter: &Painter, mv: Move, player: Player) {
        let center = self.cell_center(mv);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, player_color(player));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            player_label(player),
            egui::FontId::proportional(radius),
            PIECE_LABEL,
        );
    }

    fn draw_legal_dot(&self, painter: &Painter, mv: Move) {
        let radius = self.cell_size * LEGAL_DOT_RADIUS_RATIO;
        painter.circle_filled(self.cell_center(mv), radius, legal_move_dot());
    }

    fn draw_last_move_marker(&self, painter: &Painter, mv: Move) {
        painter.rect_stroke(
            self.cell_rect(mv),
            CornerRadius::same(3),
            Stroke::new(LAST_MOVE_MARKER_WIDTH, LAST_MOVE_MARKER),
            StrokeKind::Inside,
        );
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, mv: Move, turn: Player) {
        let center = self.cell_center(mv);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let [r, g, b, _] = player_color(turn).to_array();

        painter.circle_filled(center, radius, Color32::from_rgba_unmultiplied(r, g, b, 90));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(radius),
            PIECE_LABEL,
        );
    }

    /// Convert screen coordinates to a board square
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Move> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if col >= 0 && col < self.width as i32 && row >= 0 && row < self.height as i32 {
            Some(Move::new(row as i8, col as i8))
        } else {
            None
        }
    }

    /// Screen rectangle of a square, inset by the tile gap
    fn cell_rect(&self, mv: Move) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + mv.col as f32 * self.cell_size,
                BOARD_MARGIN + mv.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(CELL_GAP)
    }

    fn cell_center(&self, mv: Move) -> Pos2 {
        self.cell_rect(mv).center()
    }
}

pub fn player_color(player: Player) -> Color32 {
    match player {
        Player::One => PLAYER_ONE,
        Player::Two => PLAYER_TWO,
    }
}

pub fn player_label(player: Player) -> &'static str {
    match player {
        Player::One => "1",
        Player::Two => "2",
    }
}
