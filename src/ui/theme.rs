//! Theme constants for the Isolation GUI

use egui::Color32;

// Board colors - slate tiles
pub const BOARD_BG: Color32 = Color32::from_rgb(58, 64, 74);
pub const CELL_BLANK: Color32 = Color32::from_rgb(214, 206, 190);
pub const CELL_BURNED: Color32 = Color32::from_rgb(44, 40, 38);
pub const CELL_BURNED_CROSS: Color32 = Color32::from_rgb(70, 64, 60);
pub const GRID_LINE: Color32 = Color32::from_rgb(30, 32, 36);

// Player pieces
pub const PLAYER_ONE: Color32 = Color32::from_rgb(66, 133, 244);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(234, 88, 60);
pub const PIECE_LABEL: Color32 = Color32::from_rgb(250, 250, 252);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 210, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn legal_move_dot() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 160, 80, 170)
}

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 160, 80, 90)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.36;
pub const LEGAL_DOT_RADIUS_RATIO: f32 = 0.12;
pub const CELL_GAP: f32 = 2.0;
pub const LAST_MOVE_MARKER_WIDTH: f32 = 3.0;
