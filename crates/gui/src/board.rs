//! Chess board widget rendering

use crate::styles;
use chess_session::Square;
use iced::widget::{column, container, mouse_area, row, text};
use iced::{Background, Color, Element};

/// Message type for board interactions. A press on one square followed by
/// a release on another is a drop attempt.
#[derive(Debug, Clone)]
pub enum BoardMessage {
    Pressed(Square),
    Released(Square),
}

/// Renders a board from a serialized (FEN) position
pub struct BoardView {
    placement: [Option<char>; 64],
    width: f32,
    flipped: bool,
    selected: Option<Square>,
    last_move: Option<(Square, Square)>,
}

impl BoardView {
    pub fn new(fen: &str, width: f32, flipped: bool) -> Self {
        Self {
            placement: parse_placement(fen),
            width,
            flipped,
            selected: None,
            last_move: None,
        }
    }

    pub fn selected(mut self, square: Option<Square>) -> Self {
        self.selected = square;
        self
    }

    pub fn last_move(mut self, squares: Option<(Square, Square)>) -> Self {
        self.last_move = squares;
        self
    }

    /// Create the board view element
    pub fn view<'a>(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for rank in 0..8u8 {
            let display_rank = if self.flipped { rank } else { 7 - rank };
            let mut rank_row = row![].spacing(0);

            for file in 0..8u8 {
                let display_file = if self.flipped { 7 - file } else { file };
                if let Some(sq) = Square::new(display_file, display_rank) {
                    rank_row = rank_row.push(self.render_square(sq));
                }
            }

            board_column = board_column.push(rank_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: styles::BOARD_BORDER,
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square<'a>(&self, sq: Square) -> Element<'a, BoardMessage> {
        let mut bg_color = if sq.is_light() {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        if self.selected == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        }

        if let Some((from, to)) = self.last_move {
            if sq == from || sq == to {
                bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        let size = self.width / 8.0;
        let content: Element<'a, BoardMessage> = match self.placement[sq.index() as usize] {
            Some(piece) => text(styles::piece_glyph(piece))
                .size(size * 0.75)
                .color(Color::BLACK)
                .into(),
            None => text("").into(),
        };

        mouse_area(
            container(content)
                .center_x(size)
                .center_y(size)
                .style(move |_theme| container::Style {
                    background: Some(Background::Color(bg_color)),
                    ..Default::default()
                }),
        )
        .on_press(BoardMessage::Pressed(sq))
        .on_release(BoardMessage::Released(sq))
        .into()
    }
}

/// Piece letters by square index from the placement field of a FEN.
pub fn parse_placement(fen: &str) -> [Option<char>; 64] {
    let mut board = [None; 64];
    let placement = fen.split_whitespace().next().unwrap_or("");

    for (rank_idx, rank_str) in placement.split('/').take(8).enumerate() {
        let rank = 7 - rank_idx; // FEN lists rank 8 .. 1
        let mut file = 0usize;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as usize;
            } else {
                if file < 8 {
                    board[rank * 8 + file] = Some(ch);
                }
                file += 1;
            }
        }
    }

    board
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
