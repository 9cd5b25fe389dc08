//! Main application state and logic

use crate::board::{parse_placement, BoardMessage, BoardView};
use crate::config::BoardConfig;
use crate::sizing::board_width;
use crate::styles::{PADDING, PANEL_WIDTH};

use chess_session::{ChessSession, Square};
use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, vertical_space};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use tracing::debug;

/// Main application state
pub struct ChessApp {
    /// Game session; the only owner of the timeline
    session: ChessSession,
    board_config: BoardConfig,
    /// Board flipped?
    board_flipped: bool,
    /// Board edge in pixels, follows the window size
    board_width: f32,
    /// Square the mouse went down on
    pressed: Option<Square>,
    /// Square picked by a click, waiting for a target click
    selected: Option<Square>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Game controls
    Undo,
    Redo,
    NewGame,
    FlipBoard,

    // Sizing
    WindowResized(Size),
}

impl ChessApp {
    pub fn new(session: ChessSession, board_config: BoardConfig) -> (Self, Task<Message>) {
        let window = Size::new(board_config.window_width, board_config.window_height);
        (
            Self {
                session,
                board_config,
                board_flipped: board_config.flipped,
                board_width: board_width(window, &board_config),
                pressed: None,
                selected: None,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::Pressed(sq)) => {
                self.pressed = Some(sq);
            }

            Message::Board(BoardMessage::Released(sq)) => {
                let Some(origin) = self.pressed.take() else {
                    return Task::none();
                };

                if origin != sq {
                    // Drag and drop
                    self.selected = None;
                    self.drop_piece(origin, sq);
                } else if let Some(from) = self.selected.take() {
                    if from != sq {
                        self.drop_piece(from, sq);
                    }
                } else if self.has_piece(sq) {
                    self.selected = Some(sq);
                }
            }

            Message::Undo => {
                self.selected = None;
                self.session.undo();
            }

            Message::Redo => {
                self.selected = None;
                self.session.redo();
            }

            Message::NewGame => {
                self.selected = None;
                self.session.reset();
            }

            Message::FlipBoard => {
                self.board_flipped = !self.board_flipped;
            }

            Message::WindowResized(size) => {
                self.board_width = board_width(size, &self.board_config);
                debug!(width = self.board_width, "board resized");
            }
        }
        Task::none()
    }

    /// Hand a move attempt to the session. A refused move needs no
    /// handling: the board is redrawn from the unchanged position.
    fn drop_piece(&mut self, from: Square, to: Square) {
        if !self.session.on_drop_attempt(&from.to_string(), &to.to_string()) {
            debug!(%from, %to, "snap back");
        }
    }

    fn has_piece(&self, sq: Square) -> bool {
        parse_placement(&self.session.serialized_position())[sq.index() as usize].is_some()
    }

    pub fn session(&self) -> &ChessSession {
        &self.session
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(
            &self.session.serialized_position(),
            self.board_width,
            self.board_flipped,
        )
        .selected(self.selected)
        .last_move(self.session.last_move().map(|m| (m.from, m.to)))
        .view()
        .map(Message::Board);

        row![
            board,
            container(self.control_panel())
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(PADDING)
        .padding(PADDING)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let status_title = text("Game Status").size(20);
        let status_text = text(self.session.status_text()).size(16);

        let undo_btn = button(text("Undo"))
            .on_press_maybe(self.session.can_undo().then_some(Message::Undo))
            .style(button::secondary);

        let redo_btn = button(text("Redo"))
            .on_press_maybe(self.session.can_redo().then_some(Message::Redo))
            .style(button::secondary);

        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        // Move history, clipped to the cursor
        let moves_title = text("Move History").size(16);
        let mut moves_list = column![].spacing(2);

        for (i, chunk) in self.session.history_view().chunks(2).enumerate() {
            let move_num = i + 1;
            let white_move = &chunk[0].san;
            let black_move = chunk.get(1).map(|m| m.san.as_str()).unwrap_or("");

            moves_list = moves_list.push(
                text(format!("{}. {} {}", move_num, white_move, black_move)).size(13),
            );
        }

        let moves_scroll = scrollable(moves_list).height(Length::Fill);

        // Read-only projection for analysis
        let snapshot = self.session.analysis_snapshot();
        let last_move = text(format!(
            "Last move: {}",
            snapshot.last_move.as_deref().unwrap_or("-")
        ))
        .size(13);
        let fen = text(snapshot.position).size(11);

        column![
            status_title,
            status_text,
            vertical_space().height(10),
            row![undo_btn, redo_btn].spacing(8),
            vertical_space().height(10),
            new_game_btn,
            flip_btn,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            moves_title,
            moves_scroll,
            horizontal_rule(1),
            last_move,
            fen,
        ]
        .spacing(5)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_session::{Session, StandardRules};

    fn app() -> ChessApp {
        ChessApp::new(Session::with_engine(StandardRules::new()), BoardConfig::default()).0
    }

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn drag(app: &mut ChessApp, from: &str, to: &str) {
        let _ = app.update(Message::Board(BoardMessage::Pressed(sq(from))));
        let _ = app.update(Message::Board(BoardMessage::Released(sq(to))));
    }

    fn click(app: &mut ChessApp, square: &str) {
        drag(app, square, square);
    }

    fn sans(app: &ChessApp) -> Vec<String> {
        app.session().history_view().iter().map(|m| m.san.clone()).collect()
    }

    #[test]
    fn test_drag_and_drop_plays_move() {
        let mut app = app();
        drag(&mut app, "e2", "e4");
        assert_eq!(sans(&app), vec!["e4"]);
        assert_eq!(app.session().status_text(), "Black to move");
    }

    #[test]
    fn test_click_click_plays_move() {
        let mut app = app();
        click(&mut app, "g1");
        assert_eq!(app.selected, Some(sq("g1")));
        click(&mut app, "f3");
        assert_eq!(sans(&app), vec!["Nf3"]);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_click_on_empty_square_selects_nothing() {
        let mut app = app();
        click(&mut app, "e4");
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_illegal_drop_snaps_back() {
        let mut app = app();
        let fen = app.session().serialized_position();
        drag(&mut app, "e2", "e5");
        assert!(sans(&app).is_empty());
        assert_eq!(app.session().serialized_position(), fen);
    }

    #[test]
    fn test_undo_redo_buttons() {
        let mut app = app();
        drag(&mut app, "e2", "e4");
        let _ = app.update(Message::Undo);
        assert!(sans(&app).is_empty());
        assert!(app.session().can_redo());
        let _ = app.update(Message::Redo);
        assert_eq!(sans(&app), vec!["e4"]);
        let _ = app.update(Message::NewGame);
        assert!(!app.session().can_undo());
    }

    #[test]
    fn test_resize_does_not_touch_session() {
        let mut app = app();
        drag(&mut app, "d2", "d4");
        let _ = app.update(Message::Undo);
        let cursor = app.session().timeline().cursor();

        let _ = app.update(Message::WindowResized(Size::new(900.0, 500.0)));

        assert_eq!(app.board_width, 456.0);
        assert_eq!(app.session().timeline().cursor(), cursor);
        assert!(app.session().can_redo());
    }
}
