//! Standard chess rules backed by `cozy-chess`.
//!
//! Positions serialize to FEN. Castling is requested the way a user drags
//! it, king two files towards the rook; internally cozy-chess encodes it
//! as king-takes-own-rook, so dragging the king onto its own rook is
//! refused here before the engine sees it.

use cozy_chess::{Board, Color, GameStatus, Move, Piece, Rank, Square as BoardSquare};
use std::fmt;

use crate::engine::{MoveOutcome, PositionEngine};
use crate::error::{MoveRejected, PositionError};
use crate::san;
use crate::types::{MoveRequest, PromotionPiece, Side, Square};

/// Immutable board snapshot. Equality is FEN equality.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
}

impl Position {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.fen() == other.fen()
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// Orthodox chess on an 8x8 board.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl StandardRules {
    pub fn new() -> Self {
        Self
    }
}

impl PositionEngine for StandardRules {
    type Position = Position;

    fn create_initial(&self) -> Position {
        Position {
            board: Board::default(),
        }
    }

    fn load(&self, serialized: &str) -> Result<Position, PositionError> {
        serialized
            .trim()
            .parse::<Board>()
            .map(|board| Position { board })
            .map_err(|e| PositionError::InvalidFen {
                fen: serialized.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn try_move(
        &self,
        position: &Position,
        request: MoveRequest,
    ) -> Result<MoveOutcome<Position>, MoveRejected> {
        let board = &position.board;
        let stm = board.side_to_move();
        let from = board_square(request.from);
        let to = board_square(request.to);
        let illegal = MoveRejected::Illegal {
            from: request.from,
            to: request.to,
        };

        let piece = match board.piece_on(from) {
            Some(piece) if board.color_on(from) == Some(stm) => piece,
            _ => return Err(MoveRejected::NoPieceToMove(request.from)),
        };
        if board.color_on(to) == Some(stm) {
            return Err(illegal);
        }

        let mv = encode_move(board, piece, from, to, request.promotion).ok_or(illegal.clone())?;
        if !board.is_legal(mv) {
            return Err(illegal);
        }

        let mut next = board.clone();
        next.play_unchecked(mv);
        let san = san::move_to_san(board, mv, &next);

        Ok(MoveOutcome {
            san,
            position: Position { board: next },
        })
    }

    fn is_game_over(&self, position: &Position) -> bool {
        self.is_checkmate(position) || self.is_draw(position)
    }

    fn is_checkmate(&self, position: &Position) -> bool {
        position.board.status() == GameStatus::Won
    }

    fn is_draw(&self, position: &Position) -> bool {
        let board = &position.board;
        board.status() == GameStatus::Drawn
            || board.halfmove_clock() >= 100
            || insufficient_material(board)
    }

    fn is_check(&self, position: &Position) -> bool {
        !position.board.checkers().is_empty()
    }

    fn side_to_move(&self, position: &Position) -> Side {
        match position.board.side_to_move() {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }

    fn serialize(&self, position: &Position) -> String {
        position.fen()
    }
}

fn board_square(sq: Square) -> BoardSquare {
    BoardSquare::index(sq.index() as usize)
}

/// Translate a user move into cozy-chess encoding. `None` for a castling
/// attempt without the matching right.
fn encode_move(
    board: &Board,
    piece: Piece,
    from: BoardSquare,
    to: BoardSquare,
    promotion: PromotionPiece,
) -> Option<Move> {
    let stm = board.side_to_move();

    if piece == Piece::King && from.rank() == to.rank() {
        let df = to.file() as i8 - from.file() as i8;
        if df.abs() == 2 {
            let rights = board.castle_rights(stm);
            let rook_file = if df > 0 { rights.short } else { rights.long }?;
            return Some(Move {
                from,
                to: BoardSquare::new(rook_file, from.rank()),
                promotion: None,
            });
        }
    }

    let last_rank = match stm {
        Color::White => Rank::Eighth,
        Color::Black => Rank::First,
    };
    let promotion = (piece == Piece::Pawn && to.rank() == last_rank).then(|| match promotion {
        PromotionPiece::Queen => Piece::Queen,
        PromotionPiece::Rook => Piece::Rook,
        PromotionPiece::Bishop => Piece::Bishop,
        PromotionPiece::Knight => Piece::Knight,
    });

    Some(Move {
        from,
        to,
        promotion,
    })
}

/// K v K, K+minor v K, and bishops-only endings with every bishop on one
/// square colour.
fn insufficient_material(board: &Board) -> bool {
    let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    if !heavy.is_empty() {
        return false;
    }

    let knights = board.pieces(Piece::Knight);
    let bishops = board.pieces(Piece::Bishop);
    if knights.len() + bishops.len() <= 1 {
        return true;
    }
    if !knights.is_empty() {
        return false;
    }

    let light = bishops
        .into_iter()
        .filter(|sq| Square::from_raw(*sq as u8).is_light())
        .count();
    light == 0 || light == bishops.len() as usize
}
