//! Standard Algebraic Notation for confirmed moves.

use cozy_chess::{Board, GameStatus, Move, Piece, Square};

/// SAN for `mv` played on `before`, producing `after`.
pub(crate) fn move_to_san(before: &Board, mv: Move, after: &Board) -> String {
    let mut san = base_san(before, mv);
    if !after.checkers().is_empty() {
        san.push(if after.status() == GameStatus::Won {
            '#'
        } else {
            '+'
        });
    }
    san
}

fn base_san(board: &Board, mv: Move) -> String {
    let stm = board.side_to_move();
    let Some(piece) = board.piece_on(mv.from) else {
        return format!("{}{}", mv.from, mv.to);
    };

    // cozy-chess castles by moving the king onto its own rook
    if piece == Piece::King && board.color_on(mv.to) == Some(stm) {
        return if mv.to.file() as u8 > mv.from.file() as u8 {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let is_capture =
        board.color_on(mv.to) == Some(!stm) || (piece == Piece::Pawn && mv.from.file() != mv.to.file());

    let mut san = String::new();
    if piece == Piece::Pawn {
        if is_capture {
            san.push(file_char(mv.from));
        }
    } else {
        san.push(piece_letter(piece));
        san.push_str(&disambiguation(board, piece, mv));
    }

    if is_capture {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());

    if let Some(promo) = mv.promotion {
        san.push('=');
        san.push(piece_letter(promo));
    }

    san
}

/// Shortest prefix that tells `mv.from` apart from other pieces of the
/// same kind that can also reach `mv.to`.
fn disambiguation(board: &Board, piece: Piece, mv: Move) -> String {
    if piece == Piece::King {
        return String::new();
    }

    let mut rivals = Vec::new();
    board.generate_moves(|moves| {
        if moves.piece == piece && moves.from != mv.from && moves.to.has(mv.to) {
            rivals.push(moves.from);
        }
        false
    });

    if rivals.is_empty() {
        return String::new();
    }
    let shares_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());

    if !shares_file {
        file_char(mv.from).to_string()
    } else if !shares_rank {
        rank_char(mv.from).to_string()
    } else {
        mv.from.to_string()
    }
}

fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::King => 'K',
        Piece::Queen => 'Q',
        Piece::Rook => 'R',
        Piece::Bishop => 'B',
        Piece::Knight => 'N',
        Piece::Pawn => 'P',
    }
}

fn file_char(sq: Square) -> char {
    (b'a' + sq.file() as u8) as char
}

fn rank_char(sq: Square) -> char {
    (b'1' + sq.rank() as u8) as char
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod tests;
