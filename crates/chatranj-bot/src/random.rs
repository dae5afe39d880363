//! Uniform random legal-move picker.

use rand::Rng;

use chatranj_core::{Board, Color, Move, Square, possible_moves};

/// Pick a uniformly random move for `side` among every (piece, destination)
/// pair on the board, or `None` when the side has no moves.
pub fn random_move<R: Rng + ?Sized>(board: &Board, side: Color, rng: &mut R) -> Option<Move> {
    let mut candidates = Vec::new();

    for src in Square::all() {
        let Some(piece) = board.piece_on(src) else {
            continue;
        };
        if piece.color() != side {
            continue;
        }
        for &dst in possible_moves(board, src).as_slice() {
            candidates.push(Move::new(src, dst));
        }
    }

    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use chatranj_core::{Board, Color, Piece, Square, is_legal};

    use super::random_move;

    fn sq(row: u8, col: u8) -> Square {
        Square::at(row, col).unwrap()
    }

    #[test]
    fn picked_move_is_legal() {
        let board = Board::starting_position();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let mv = random_move(&board, Color::White, &mut rng).unwrap();
            assert!(is_legal(&board, mv.source(), mv.dest(), Color::White));
        }
    }

    #[test]
    fn none_when_side_has_no_moves() {
        let mut board = Board::empty();
        board.set(sq(6, 0), Some(Piece::WHITE_PAWN));
        board.set(sq(5, 0), Some(Piece::BLACK_PAWN));
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_move(&board, Color::White, &mut rng).is_none());
    }

    #[test]
    fn single_candidate_is_forced() {
        // Push blocked, one capture available: the picker has no choice.
        let mut board = Board::empty();
        board.set(sq(5, 0), Some(Piece::WHITE_PAWN));
        board.set(sq(4, 0), Some(Piece::BLACK_PAWN));
        board.set(sq(4, 1), Some(Piece::BLACK_KNIGHT));
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = random_move(&board, Color::White, &mut rng).unwrap();
            assert_eq!(mv.source(), sq(5, 0));
            assert_eq!(mv.dest(), sq(4, 1));
        }
    }

    #[test]
    fn same_seed_same_pick() {
        let board = Board::starting_position();
        let a = random_move(&board, Color::Black, &mut StdRng::seed_from_u64(42));
        let b = random_move(&board, Color::Black, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
