//! Decoding of the compact board-position string.
//!
//! The encoding is the board field of a FEN record: 8 rank groups separated
//! by `/`, listed rank 8 down to rank 1, with digits compressing runs of
//! empty squares. Validation is strict; a malformed string yields no cells
//! at all rather than a partially filled board.

use thiserror::Error;

use crate::domain::chess::Piece;

/// Why a position string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} spans {files} files, expected 8")]
    RankWidth { rank: u8, files: usize },
    #[error("unrecognized character {ch:?} in rank {rank}")]
    InvalidChar { ch: char, rank: u8 },
}

/// Decode a position string into 64 cells in reading order: rank 8 first,
/// files a through h within each rank.
pub fn parse_placement(encoding: &str) -> Result<[Option<Piece>; 64], PositionError> {
    let groups: Vec<&str> = encoding.split('/').collect();
    if groups.len() != 8 {
        return Err(PositionError::RankCount(groups.len()));
    }

    let mut cells = [None; 64];
    for (row, group) in groups.iter().enumerate() {
        let rank = 8 - row as u8;
        let mut file = 0usize;
        for ch in group.chars() {
            match ch {
                '1'..='8' => file += ch as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_char(ch)
                        .ok_or(PositionError::InvalidChar { ch, rank })?;
                    if file >= 8 {
                        return Err(PositionError::RankWidth { rank, files: file + 1 });
                    }
                    cells[row * 8 + file] = Some(piece);
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(PositionError::RankWidth { rank, files: file });
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chess::{PieceColor, PieceKind};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_start_position() {
        let cells = parse_placement(START).unwrap();
        assert_eq!(cells.len(), 64);
        assert_eq!(cells.iter().filter(|c| c.is_some()).count(), 32);

        // a8 is a black rook, e1 the white king
        let a8 = cells[0].unwrap();
        assert_eq!(a8.kind, PieceKind::Rook);
        assert_eq!(a8.color, PieceColor::Black);
        let e1 = cells[60].unwrap();
        assert_eq!(e1.kind, PieceKind::King);
        assert_eq!(e1.color, PieceColor::White);
    }

    #[test]
    fn test_piece_count_matches_letters() {
        let encoding = "8/8/8/8/8/8/P7/8";
        let cells = parse_placement(encoding).unwrap();
        let letters = encoding.chars().filter(|c| c.is_ascii_alphabetic()).count();
        assert_eq!(cells.iter().filter(|c| c.is_some()).count(), letters);
    }

    #[test]
    fn test_empty_board() {
        let cells = parse_placement("8/8/8/8/8/8/8/8").unwrap();
        assert!(cells.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_split_empty_runs() {
        // digit runs may be split arbitrarily as long as the rank sums to 8
        let cells = parse_placement("44/8/8/8/8/8/8/1p6").unwrap();
        assert!(cells.iter().take(8).all(|c| c.is_none()));
        assert_eq!(cells[57].unwrap().kind, PieceKind::Pawn);
    }

    #[test]
    fn test_rejects_wrong_rank_count() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8"),
            Err(PositionError::RankCount(7))
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/8/8"),
            Err(PositionError::RankCount(9))
        );
    }

    #[test]
    fn test_rejects_short_and_long_ranks() {
        assert_eq!(
            parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN"),
            Err(PositionError::RankWidth { rank: 1, files: 7 })
        );
        assert!(matches!(
            parse_placement("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(PositionError::RankWidth { rank: 8, .. })
        ));
        // digits overshooting the rank are caught too
        assert!(matches!(
            parse_placement("8/8/8/8/8/8/44p/8"),
            Err(PositionError::RankWidth { rank: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_characters() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/x7/8"),
            Err(PositionError::InvalidChar { ch: 'x', rank: 2 })
        );
        // '9' and '0' are not valid empty-run digits
        assert_eq!(
            parse_placement("9/8/8/8/8/8/8/8"),
            Err(PositionError::InvalidChar { ch: '9', rank: 8 })
        );
        assert_eq!(
            parse_placement("08/8/8/8/8/8/8/8"),
            Err(PositionError::InvalidChar { ch: '0', rank: 8 })
        );
    }
}
