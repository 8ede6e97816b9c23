//! Display generation for the board grid.
//!
//! This module transforms board state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::models::board::{BoardModel, SelectionState};
use crate::ui::assets::PieceAssets;
use crate::ui::gateway::InteractionGateway;
use crate::ui::theme::{BoardConfig, is_dark};
use crate::ui::view_models::SquareView;

/// Build the per-square view models in render order.
///
/// Recompute whenever the snapshot, selection, orientation, or drag session
/// changes; the result is a pure function of those inputs.
pub fn square_views(
    board: &BoardModel,
    gateway: &InteractionGateway,
    config: &BoardConfig,
    assets: &PieceAssets,
) -> Vec<SquareView> {
    let index = board.index();
    let selected_from = match board.selection() {
        SelectionState::Selected { from } => Some(*from),
        _ => None,
    };
    let promotion = match board.selection() {
        SelectionState::PendingPromotion { to, candidates, .. } => {
            candidates.first().map(|mv| (*to, mv.color))
        }
        _ => None,
    };
    let drag_from = gateway.drag_source();

    // coordinate labels hug the visual edges, which move with orientation
    let left_file = if board.is_flipped() { 'h' } else { 'a' };
    let bottom_rank = if board.is_flipped() { 8 } else { 1 };

    board
        .squares()
        .iter()
        .map(|&square| {
            let id = square.id;
            let highlighted = selected_from
                .is_some_and(|from| !index.moves_between(from, id).is_empty());
            let droppable = drag_from
                .is_some_and(|from| !index.moves_between(from, id).is_empty());
            SquareView {
                square,
                is_dark: is_dark(id),
                piece_image: square.piece.map(|p| assets.path(p).to_string()),
                draggable: index.is_source(id),
                highlighted,
                droppable,
                promotion_prompt: promotion
                    .and_then(|(to, color)| (to == id).then_some(color)),
                rank_label: (config.show_coordinates && id.file() == left_file)
                    .then(|| id.rank()),
                file_label: (config.show_coordinates && id.rank() == bottom_rank)
                    .then(|| id.file()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Move, PieceColor, PromotionPiece, SquareId};
    use crate::models::snapshot::Snapshot;
    use crate::ui::gateway::PointerEvent;

    fn sq(s: &str) -> SquareId {
        s.parse().unwrap()
    }

    fn pawn_board() -> BoardModel {
        let moves = vec![
            Move::new(sq("a2"), sq("a3"), PieceColor::White),
            Move::new(sq("a2"), sq("a4"), PieceColor::White),
        ];
        let mut board = BoardModel::new();
        board
            .replace_snapshot(Snapshot::new("8/8/8/8/8/8/P7/8", moves, 1))
            .unwrap();
        board
    }

    fn views(board: &BoardModel, gateway: &InteractionGateway) -> Vec<SquareView> {
        square_views(
            board,
            gateway,
            &BoardConfig::default(),
            &PieceAssets::default(),
        )
    }

    fn view<'a>(views: &'a [SquareView], id: &str) -> &'a SquareView {
        let id = sq(id);
        views.iter().find(|v| v.square.id == id).unwrap()
    }

    #[test]
    fn test_highlights_follow_selection() {
        let mut board = pawn_board();
        let gateway = InteractionGateway::new();

        let before = views(&board, &gateway);
        assert!(before.iter().all(|v| !v.highlighted));
        assert!(view(&before, "a2").draggable);
        assert!(!view(&before, "b2").draggable);

        board.select_square(sq("a2"));
        let after = views(&board, &gateway);
        for v in &after {
            let expected = v.square.id == sq("a3") || v.square.id == sq("a4");
            assert_eq!(v.highlighted, expected, "square {}", v.square.id);
        }
    }

    #[test]
    fn test_droppable_follows_drag_session() {
        let mut board = pawn_board();
        let mut gateway = InteractionGateway::new();
        gateway.handle(PointerEvent::DragStart(sq("a2")), &mut board);

        let views = views(&board, &gateway);
        assert!(view(&views, "a3").droppable);
        assert!(view(&views, "a4").droppable);
        assert!(!view(&views, "b3").droppable);
    }

    #[test]
    fn test_promotion_prompt_anchors_on_destination() {
        let moves: Vec<Move> = PromotionPiece::ALL
            .iter()
            .map(|&p| Move::new(sq("e7"), sq("e8"), PieceColor::White).with_promotion(p))
            .collect();
        let mut board = BoardModel::new();
        board
            .replace_snapshot(Snapshot::new("8/4P3/8/8/8/8/8/8", moves, 1))
            .unwrap();
        board.select_square(sq("e7"));
        board.select_square(sq("e8"));

        let gateway = InteractionGateway::new();
        let views = views(&board, &gateway);
        assert_eq!(
            view(&views, "e8").promotion_prompt,
            Some(PieceColor::White)
        );
        assert!(views
            .iter()
            .filter(|v| v.square.id != sq("e8"))
            .all(|v| v.promotion_prompt.is_none()));
    }

    #[test]
    fn test_coordinate_labels_hug_visual_edges() {
        let mut board = pawn_board();
        let gateway = InteractionGateway::new();

        let unflipped = views(&board, &gateway);
        assert_eq!(view(&unflipped, "a4").rank_label, Some(4));
        assert_eq!(view(&unflipped, "b4").rank_label, None);
        assert_eq!(view(&unflipped, "c1").file_label, Some('c'));
        assert_eq!(view(&unflipped, "c2").file_label, None);

        board.set_flipped(true);
        let flipped = views(&board, &gateway);
        assert_eq!(view(&flipped, "h4").rank_label, Some(4));
        assert_eq!(view(&flipped, "a4").rank_label, None);
        assert_eq!(view(&flipped, "c8").file_label, Some('c'));
        assert_eq!(view(&flipped, "c1").file_label, None);
    }

    #[test]
    fn test_labels_disabled_by_config() {
        let board = pawn_board();
        let gateway = InteractionGateway::new();
        let config = BoardConfig {
            show_coordinates: false,
            ..BoardConfig::default()
        };
        let views = square_views(&board, &gateway, &config, &PieceAssets::default());
        assert!(views.iter().all(|v| v.rank_label.is_none() && v.file_label.is_none()));
    }

    #[test]
    fn test_piece_images_resolve_through_assets() {
        let board = pawn_board();
        let gateway = InteractionGateway::new();
        let views = views(&board, &gateway);
        assert_eq!(
            view(&views, "a2").piece_image.as_deref(),
            Some("assets/cases/wp.png")
        );
        assert_eq!(view(&views, "a3").piece_image, None);
    }
}
