mod test_utils;

use mailbox_chess::{position::Position, types::Side};
use test_utils::*;

const KIWIPETE: [&str; 8] = [
    "r...k..r",
    "p.ppqpb.",
    "bn..pnp.",
    "...PN...",
    ".p..P...",
    "..N..Q.p",
    "PPPBBPPP",
    "R...K..R",
];

#[test]
fn test_perft_starting_position() {
    let position = Position::new();

    let expected = [(1, 20), (2, 400), (3, 8_902)];

    for (depth, nodes) in expected {
        assert_eq!(
            perft(&position, Side::White, depth),
            nodes,
            "Perft mismatch at depth {}",
            depth
        );
    }
}

#[test]
fn test_perft_kiwipete() {
    // Castling, pins and en passant all in play
    let position = position_from_diagram(KIWIPETE);

    assert_eq!(perft(&position, Side::White, 1), 48);
    assert_eq!(perft(&position, Side::White, 2), 2_039);
}

#[test]
fn test_perft_en_passant_and_promotion() {
    // Position 3 of the standard perft suite
    let position = position_from_diagram([
        "........",
        "..p.....",
        "...p....",
        "KP.....r",
        ".R...p.k",
        "........",
        "....P.P.",
        "........",
    ]);

    assert_eq!(perft(&position, Side::White, 1), 14);
    assert_eq!(perft(&position, Side::White, 2), 191);
    assert_eq!(perft(&position, Side::White, 3), 2_812);
}
