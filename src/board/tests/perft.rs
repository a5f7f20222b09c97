//! Perft (performance test) for move generation correctness.

use crate::board::{PerftStats, Position};
use std::time::Instant;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197281)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 1 1",
        depths: &[(1, 48), (2, 2039), (3, 97862)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43238)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264), (3, 9467)],
    },
    TestPosition {
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1486), (3, 62379)],
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2079), (3, 89890)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21637)],
    },
    TestPosition {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9483)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13744)],
    },
];

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        let board = Position::from_fen(position.fen);

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = board.perft(depth);
            let duration = start.elapsed();

            println!("  {} depth {}: {} nodes in {:?}", position.name, depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_kiwipete_stats_depth_1() {
    let stats = Position::from_fen(KIWIPETE).perft_stats(1);
    assert_eq!(
        stats,
        PerftStats {
            nodes: 48,
            captures: 8,
            en_passants: 0,
            castles: 2,
            promotions: 0,
            checks: 0,
            checkmates: 0,
        }
    );
}

#[test]
fn test_kiwipete_stats_depth_2() {
    let stats = Position::from_fen(KIWIPETE).perft_stats(2);
    assert_eq!(
        stats,
        PerftStats {
            nodes: 2039,
            captures: 351,
            en_passants: 1,
            castles: 91,
            promotions: 0,
            checks: 3,
            checkmates: 0,
        }
    );
}

#[test]
fn test_start_position_stats_depth_4() {
    let stats = Position::new().perft_stats(4);
    assert_eq!(stats.nodes, 197_281);
    assert_eq!(stats.captures, 1576);
    assert_eq!(stats.en_passants, 0);
    assert_eq!(stats.castles, 0);
    assert_eq!(stats.checks, 469);
    assert_eq!(stats.checkmates, 8);
}

#[test]
fn test_promotion_position_stats() {
    // Position 4 at depth 2 has promotions and checks on both sides.
    let stats =
        Position::from_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
            .perft_stats(2);
    assert_eq!(stats.nodes, 264);
    assert_eq!(stats.captures, 87);
    assert_eq!(stats.castles, 6);
    assert_eq!(stats.promotions, 48);
    assert_eq!(stats.checks, 10);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_deep_perft() {
    assert_eq!(Position::new().perft(5), 4_865_609);
    assert_eq!(Position::from_fen(KIWIPETE).perft(4), 4_085_603);
    assert_eq!(
        Position::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").perft(5),
        674_624
    );
    assert_eq!(
        Position::from_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
            .perft(4),
        422_333
    );
    assert_eq!(
        Position::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8").perft(4),
        2_103_487
    );
}
