use serde::Deserialize;

use chess_movegen::board::Position;

#[derive(Debug, Deserialize)]
struct PerftCase {
    name: String,
    fen: String,
    depths: Vec<(u32, u64)>,
}

fn load_cases() -> Vec<PerftCase> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/perft.json");
    let text = std::fs::read_to_string(path).expect("failed to read perft data");
    serde_json::from_str(&text).expect("failed to parse perft data")
}

#[test]
fn perft_reference_counts() {
    let cases = load_cases();
    assert!(!cases.is_empty());
    for case in &cases {
        let position = Position::try_from_fen(&case.fen)
            .unwrap_or_else(|err| panic!("{}: {err}", case.name));
        for &(depth, expected) in &case.depths {
            assert_eq!(
                position.perft(depth),
                expected,
                "{} at depth {depth}",
                case.name
            );
        }
    }
}

#[test]
fn divide_matches_perft_for_every_case() {
    for case in load_cases() {
        let position = Position::from_fen(&case.fen);
        let divide = position.perft_divide(2);
        let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
        assert_eq!(total, position.perft(2), "{}", case.name);
        assert_eq!(divide.len() as u64, position.perft(1), "{}", case.name);
    }
}
