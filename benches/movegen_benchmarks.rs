//! Benchmarks for move generation and perft.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_movegen::board::{
    init_attack_tables, queen_attacks, Bitboard, MoveList, Position, Square,
};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    init_attack_tables();
    let mut group = c.benchmark_group("perft");

    let startpos = Position::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let kiwipete = Position::from_fen(KIWIPETE);
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    init_attack_tables();
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", Position::new()),
        ("middlegame", Position::from_fen(MIDDLEGAME)),
        ("kiwipete", Position::from_fen(KIWIPETE)),
    ];

    for (name, position) in &positions {
        group.bench_with_input(BenchmarkId::new("pseudo_legal", name), position, |b, pos| {
            let mut moves = MoveList::new();
            b.iter(|| {
                moves.clear();
                black_box(pos.generate_pseudo_legal(&mut moves))
            })
        });
        group.bench_with_input(BenchmarkId::new("legal", name), position, |b, pos| {
            b.iter(|| black_box(pos.legal_moves()))
        });
    }

    group.finish();
}

fn bench_attacks(c: &mut Criterion) {
    init_attack_tables();
    let occupancy = Position::from_fen(KIWIPETE).all_occupied();
    c.bench_function("queen_attacks/all_squares", |b| {
        b.iter(|| {
            let mut acc = Bitboard::EMPTY;
            for idx in 0..64 {
                acc |= queen_attacks(Square::from_index(idx), black_box(occupancy));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_attacks);
criterion_main!(benches);
