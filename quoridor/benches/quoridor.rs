use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quoridor::{movegen, moves, path, Board, Coord, Fence, Game, Player, RawBoard};

const BOARDS: [(&str, &str, &str, &str); 4] = [
    ("initial", "e1", "e9", ""),
    ("face_to_face", "e5", "e6", "e7h d6v"),
    (
        "corridor",
        "a1",
        "i9",
        "a5h b5h c5h d5h e5h f5h g5h h5h b2v c3v d4v f6v g7v h8v",
    ),
    (
        "maze",
        "e3",
        "d7",
        "b3h c3h f3h g3h c5v f5v b7h c7h f7h g7h e4v e6v d2v d8v h4h",
    ),
];

fn boards() -> impl Iterator<Item = (&'static str, Board)> {
    BOARDS.iter().map(|&(name, one, two, fences)| {
        let mut raw = RawBoard::initial();
        raw.pawns = [one.parse().unwrap(), two.parse().unwrap()];
        for fence in fences.split_whitespace() {
            raw.put(fence.parse::<Fence>().unwrap());
        }
        (name, raw.try_into().unwrap())
    })
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for p in Player::iter() {
                    black_box(path::distance(&board, board.pawn(p), p.goal_row()));
                }
            })
        });
    }
}

fn bench_validate_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_move");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for target in Coord::iter() {
                    black_box(moves::validate(&board, Player::One, target).is_ok());
                }
            })
        });
    }
}

fn bench_gen_pawn_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_pawn_moves");
    for (name, board) in boards() {
        let game = Game::from_board(board, Player::One);
        group.bench_function(name, |b| {
            b.iter(|| black_box(movegen::pawn_moves(&game).len()))
        });
    }
}

fn bench_gen_fences(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_fences");
    for (name, board) in boards() {
        let game = Game::from_board(board, Player::One);
        group.bench_function(name, |b| b.iter(|| black_box(movegen::fences(&game).len())));
    }
}

criterion_group!(
    quoridor,
    bench_distance,
    bench_validate_move,
    bench_gen_pawn_moves,
    bench_gen_fences,
);

criterion_main!(quoridor);
