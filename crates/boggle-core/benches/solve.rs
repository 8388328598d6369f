use boggle_core::{PrefixIndex, Solver, SolverConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const WORDS: &[&str] = &[
    "able", "acre", "aloe", "also", "alter", "ant", "ants", "are", "area", "ate", "bale",
    "bear", "beast", "beat", "best", "bet", "bets", "lane", "last", "late", "lean", "least",
    "lens", "let", "lets", "near", "neat", "nest", "net", "nets", "note", "notes", "quest",
    "quiet", "quilt", "quit", "rain", "rant", "rate", "rest", "sale", "salt", "sane", "sat",
    "seal", "seat", "sent", "set", "slat", "slate", "stale", "star", "stare", "steal", "stern",
    "tale", "tan", "tear", "tea", "ten", "tens", "tern", "toe", "ton", "tone", "tones",
];

const BOARDS: &[(&str, usize, usize, &str)] = &[
    ("4x4", 4, 4, "saltreanbotequis"),
    ("5x5", 5, 5, "stalebeartonesquilratenas"),
];

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_index", |b| {
        b.iter(|| PrefixIndex::build(WORDS.iter().copied()))
    });
}

fn bench_solve(c: &mut Criterion) {
    let mut solver = Solver::with_config(SolverConfig::default());
    solver.set_legal_words(WORDS.iter().copied());

    let mut group = c.benchmark_group("solve_board");
    for &(name, w, h, letters) in BOARDS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &letters, |b, letters| {
            b.iter(|| solver.solve_board(w, h, letters).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_solve);
criterion_main!(benches);
