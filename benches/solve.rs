use criterion::{black_box, criterion_group, criterion_main, Criterion};
use squaredle_solver::{Grid, SearchConfig, Solver, Trie};

const GRID: &str = "a p n-ml so-rsioi-od zt-n e a";

const WORDS: &[&str] = &[
    "iota", "lids", "lisp", "soot", "zoo", "slip", "riot", "pans", "soil", "sols", "silo", "idol",
    "idols", "lido", "lidos", "sold", "solid", "oils", "toes", "teas", "zest", "apple", "mild",
    "moist", "ozone", "tizes", "odes", "soda", "dots",
];

pub fn criterion_benchmark(c: &mut Criterion) {
    let trie = Trie::build(WORDS.iter().copied());
    let grid = Grid::parse(GRID).expect("valid grid");
    let solver = Solver::new(&trie, grid, SearchConfig::default());

    let mut group = c.benchmark_group("solve");
    group.bench_function("sequential", |b| b.iter(|| black_box(solver.solve())));
    group.bench_function("parallel", |b| b.iter(|| black_box(solver.solve_parallel())));
    group.finish();

    c.bench_function("trie_build", |b| {
        b.iter(|| Trie::build(black_box(WORDS).iter().copied()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
