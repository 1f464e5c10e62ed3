//! Criterion benchmarks for the timetabling solver.
//!
//! Uses synthetic instances scaled by group count to measure end-to-end
//! solve time: validation, compilation, and search together.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_timetable::{solve, Problem, SolverConfig};

/// Builds an instance with `groups` groups of 3 courses each, a
/// dedicated pair of teachers per group, and one classroom per group.
fn synthetic_problem(groups: usize) -> Problem {
    let mut problem = Problem::new().with_classrooms(groups as u32);
    for g in 0..groups {
        let courses: Vec<String> = (0..3).map(|c| format!("g{g}_c{c}")).collect();
        problem = problem
            .with_group(format!("g{g}"), courses.clone())
            .with_teacher(format!("g{g}_t0"), courses[..2].to_vec())
            .with_teacher(format!("g{g}_t1"), courses[1..].to_vec());
    }
    problem
}

fn bench_solve(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for &groups in &[1usize, 4, 8] {
        let problem = synthetic_problem(groups);
        let config = SolverConfig::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(groups),
            &(problem, config),
            |b, (problem, config)| {
                b.iter(|| {
                    let result = solve(black_box(problem), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
