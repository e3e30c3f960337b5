use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

use engine::game::{Direction, FieldSize, GameSettings, SessionRng, SnakeGameState};

fn create_state(width: usize, height: usize, initial_length: usize) -> (SnakeGameState, SessionRng) {
    let settings = GameSettings {
        field_size: FieldSize { width, height },
        initial_length,
        max_length: 10_000,
        tick_interval: Duration::from_millis(100),
    };
    let mut rng = SessionRng::from_random();
    let state = SnakeGameState::new(&settings, &mut rng);
    (state, rng)
}

fn bench_straight_run() {
    let (mut state, mut rng) = create_state(1000, 11, 5);
    while state.step(&mut rng).is_ok() {}
}

fn bench_spiral_with_turns() {
    let (mut state, mut rng) = create_state(200, 200, 50);
    let turns = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];
    let mut turn_index = 0;
    for step_count in 0..2000 {
        if step_count % 20 == 19 {
            state.set_direction(turns[turn_index % 4]);
            turn_index += 1;
        }
        if state.step(&mut rng).is_err() {
            break;
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake_step");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("straight_run_1000_cells", |b| b.iter(bench_straight_run));
    group.bench_function("spiral_2000_steps", |b| b.iter(bench_spiral_with_turns));

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
