use criterion::{Criterion, criterion_group, criterion_main};
use tidetiles_core::{Direction, GameConfig, GameEngine, RandomSpawner};

fn queue_and_process(c: &mut Criterion) {
    c.bench_function("process_100_queued_moves_4x4", |b| {
        b.iter(|| {
            let mut engine =
                GameEngine::new(GameConfig::new(4, 2048), RandomSpawner::new(42), ());
            engine.new_game(0);
            for i in 0..100u32 {
                engine.queue_move(Direction::ALL[(i % 4) as usize]);
            }
            engine.process_queue();
            engine.score()
        })
    });
}

criterion_group!(benches, queue_and_process);
criterion_main!(benches);
