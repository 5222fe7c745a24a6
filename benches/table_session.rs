use criterion::BenchmarkId;
use criterion::Criterion;

use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_blackjack::table::RngTableSessionBuilder;
use rs_blackjack::table::SessionState;
use rs_blackjack::table::agent::FlatBetAgent;
use rs_blackjack::table::outcome::RandomOutcomeProvider;

const STARTING_BANKROLL: f64 = 1_000.0;
const ROUNDS: u32 = 100;

const WIN_PROBABILITIES: [f64; 3] = [0.4, 0.5, 0.6];

fn run_one_session(seed: u64, win_probability: f64) -> f64 {
    let game_state = SessionState::new(STARTING_BANKROLL);
    let provider = RandomOutcomeProvider::new(StdRng::seed_from_u64(seed + 1), win_probability);

    let mut session = RngTableSessionBuilder::default()
        .game_state(game_state)
        .agent(Box::new(FlatBetAgent::new(10.0).with_rounds(ROUNDS)))
        .provider(Box::new(provider))
        .rng(StdRng::seed_from_u64(seed))
        .build()
        .unwrap();
    session.run().unwrap();
    session.game_state.bankroll
}

fn bench_flat_sessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_flat_sessions");
    for win_probability in WIN_PROBABILITIES {
        group.bench_with_input(
            BenchmarkId::from_parameter(win_probability),
            &win_probability,
            |b, win_probability| {
                b.iter(|| run_one_session(420, *win_probability));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_flat_sessions);
criterion_main!(benches);
