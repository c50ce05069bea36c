//! Dispatch benchmarks
//!
//! Measures the cost of the composition layers on top of a bare reducer:
//! - Direct reducer call vs. pulled-back reducer vs. combined pullbacks
//! - Store `send` throughput with and without observers
//!
//! Run with: `cargo bench`

#![allow(missing_docs)] // Benchmarks don't need extensive docs
#![allow(clippy::expect_used)] // Benchmarks can use expect for setup

use composable_state_core::prelude::*;
use composable_state_runtime::Store;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone, Debug, Default)]
struct BenchState {
    counter: i64,
    favorites: Vec<i64>,
    data: Vec<u8>, // For testing state size impact
}

#[derive(Clone, Debug)]
enum CounterAction {
    Increment,
}

#[derive(Clone, Debug)]
enum FavoritesAction {
    Save(i64),
}

#[derive(Clone, Debug)]
enum BenchAction {
    Counter(CounterAction),
    Favorites(FavoritesAction),
}

fn counter_reducer() -> impl Reducer<State = i64, Action = CounterAction> + Send + Sync + Clone + 'static {
    reducer::from_fn(|count: &mut i64, action: CounterAction| match action {
        CounterAction::Increment => *count += 1,
    })
}

fn favorites_reducer() -> impl Reducer<State = Vec<i64>, Action = FavoritesAction> + Send + Sync + 'static {
    reducer::from_fn(|favorites: &mut Vec<i64>, action: FavoritesAction| match action {
        FavoritesAction::Save(n) => {
            favorites.push(n);
            favorites.truncate(64);
        },
    })
}

fn counter_lens() -> Lens<BenchState, i64> {
    Lens::new(|s: &BenchState| s.counter, |s: &mut BenchState, v: i64| s.counter = v)
}

fn counter_prism() -> Prism<BenchAction, CounterAction> {
    Prism::new(
        |a: BenchAction| match a {
            BenchAction::Counter(a) => Some(a),
            BenchAction::Favorites(_) => None,
        },
        BenchAction::Counter,
    )
}

fn app_reducer() -> CombinedReducer<BenchState, BenchAction> {
    combine(vec![
        counter_reducer().pullback(counter_lens(), counter_prism()).boxed(),
        favorites_reducer()
            .pullback(
                Lens::new(
                    |s: &BenchState| s.favorites.clone(),
                    |s: &mut BenchState, v: Vec<i64>| s.favorites = v,
                ),
                Prism::new(
                    |a: BenchAction| match a {
                        BenchAction::Favorites(a) => Some(a),
                        BenchAction::Counter(_) => None,
                    },
                    BenchAction::Favorites,
                ),
            )
            .boxed(),
    ])
}

fn initial_state() -> BenchState {
    BenchState {
        data: vec![0; 1024], // 1KB of data
        ..BenchState::default()
    }
}

/// Benchmark the composition layers in isolation (no Store overhead)
fn benchmark_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");
    group.throughput(Throughput::Elements(1));

    group.bench_function("direct", |b| {
        let reducer = counter_reducer();
        let mut count = 0;
        b.iter(|| reducer.reduce(&mut count, black_box(CounterAction::Increment)));
    });

    group.bench_function("pullback", |b| {
        let reducer = counter_reducer().pullback(counter_lens(), counter_prism());
        let mut state = initial_state();
        b.iter(|| {
            reducer.reduce(&mut state, black_box(BenchAction::Counter(CounterAction::Increment)));
        });
    });

    group.bench_function("combined", |b| {
        let reducer = app_reducer();
        let mut state = initial_state();
        b.iter(|| {
            reducer.reduce(&mut state, black_box(BenchAction::Counter(CounterAction::Increment)));
        });
    });

    group.finish();
}

/// Benchmark Store throughput (actions/sec)
fn benchmark_store_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_throughput");
    group.throughput(Throughput::Elements(1));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime");

    group.bench_function("send_action", |b| {
        let store = Store::new(initial_state(), app_reducer());

        b.to_async(&runtime).iter(|| async {
            store.send(black_box(BenchAction::Counter(CounterAction::Increment))).await;
        });
    });

    group.bench_function("send_with_observer", |b| {
        let store = Store::new(initial_state(), app_reducer());
        store.observe(|state: &BenchState| {
            black_box(state.counter);
        });

        b.to_async(&runtime).iter(|| async {
            store.send(black_box(BenchAction::Favorites(FavoritesAction::Save(7)))).await;
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_composition, benchmark_store_throughput);
criterion_main!(benches);
