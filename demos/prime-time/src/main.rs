//! Prime Time binary
//!
//! Drives the app store through a scripted session and prints what a UI
//! would show.

use composable_state_core::environment::SystemClock;
use composable_state_runtime::{Store, StoreConfig};
use prime_time::primes::is_prime;
use prime_time::{AppAction, AppState, CounterAction, FavoritePrimesAction, PrimeModalAction, app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prime_time=debug,composable_state_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    composable_state_runtime::metrics::describe_metrics();

    println!("=== Prime Time ===\n");

    let store = Store::with_config(
        AppState::default(),
        app::app_reducer(SystemClock),
        StoreConfig::default().with_name("prime-time"),
    );

    let printer = store.observe(|state: &AppState| {
        println!(
            "  count: {:<4} favorites: {:?}",
            state.count, state.favorite_primes
        );
    });

    // Count up, saving every prime we pass
    for _ in 0..7 {
        store.send(AppAction::Counter(CounterAction::IncrementTapped)).await;

        let count = store.state(|s| s.count).await;
        if is_prime(count) {
            println!(">>> {count} is prime, saving");
            store
                .send(AppAction::PrimeModal(PrimeModalAction::SaveFavoritePrimeTapped))
                .await;
        }
    }

    // Changed our mind about 7
    println!(">>> Removing the current number");
    store
        .send(AppAction::PrimeModal(PrimeModalAction::RemoveFavoritePrimeTapped))
        .await;

    // Swipe-to-delete the first and third favorites
    println!(">>> Deleting favorites at positions 0 and 2");
    store
        .send(AppAction::FavoritePrimes(FavoritePrimesAction::DeleteFavoritePrimes(
            [0, 2].into(),
        )))
        .await;

    store.unobserve(printer)?;

    println!("\nActivity feed:");
    for activity in store.state(|s| s.activity_feed.clone()).await {
        println!("  {}  {:?}", activity.timestamp.format("%H:%M:%S%.3f"), activity.kind);
    }

    Ok(())
}
