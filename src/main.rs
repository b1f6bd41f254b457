use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fluxstore::{counter_store, CounterState, Store};

/// Initialize tracing on stderr.
///
/// Honors `RUST_LOG`; defaults to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let store = counter_store();
    report(&store, "initial")?;

    store.dispatch("increment", None)?.await?;
    report(&store, "after increment")?;

    store.dispatch("incrementIfOdd", None)?.await?;
    report(&store, "after incrementIfOdd (count was odd)")?;

    store.dispatch("incrementIfOdd", None)?.await?;
    report(&store, "after incrementIfOdd (count was even, no-op)")?;

    store.dispatch("incrementAsync", None)?.await?;
    report(&store, "after incrementAsync")?;

    store.dispatch("decrement", None)?.await?;
    report(&store, "after decrement")?;

    Ok(())
}

fn report(store: &Store<CounterState>, step: &str) -> Result<()> {
    let state = store.state();
    let parity = store.getter("evenOrOdd")?;
    println!("{step}: count = {}, evenOrOdd = {parity}", state.count);
    Ok(())
}
