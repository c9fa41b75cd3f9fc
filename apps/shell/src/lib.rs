//! # Basket Shell
//!
//! Composition root for a Basket session: configuration, logging, the
//! session store and the command surface.
//!
//! ## Module Organization
//! ```text
//! basket_shell/
//! ├── lib.rs          ◄─── You are here (setup & demo session)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Session store + snapshot broadcast
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── list.rs     ◄─── List commands
//! │   ├── item.rs     ◄─── Item commands
//! │   ├── insight.rs  ◄─── Totals, suggestions, grouped view
//! │   └── config.rs   ◄─── Config retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use basket_core::{NewItemForm, Snapshot};
use commands::{insight, item, list};
use state::{ConfigState, StoreState};

/// Runs the demo session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • BASKET_* environment variables over defaults                      │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG if set, otherwise BASKET_LOG / info,basket=debug         │
/// │                                                                         │
/// │  3. Start Store ──────────────────────────────────────────────────────► │
/// │     • Demo lists if BASKET_SEED_DEMO (default on)                       │
/// │     • Observer task follows published snapshots                         │
/// │                                                                         │
/// │  4. Scripted Session ─────────────────────────────────────────────────► │
/// │     • add, toggle, record real price; print results as JSON            │
/// │                                                                         │
/// │  5. Shutdown ─────────────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigState::from_env()?;
    init_tracing(&config);

    info!("Starting Basket session");

    let store = StoreState::uninitialized();
    let observer = tokio::spawn(follow_snapshots(store.subscribe()));
    store.start(config.build_store());

    demo_session(&store, &config)?;

    store.shutdown();
    observer.await?;

    info!("Basket session finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=basket=trace` - Show trace for basket crates only
/// - Default: `BASKET_LOG`, else `info,basket=debug`
fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    // a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Logs every published snapshot until the store shuts down.
async fn follow_snapshots(mut rx: watch::Receiver<Option<Snapshot>>) {
    while rx.changed().await.is_ok() {
        let latest = rx.borrow_and_update().clone();
        let Some(snapshot) = latest else {
            break;
        };
        debug!(
            revision = snapshot.revision(),
            lists = snapshot.lists().len(),
            "snapshot published"
        );
    }
}

fn demo_session(store: &StoreState, config: &ConfigState) -> Result<(), Box<dyn std::error::Error>> {
    print_json("lists", &list::get_lists(store)?)?;

    let list_id = match list::get_lists(store)?.first() {
        Some(summary) => summary.id.clone(),
        None => list::add_list(store, "Weekly Market".to_string())?,
    };

    let form = NewItemForm {
        name: "Apple".to_string(),
        amount: "6".to_string(),
        category: "Fruit".to_string(),
        estimated_price: "1.25".to_string(),
    };
    if let Some(item_id) = item::add_item(store, list_id.clone(), form)? {
        item::toggle_item(store, list_id.clone(), item_id.clone())?;
        item::record_real_price(store, list_id.clone(), item_id, "1.10".to_string())?;
    }

    print_json("view", &insight::get_list_view(store, list_id.clone())?)?;
    print_json("suggestions", &insight::get_suggestions(store, list_id.clone())?)?;

    let totals = insight::get_list_totals(store, list_id)?;
    println!(
        "estimated {}  real {}  difference {}",
        config.format_currency(totals.estimated),
        config.format_currency(totals.real),
        config.format_currency(totals.difference())
    );
    Ok(())
}

fn print_json<T: Serialize>(label: &str, value: &T) -> Result<(), serde_json::Error> {
    println!("{}: {}", label, serde_json::to_string_pretty(value)?);
    Ok(())
}
