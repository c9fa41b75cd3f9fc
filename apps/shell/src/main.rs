//! # Basket Demo Entry Point
//!
//! Runs one scripted session against the in-memory store and prints each
//! step as JSON. The real setup lives in `lib.rs` so it stays testable.
//!
//! ## Startup Sequence
//! 1. Load configuration from `BASKET_*` variables
//! 2. Initialize tracing
//! 3. Start the store (seeded or empty)
//! 4. Run the session, then shut the store down

#[tokio::main]
async fn main() {
    if let Err(err) = basket_shell::run().await {
        eprintln!("basket: {}", err);
        std::process::exit(1);
    }
}
