//! # State Module
//!
//! Session state handed to every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │        StoreState            │  │        ConfigState           │    │
//! │  │                              │  │                              │    │
//! │  │  Arc<Mutex<Option<           │  │  seed_demo                   │    │
//! │  │      ListStore>>>            │  │  recency_days                │    │
//! │  │  watch::Sender<Snapshot>     │  │  currency_symbol             │    │
//! │  │                              │  │  log_filter                  │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: Mutex for exclusive access, watch for observers         │
//! │  • ConfigState: Read-only after loading                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{ConfigError, ConfigState, DEFAULT_LOG_FILTER};
pub use store::StoreState;
