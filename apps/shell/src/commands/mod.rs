//! # Commands Module
//!
//! Everything the presentation layer may call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── list.rs     ◄─── Create, remove, read lists
//! ├── item.rs     ◄─── Add, toggle, patch items; record real price
//! ├── insight.rs  ◄─── Totals, suggestions, grouped view
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  add_item(&store, list_id, form)                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  form.into_new_item()?        ◄── ValidationError ──► VALIDATION_ERROR  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  store.with_store_mut(..)?    ◄── not started ──────► NOT_INITIALIZED   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ListStore::add_item          ──► new snapshot published to observers   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Ok(Some(item_id))  or  Ok(None) for an unknown list                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns `Result<_, ApiError>` and serializes to camelCase
//! JSON.

pub mod config;
pub mod insight;
pub mod item;
pub mod list;
