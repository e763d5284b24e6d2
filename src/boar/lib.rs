//! # Boar Architecture
//!
//! Boar (Book Of All References) keeps a personal book of references: categories holding
//! items, each with an optional description and link. The library holds the whole
//! application; the `boar` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders, maps exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads book + config, dispatches, runs the save protocol  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Book in, new book (or error) out                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + History (history.rs)              │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! │  - Tome rotation for undo                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api.rs` inward prints or exits. Errors travel up as [`error::BoarError`]
//! and the binary's `main` is the only place that turns them into output and exit codes.
//!
//! ## Identifiers
//!
//! Entries have no stored ids. Categories are addressed by position or short code, items by
//! position or name, always against the current book. See [`index`].
//!
//! ## Modules
//!
//! - [`model`]: `Book`, `Category`, `Item` and their validation rules
//! - [`index`]: token resolution and display ids
//! - [`commands`]: one module per operation
//! - [`history`]: snapshots ("tomes") and undo
//! - [`store`]: persistence
//! - [`config`]: user options
//! - [`init`]: data directory discovery and context setup

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod index;
pub mod init;
pub mod model;
pub mod store;
