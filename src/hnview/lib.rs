//! # hnview Architecture
//!
//! hnview is a Hacker News search viewer. The library holds everything except the
//! terminal: state, fetching, persistence and the commands. The binary only parses
//! arguments and prints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, renders the view, runs the browse loop │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - search, dismiss, query, config                           │
//! │  - Return CmdResult, never print                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  SearchController (controller.rs)                           │
//! │  - Owns SearchState, the remembered query, the query URL    │
//! │  - Fetch sequence on explicit submit only                   │
//! └─────────────────────────────────────────────────────────────┘
//!                │                                │
//!                ▼                                ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  StoryFetcher (fetch.rs)      │ │  KeyValueStore (store/)   │
//! │  HttpFetcher / StubFetcher    │ │  FileStore / InMemoryStore│
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## State
//!
//! [`state::SearchState`] is changed only by [`state::SearchState::reduce`]. The
//! controller is the only caller. See the `state` module for the transitions.
//!
//! ## Testing Strategy
//!
//! 1. **State** (`state.rs`): the reducer and its invariants, no I/O at all.
//! 2. **Controller and commands**: `StubFetcher` plus `InMemoryStore`, so no network or
//!    filesystem is touched.
//! 3. **Stores and config**: against a `tempfile` directory.
//! 4. **HTTP and CLI** (`tests/`): a local axum server for `HttpFetcher`, `assert_cmd`
//!    for the binary.
//!
//! ## Module Overview
//!
//! - [`controller`]: the search controller
//! - [`state`]: view state and transitions
//! - [`model`]: `Story` and `StoryId`
//! - [`fetch`]: query URLs and the fetcher trait
//! - [`persisted`]: a single value backed by a store
//! - [`store`]: storage abstraction and implementations
//! - [`commands`]: operations offered to the CLI
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod model;
pub mod persisted;
pub mod state;
pub mod store;
