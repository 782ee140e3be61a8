//! # Stockpad Architecture
//!
//! Stockpad is a **UI-agnostic inventory library**: a small list of products
//! (name, description, price, quantity, image) edited through two forms and
//! kept in one local storage slot. The bundled CLI is one client; the same
//! core could drive a browser page or a TUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints notices and rendered lists      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns all state: store, slot, forms, view, notifier       │
//! │  - Sequences flows: mutate → persist → render → notify      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, mutation and persistence for one action      │
//! │  - Returns `CmdResult` with affected products and messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store + Slot (inventory.rs, store/)                        │
//! │  - ProductStore: ordered collection and edit cursor         │
//! │  - ProductSlot: FileSlot (production), MemorySlot (tests)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns `Result`s. It
//! never prints and never exits. Notifications and view regions are plain
//! state that a client reads and displays however it likes.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and **store**: unit tests against `MemorySlot`.
//! 2. **API**: whole flows (create, edit, cancel, delete, dispatch).
//! 3. **CLI**: end-to-end through the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and form controller
//! - [`commands`]: Business logic for each action
//! - [`inventory`]: The in-memory product store
//! - [`store`]: Persistence slot abstraction and implementations
//! - [`model`]: Core data types (`Product`, `ProductDraft`, `ProductId`)
//! - [`validation`]: The shared form validation rule
//! - [`render`]: Card projection and templated terminal output
//! - [`notify`]: Auto-hiding notifications
//! - [`view`]: View-region state machine
//! - [`config`]: Display configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod notify;
pub mod render;
pub mod store;
pub mod validation;
pub mod view;
