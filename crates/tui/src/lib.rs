//! `stocktally-tui`
//!
//! **Responsibility:** terminal front end for the inventory calculator.
//!
//! Model-View-Intent loop:
//!
//! ```text
//! key ──→ Intent ──→ reduce(AppState) ──→ InventoryView ──→ draw
//!  ↑                                                          │
//!  └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The domain (`stocktally-inventory`) never sees a key press; this crate
//! never does arithmetic.

pub mod app;
pub mod config;
pub mod input;
pub mod intent;
pub mod reducer;
pub mod render;
pub mod state;
pub mod terminal;

pub use app::{App, run};
pub use config::{Config, ConfigError};
pub use intent::Intent;
pub use state::{AppState, Focus};
