//! Shared test utilities for the json2config workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`] - sample database dumps and channel-link exports
//! - [`items_dir`] - [`ItemsDir`] builder for temporary `.items` directories
//! - [`store`] - [`MemoryStore`], an in-memory `TextStore`

pub mod fixtures;
pub mod items_dir;
pub mod store;

pub use items_dir::ItemsDir;
pub use store::MemoryStore;
