//! Filesystem access for json2config
//!
//! Provides path normalization, text reads, atomic line writes and
//! extension-filtered directory listings.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::LineEnding;
pub use path::NormalizedPath;
pub use store::{FsStore, TextStore};
