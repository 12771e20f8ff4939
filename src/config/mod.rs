//! Config document model and loader.
//!
//! A config file is an ordered list of items; the order of items is the order
//! of the arguments they produce. See [`loader`] for the accepted shapes.

mod loader;
pub mod types;


// Re-export public API
pub use loader::{from_yaml, load};
pub use types::{ConfigItem, ConfigValue, DEFAULT_JOINER, Scalar};
