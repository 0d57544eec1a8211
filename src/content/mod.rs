//! Content loading
//!
//! Ability catalogs are fixed at build time but their definitions are
//! data, not code; this module reads them from TOML files. Built-in
//! defaults are used when no content file is supplied.

pub mod loader;

pub use loader::{load_ability_catalog, parse_ability_catalog};
