//! Bounded character attributes
//!
//! An attribute is a single clamped quantity (health, stamina, ...) that
//! regenerates over time. The nine attributes of a character live in a
//! fixed-identity [`AttributeSet`].

pub mod kinds;
pub mod module;
pub mod set;

pub use kinds::{AttributeKind, PrimaryAttribute, SecondaryAttribute};
pub use module::{AttributeModule, AttributeValues};
pub use set::AttributeSet;
