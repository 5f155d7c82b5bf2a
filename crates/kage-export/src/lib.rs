//! kage-export: Pure format serializers for kage output (sans-IO).
//!
//! Serializers take structured pipeline output and return a `String`;
//! all filesystem/stdout interaction lives in the `kage` binary.

pub mod overrides;

pub use overrides::{OverrideEntry, to_overrides};
