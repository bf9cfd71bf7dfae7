//! Core traits for Toolbridge.
//!
//! - `toolset`: the tool and toolset capability traits implemented by both
//!   local-execution and remote pass-through variants.

pub mod toolset;

pub use toolset::*;
