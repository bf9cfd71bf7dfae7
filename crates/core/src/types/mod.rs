//! Core type definitions for Toolbridge.

pub mod context;
pub mod tool;

pub use context::*;
pub use tool::*;
