#![deny(unused)]
//! Core types, traits, and error definitions for Toolbridge.
//!
//! This crate provides the foundational building blocks shared across the
//! toolset layers: the error taxonomy, tool data types, the toolset
//! capability traits, and the feature-annotation utility.

pub mod error;
pub mod features;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use features::{FeatureDecorator, FeatureTarget, Flagged, EXPERIMENTAL, WORK_IN_PROGRESS};
pub use traits::*;
pub use types::*;
