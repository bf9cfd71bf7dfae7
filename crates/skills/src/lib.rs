#![deny(unused)]
//! Toolset layer for Toolbridge.
//!
//! This crate provides:
//! - Config model for remote tool-server endpoints
//! - Remote pass-through toolset declaring servers for a hosted platform
//! - Local registry-backed toolset for in-process tools

pub mod local_toolset;
pub mod remote_config;
pub mod remote_toolset;

pub use local_toolset::LocalToolset;
pub use remote_config::{RemoteServerConfig, RemoteServerSet, DEFAULT_CONNECTION_TYPE};
pub use remote_toolset::RemoteToolset;
