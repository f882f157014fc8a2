//! Mod Sync library
//!
//! This module exposes the core functionality for use in integration tests
//! and the main binary.

// Public modules for integration testing
pub mod config;
pub mod error;
pub mod logging;
pub mod sftp;
pub mod sync;
pub mod validation;

// Public modules for the binary
pub mod app;

// Internal modules
pub(crate) mod message;
pub(crate) mod security_log;
pub(crate) mod theme;
pub(crate) mod views;
