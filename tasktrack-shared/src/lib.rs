//! # TaskTrack Shared Library
//!
//! This crate contains the types and data access shared between the
//! TaskTrack API server and its administrative tooling.
//!
//! ## Module Organization
//!
//! - `models`: Database models and data structures
//! - `auth`: JWT token generation and validation
//! - `db`: Connection pool and schema management

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the TaskTrack shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
