/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `tasks`: Task resource endpoints (create, list, get, update, delete)
/// - `auth`: Authentication endpoints (login, protected)

pub mod auth;
pub mod health;
pub mod tasks;
