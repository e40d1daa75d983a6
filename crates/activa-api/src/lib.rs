//! HTTP client layer for the activities API.
//!
//! Everything here is transport: session context, endpoint construction,
//! envelope decoding, and the error taxonomy for a JSON API that reports
//! failures as `{"error": string}` bodies. The matching rules themselves
//! live in `activa-core`; this crate feeds them and pushes preference
//! mutations back to the server.

pub mod client;
pub mod error;
pub mod session;
pub mod snapshot;
pub mod wire;

pub use client::{ApiClient, NewActivity};
pub use error::{ApiError, Result};
pub use session::Session;
pub use snapshot::Snapshot;
pub use wire::{LoginResponse, Profile, UserInfo};
