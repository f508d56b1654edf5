//! Background tasks.
//!
//! Each submodule provides async work intended to be spawned via
//! `tokio::spawn` after the owning HTTP request has already responded.

pub mod import;
