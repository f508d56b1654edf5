//! In-memory access layer for the PMIS backend.
//!
//! The sole path to entity state. [`mem::MemStore`] owns one table per
//! entity type; callers construct an instance explicitly and share it via
//! `Arc`, which keeps tests isolated and leaves room to swap in a
//! persistent engine later without touching the HTTP layer.

pub mod mem;
pub mod models;

pub use mem::MemStore;
