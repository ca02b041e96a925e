//! Core components of the `ratenews-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`NewsClient`] and its builder.
//! - The primary [`NewsError`] type.
//! - The shared [`NewsItem`] model.
//! - The short-TTL result cache and the retry policy.

/// The main client (`NewsClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`NewsError`) for the crate.
pub mod error;
/// Shared data models surfaced to callers.
pub mod models;

pub(crate) mod cache;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{Backoff, NewsClient, NewsClientBuilder, RetryConfig};
pub use error::NewsError;
pub use models::NewsItem;
