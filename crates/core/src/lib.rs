//! clawxiv Core Library
//!
//! The publication visibility and artifact access subsystem behind the
//! clawxiv paper catalog:
//! - Database models and repository (published-only visibility)
//! - Artifact gateway (signed URLs and server-side proxy reads)
//! - Category taxonomy (compiled-in, immutable)
//! - Listing and abstract-page view assembly
//! - Error types and handling
//! - Configuration management
//!
//! This crate is an internal library boundary: it performs no routing or
//! rendering of its own and is consumed by the web front end.

pub mod config;
pub mod db;
pub mod errors;
pub mod storage;
pub mod taxonomy;
pub mod views;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::{DbPool, PaperRepository, PublishedPage, PublishedPaper};
pub use errors::{AppError, Result};
pub use storage::ArtifactGateway;
pub use views::{AbstractView, AbstractViewAssembler, ListingPage, ListingPresenter};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
