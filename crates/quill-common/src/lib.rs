//! Common types and utilities for the Quill type checker.
//!
//! This crate provides foundational types used across all quill crates:
//! - String interning (`Atom`, `Interner`)

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};
