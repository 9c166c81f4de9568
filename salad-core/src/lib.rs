//! Word salad generation library.
//!
//! This crate turns a user-supplied bank of words into random text:
//! - Bank normalization (split, trim, lower-case, deduplicate)
//! - Random word runs and pseudo-sentences drawn from the bank
//! - A ceiling on the requested count, checked before any draw
//! - Boundary parsing of raw form values into typed requests
//!
//! Rendering is left to the caller: every outcome is returned as a plain
//! value, never as a fault.

/// Word bank normalization.
pub mod bank;

/// Typed generation request (count, mode, sentence length, ceiling).
pub mod request;

/// Salad generation and its result type.
pub mod generator;

/// Boundary parsing of raw, external form values.
///
/// Converts free-form strings into typed values exactly once.
pub mod form;

/// Error types for request construction and boundary parsing.
pub mod error;
