//! Common types and utilities for the tsz TypeScript compiler.
//!
//! This crate provides foundational types used across the tsz crates:
//! - Diagnostic types for non-fatal warnings raised during translation

// Diagnostic types
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation};
