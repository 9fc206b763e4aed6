//! # importfix-base
//!
//! Core library for unresolved-name diagnostics, namespace search, and
//! batch import fixes.
//!
//! Given a document whose diagnostics report names the compiler could not
//! bind, the crate finds which namespaces declare matching public types
//! across every referenced library and plans one edit that adds all the
//! missing import directives at once.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide         → the import-fix feature (collector, planner, pipeline)
//!   ↓
//! symbols     → symbol universe + namespace search
//!   ↓
//! diagnostics → diagnostic values and category configuration
//!   ↓
//! syntax      → read-only document model (imports, name references)
//!   ↓
//! base        → primitives (FileId, TextRange, TextSize)
//! ```
//!
//! The crate has no I/O and no shared mutable state: every input is an
//! immutable snapshot supplied by the host, and the only output is a new
//! document value.

/// Foundation types: FileId, TextRange, TextSize
pub mod base;

/// Diagnostic values and the recognized category set
pub mod diagnostics;

/// The batch import-fix feature
pub mod ide;

/// Symbol universe and namespace search
pub mod symbols;

/// Read-only document model supplied by the host
pub mod syntax;

// Re-export foundation types
pub use base::{FileId, TextRange, TextSize};

// Re-export the document-level entry point
pub use ide::add_missing_imports;
