//! Read-only document model supplied by the host.
//!
//! The core does not lex or parse text. Instead, the host lowers its own
//! syntax tree into this shape once per fix invocation:
//! - [`ImportDirective`] for each import statement, in document order
//! - [`NameRef`] for each name-reference node a diagnostic may point at
//!
//! Everything here is an immutable value; the only "edit" is
//! [`SourceDocument::with_appended_imports`], which returns a new document.

mod document;

pub use document::{
    ImportDirective, NameRef, NameRefKind, SourceDocument, is_identifier,
};
