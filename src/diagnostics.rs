//! Diagnostic values supplied by the host compiler.
//!
//! The fixer never produces diagnostics; it consumes a read-only stream of
//! them and reacts to the categories listed in [`DiagnosticCategories`].

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::TextRange;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// Category codes for the diagnostics the batch fixer recognizes.
pub mod codes {
    /// A type or namespace name could not be found.
    pub const UNRESOLVED_TYPE: &str = "E0001";
    /// A name does not exist in the current context.
    ///
    /// Broader than [`UNRESOLVED_TYPE`]: it also matches bare unresolved
    /// identifiers, not just type usages.
    pub const UNRESOLVED_NAME: &str = "E0002";
}

/// A diagnostic reported against one document.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Category code (e.g. [`codes::UNRESOLVED_TYPE`]).
    pub code: SmolStr,
    /// The span the diagnostic points at.
    pub range: TextRange,
    /// Severity level.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: impl Into<SmolStr>, range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            code: code.into(),
            range,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(
        code: impl Into<SmolStr>,
        range: TextRange,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            code: code.into(),
            range,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// The set of category codes the batch fixer reacts to.
///
/// The default covers the two unresolved-name categories in [`codes`].
/// Hosts with their own numbering supply a replacement set.
#[derive(Clone, Debug)]
pub struct DiagnosticCategories {
    codes: FxHashSet<SmolStr>,
}

impl DiagnosticCategories {
    /// Build a category set from explicit codes.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `code` is a recognized category.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Number of recognized categories.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether no categories are recognized.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for DiagnosticCategories {
    fn default() -> Self {
        Self::new([codes::UNRESOLVED_TYPE, codes::UNRESOLVED_NAME])
    }
}
