//! Document values: import directives and name references.

use smol_str::SmolStr;

use crate::base::{FileId, TextRange, TextSize};

/// Check that `text` is a well-formed identifier (XID start + continue).
///
/// Hosts are expected to hand the core real identifier tokens; this guard
/// catches lowerings that accidentally pass a whole expression instead.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if unicode_ident::is_xid_start(c) => {}
        _ => return false,
    }
    chars.all(unicode_ident::is_xid_continue)
}

/// An import statement bringing a namespace into unqualified scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDirective {
    /// The imported namespace, fully qualified (e.g. "System.Text.Json").
    target: SmolStr,
    /// The directive's span in the original source, empty for synthesized ones.
    range: TextRange,
    /// Marks a directive the downstream formatter must place and reflow.
    needs_reflow: bool,
}

impl ImportDirective {
    /// An import directive that already exists in the source text.
    pub fn existing(target: impl Into<SmolStr>, range: TextRange) -> Self {
        Self {
            target: target.into(),
            range,
            needs_reflow: false,
        }
    }

    /// A directive produced by a fix. It has no source span yet; the
    /// formatter decides where it lands.
    pub fn synthesized(target: impl Into<SmolStr>) -> Self {
        Self {
            target: target.into(),
            range: TextRange::empty(TextSize::from(0)),
            needs_reflow: true,
        }
    }

    /// The imported namespace string.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The directive's span in the original source.
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Whether the downstream formatter must place this directive.
    pub fn needs_reflow(&self) -> bool {
        self.needs_reflow
    }
}

/// The syntactic shape of a name reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NameRefKind {
    /// A bare identifier, e.g. `Console`.
    Simple,
    /// An identifier followed by a type-argument list, e.g.
    /// `ConcurrentDictionary<string, string>`.
    Generic,
}

/// A name-reference node in the document.
///
/// For a generic reference, `ident` is the base identifier alone; the
/// range still covers the whole node including type arguments, because
/// that is the span diagnostics report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameRef {
    ident: SmolStr,
    range: TextRange,
    kind: NameRefKind,
}

impl NameRef {
    /// A simple name reference.
    pub fn simple(ident: impl Into<SmolStr>, range: TextRange) -> Self {
        let ident = ident.into();
        debug_assert!(is_identifier(&ident), "not an identifier: {ident:?}");
        Self {
            ident,
            range,
            kind: NameRefKind::Simple,
        }
    }

    /// A generic name reference. `ident` is the base identifier without
    /// its type arguments; `range` covers the whole node.
    pub fn generic(ident: impl Into<SmolStr>, range: TextRange) -> Self {
        let ident = ident.into();
        debug_assert!(is_identifier(&ident), "not an identifier: {ident:?}");
        Self {
            ident,
            range,
            kind: NameRefKind::Generic,
        }
    }

    /// The identifier text, excluding any type arguments.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The node's span in the source.
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// The syntactic shape of this reference.
    pub fn kind(&self) -> NameRefKind {
        self.kind
    }
}

/// A read-only snapshot of one document, lowered by the host.
///
/// Holds the existing import list in document order and the
/// name-reference nodes diagnostics may point at. Constructed fresh per
/// fix invocation and discarded afterward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDocument {
    file: FileId,
    imports: Vec<ImportDirective>,
    name_refs: Vec<NameRef>,
}

impl SourceDocument {
    /// Create an empty document snapshot.
    pub fn new(file: FileId) -> Self {
        Self {
            file,
            imports: Vec::new(),
            name_refs: Vec::new(),
        }
    }

    /// Add an existing import directive (builder style, document order).
    pub fn with_import(mut self, import: ImportDirective) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a name-reference node (builder style).
    pub fn with_name_ref(mut self, name_ref: NameRef) -> Self {
        self.name_refs.push(name_ref);
        self
    }

    /// The document this snapshot was taken from.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Existing import directives, in document order.
    pub fn imports(&self) -> &[ImportDirective] {
        &self.imports
    }

    /// All name-reference nodes.
    pub fn name_refs(&self) -> &[NameRef] {
        &self.name_refs
    }

    /// Whether an import directive for `target` already exists.
    ///
    /// Exact string match against the directive's target name.
    pub fn has_import(&self, target: &str) -> bool {
        self.imports.iter().any(|i| i.target() == target)
    }

    /// Find the smallest name-reference node covering `range`.
    ///
    /// Returns `None` when the range does not land on a name reference,
    /// in which case the diagnostic pointing there is not fixable here.
    pub fn name_ref_at(&self, range: TextRange) -> Option<&NameRef> {
        self.name_refs
            .iter()
            .filter(|nr| nr.range().contains_range(range))
            .min_by_key(|nr| nr.range().len())
    }

    /// Return a new document with `targets` appended as synthesized
    /// import directives, after all existing ones.
    ///
    /// The original document is untouched (copy-on-write); existing
    /// directives keep their spans and formatting.
    pub fn with_appended_imports<I>(&self, targets: I) -> SourceDocument
    where
        I: IntoIterator<Item = SmolStr>,
    {
        let mut doc = self.clone();
        doc.imports
            .extend(targets.into_iter().map(ImportDirective::synthesized));
        doc
    }
}
