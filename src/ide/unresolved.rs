//! Collecting the unresolved names a document's diagnostics point at.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::TextRange;
use crate::diagnostics::{Diagnostic, DiagnosticCategories};
use crate::syntax::SourceDocument;

/// A name the compiler could not bind, extracted from one diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedName {
    /// The identifier text. For a generic reference this is the base
    /// identifier alone, type arguments stripped.
    pub text: SmolStr,
    /// The span of the name node the diagnostic pointed at.
    pub range: TextRange,
}

/// Extract the distinct unresolved names from a diagnostic stream.
///
/// Keeps diagnostics whose code is in `categories`, locates the name node
/// covering each diagnostic's span, and reads its identifier. Diagnostics
/// whose span does not land on a simple or generic name are skipped; the
/// rest of the batch proceeds. Names are deduplicated by text, so
/// resolution later runs at most once per identifier.
pub fn collect_unresolved(
    document: &SourceDocument,
    diagnostics: &[Diagnostic],
    categories: &DiagnosticCategories,
) -> Vec<UnresolvedName> {
    let mut seen: FxHashSet<SmolStr> = FxHashSet::default();
    let mut names = Vec::new();

    for diag in diagnostics.iter().filter(|d| categories.contains(&d.code)) {
        let Some(name_ref) = document.name_ref_at(diag.range) else {
            trace!(code = %diag.code, range = ?diag.range, "no name node at diagnostic span, skipping");
            continue;
        };

        let text = SmolStr::new(name_ref.ident());
        if seen.insert(text.clone()) {
            names.push(UnresolvedName {
                text,
                range: name_ref.range(),
            });
        }
    }

    names
}

/// The batch fixer only activates when it can save more than one manual
/// import: with zero or one distinct name there is no batch to fix.
pub fn below_batch_threshold(names: &[UnresolvedName]) -> bool {
    names.len() <= 1
}
