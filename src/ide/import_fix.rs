//! Planning and applying the batched import additions.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::diagnostics::{Diagnostic, DiagnosticCategories};
use crate::symbols::{SymbolUniverse, namespaces_declaring};
use crate::syntax::{ImportDirective, SourceDocument};

use super::unresolved::{below_batch_threshold, collect_unresolved};

/// Why an invocation produced no fix.
///
/// None of these are hard failures; the document-level entry point folds
/// every one of them into "return the input unchanged".
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NoFix {
    /// The host could not supply a symbol universe for this compilation.
    #[error("symbol universe unavailable")]
    MissingContext,
    /// Fewer than two distinct unresolved names; the non-batch fix path
    /// owns that case.
    #[error("fewer than two distinct unresolved names")]
    BelowThreshold,
    /// The host's cancellation token fired mid-search.
    #[error("cancelled by the host")]
    Cancelled,
}

/// The namespaces a fix would add, already deduplicated, filtered against
/// existing imports, and sorted lexicographically.
///
/// An empty plan is a valid outcome and means "no change needed".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportPlan {
    additions: Vec<SmolStr>,
}

impl ImportPlan {
    /// The namespaces to add, in lexicographic order.
    pub fn additions(&self) -> &[SmolStr] {
        &self.additions
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.additions.len()
    }
}

/// Aggregate per-identifier candidates into one import plan.
///
/// Unions every candidate set, drops namespaces already imported (exact
/// target-string match), and sorts what remains.
pub fn plan(
    existing_imports: &[ImportDirective],
    candidates_by_name: &IndexMap<SmolStr, BTreeSet<SmolStr>>,
) -> ImportPlan {
    let mut wanted: BTreeSet<SmolStr> = candidates_by_name.values().flatten().cloned().collect();

    wanted.retain(|ns| !existing_imports.iter().any(|i| i.target() == ns.as_str()));

    ImportPlan {
        additions: wanted.into_iter().collect(),
    }
}

/// Run the full pipeline up to (but not including) the document edit.
///
/// Hosts that render text edits themselves consume the returned plan
/// directly. The cancellation token is checked between identifiers so a
/// slow search over many libraries can be abandoned promptly.
pub fn plan_missing_imports(
    document: &SourceDocument,
    diagnostics: &[Diagnostic],
    universe: Option<&SymbolUniverse>,
    categories: &DiagnosticCategories,
    cancel: &CancellationToken,
) -> Result<ImportPlan, NoFix> {
    let universe = universe.ok_or(NoFix::MissingContext)?;

    let names = collect_unresolved(document, diagnostics, categories);
    debug!(file = %document.file(), distinct = names.len(), "collected unresolved names");

    if below_batch_threshold(&names) {
        return Err(NoFix::BelowThreshold);
    }

    let mut candidates: IndexMap<SmolStr, BTreeSet<SmolStr>> = IndexMap::new();
    for name in &names {
        if cancel.is_cancelled() {
            return Err(NoFix::Cancelled);
        }
        let found = namespaces_declaring(universe, &name.text);
        trace!(name = %name.text, candidates = found.len(), "namespace search");
        candidates.insert(name.text.clone(), found);
    }

    let plan = plan(document.imports(), &candidates);
    debug!(additions = plan.len(), "planned import additions");
    Ok(plan)
}

/// The document-level entry point: plan and apply in one step.
///
/// Returns a new document with the planned imports appended, or the input
/// unchanged when the plan is empty or no fix applies. Never fails: every
/// [`NoFix`] reason degrades to "no change".
pub fn add_missing_imports(
    document: &SourceDocument,
    diagnostics: &[Diagnostic],
    universe: Option<&SymbolUniverse>,
    categories: &DiagnosticCategories,
    cancel: &CancellationToken,
) -> SourceDocument {
    match plan_missing_imports(document, diagnostics, universe, categories, cancel) {
        Ok(plan) if !plan.is_empty() => {
            document.with_appended_imports(plan.additions().iter().cloned())
        }
        Ok(_) => document.clone(),
        Err(reason) => {
            debug!(%reason, "no batch import fix");
            document.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{FileId, TextRange, TextSize};

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::from(start), TextSize::from(end))
    }

    fn candidates(entries: &[(&str, &[&str])]) -> IndexMap<SmolStr, BTreeSet<SmolStr>> {
        entries
            .iter()
            .map(|(name, namespaces)| {
                (
                    SmolStr::new(name),
                    namespaces.iter().map(|ns| SmolStr::new(ns)).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_plan_sorts_lexicographically() {
        let plan = plan(
            &[],
            &candidates(&[
                ("JsonSerializer", &["System.Text.Json"]),
                ("List", &["System.Collections.Generic"]),
            ]),
        );

        assert_eq!(
            plan.additions(),
            ["System.Collections.Generic", "System.Text.Json"]
        );
    }

    #[test]
    fn test_plan_drops_already_imported() {
        let existing = vec![ImportDirective::existing(
            "System.Collections.Generic",
            range(0, 34),
        )];

        let plan = plan(
            &existing,
            &candidates(&[
                ("List", &["System.Collections.Generic"]),
                ("JsonSerializer", &["System.Text.Json"]),
            ]),
        );

        assert_eq!(plan.additions(), ["System.Text.Json"]);
    }

    #[test]
    fn test_plan_unions_duplicate_candidates() {
        // Two identifiers resolved to the same namespace produce one entry.
        let plan = plan(
            &[],
            &candidates(&[
                ("List", &["System.Collections.Generic"]),
                ("Dictionary", &["System.Collections.Generic"]),
            ]),
        );

        assert_eq!(plan.additions(), ["System.Collections.Generic"]);
    }

    #[test]
    fn test_plan_keeps_all_ambiguous_candidates() {
        let plan = plan(
            &[],
            &candidates(&[("List", &["Acme.Collections", "System.Collections.Generic"])]),
        );

        assert_eq!(
            plan.additions(),
            ["Acme.Collections", "System.Collections.Generic"]
        );
    }

    #[test]
    fn test_missing_universe_is_soft() {
        let document = SourceDocument::new(FileId::new(0));
        let result = plan_missing_imports(
            &document,
            &[],
            None,
            &DiagnosticCategories::default(),
            &CancellationToken::new(),
        );
        assert_eq!(result, Err(NoFix::MissingContext));

        let patched = add_missing_imports(
            &document,
            &[],
            None,
            &DiagnosticCategories::default(),
            &CancellationToken::new(),
        );
        assert_eq!(patched, document);
    }

    #[test]
    fn test_cancelled_before_search() {
        use crate::diagnostics::codes;
        use crate::syntax::NameRef;

        let document = SourceDocument::new(FileId::new(0))
            .with_name_ref(NameRef::simple("List", range(0, 4)))
            .with_name_ref(NameRef::simple("Console", range(10, 17)));
        let diagnostics = vec![
            Diagnostic::error(codes::UNRESOLVED_TYPE, range(0, 4), "cannot find 'List'"),
            Diagnostic::error(codes::UNRESOLVED_NAME, range(10, 17), "cannot find 'Console'"),
        ];

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = plan_missing_imports(
            &document,
            &diagnostics,
            Some(&SymbolUniverse::new()),
            &DiagnosticCategories::default(),
            &cancel,
        );
        assert_eq!(result, Err(NoFix::Cancelled));
    }
}
