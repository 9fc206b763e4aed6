//! Public-type search across every referenced library.

use std::collections::BTreeSet;

use smol_str::SmolStr;

use super::universe::{Namespace, SymbolUniverse};

/// Find every namespace, in any referenced library, that directly declares
/// a public type whose simple name equals `ident`.
///
/// The walk is exhaustive: it never stops at the first match, because two
/// libraries may declare same-named public types under different
/// namespaces and all of them must be surfaced. Matches in a library's
/// global namespace are skipped; there is nothing to import for them.
///
/// Returns the fully-qualified, dot-joined namespace names. The result is
/// a sorted set, so callers get deterministic output regardless of the
/// order libraries or children are visited in.
pub fn namespaces_declaring(universe: &SymbolUniverse, ident: &str) -> BTreeSet<SmolStr> {
    let mut found = BTreeSet::new();

    for library in universe.libraries() {
        // Explicit worklist instead of recursion; namespace trees are
        // acyclic by construction of the host symbol model, so no
        // visited-set guard is needed.
        let mut work: Vec<(&Namespace, SmolStr)> = vec![(library.root(), SmolStr::default())];

        while let Some((namespace, qualified)) = work.pop() {
            if !qualified.is_empty() && namespace.declares_public_type(ident) {
                found.insert(qualified.clone());
            }

            for child in namespace.children() {
                let child_qualified = if qualified.is_empty() {
                    SmolStr::new(child.name())
                } else {
                    SmolStr::new(format!("{}.{}", qualified, child.name()))
                };
                work.push((child, child_qualified));
            }
        }
    }

    found
}
