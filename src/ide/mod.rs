//! The batch import-fix feature.
//!
//! This is the surface hosts call from a code-action handler. Each piece
//! is a pure function over the read-only inputs:
//!
//! 1. [`collect_unresolved`] filters and extracts the distinct unresolved
//!    names a document's diagnostics point at
//! 2. [`plan_missing_imports`] searches the symbol universe and plans the
//!    import additions
//! 3. [`add_missing_imports`] applies the plan, returning a new document
//!    value (or the input unchanged when no fix applies)
//!
//! [`fixes_for_category`] supplies the metadata hosts use to advertise
//! the action against a qualifying diagnostic.

mod fix_metadata;
mod import_fix;
mod unresolved;

pub use fix_metadata::{FixMetadata, fixes_for_category};
pub use import_fix::{ImportPlan, NoFix, add_missing_imports, plan, plan_missing_imports};
pub use unresolved::{UnresolvedName, below_batch_threshold, collect_unresolved};
