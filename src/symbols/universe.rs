//! Host-injected symbol tables: libraries, namespaces, type members.

use smol_str::SmolStr;

/// Declared visibility of a type member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Importable from any compilation referencing the library.
    Public,
    /// Visible only inside the declaring library.
    Internal,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// A type declared directly inside a namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMember {
    name: SmolStr,
    visibility: Visibility,
}

impl TypeMember {
    /// A publicly visible type.
    pub fn public(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
        }
    }

    /// A library-internal type.
    pub fn internal(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Internal,
        }
    }

    /// The type's simple name (no namespace, no type arguments).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// One namespace node: a name, the types declared directly in it, and its
/// child namespaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    name: SmolStr,
    types: Vec<TypeMember>,
    children: Vec<Namespace>,
}

impl Namespace {
    /// The unnamed global namespace at a library root.
    pub fn root() -> Self {
        Self {
            name: SmolStr::default(),
            types: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A named namespace.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a type member (builder style).
    pub fn with_type(mut self, member: TypeMember) -> Self {
        self.types.push(member);
        self
    }

    /// Add a child namespace (builder style).
    pub fn with_child(mut self, child: Namespace) -> Self {
        self.children.push(child);
        self
    }

    /// The namespace's simple name; empty for a library root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Types declared directly in this namespace.
    pub fn types(&self) -> &[TypeMember] {
        &self.types
    }

    /// Child namespaces.
    pub fn children(&self) -> &[Namespace] {
        &self.children
    }

    /// Whether this namespace directly declares a public type named `ident`.
    ///
    /// Nested namespaces are not consulted; the caller walks those itself.
    pub fn declares_public_type(&self, ident: &str) -> bool {
        self.types
            .iter()
            .any(|t| t.name() == ident && t.visibility().is_public())
    }
}

/// One referenced library and its namespace tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Library {
    name: SmolStr,
    root: Namespace,
}

impl Library {
    pub fn new(name: impl Into<SmolStr>, root: Namespace) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// The library's display name (for logging only; never part of a
    /// qualified namespace).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The library's global namespace.
    pub fn root(&self) -> &Namespace {
        &self.root
    }
}

/// Every namespace tree reachable from the compilation's references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolUniverse {
    libraries: Vec<Library>,
}

impl SymbolUniverse {
    /// An empty universe (a compilation with no references).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a referenced library (builder style).
    pub fn with_library(mut self, library: Library) -> Self {
        self.libraries.push(library);
        self
    }

    /// All referenced libraries.
    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    /// Number of referenced libraries.
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Whether the compilation references no libraries.
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declares_public_type() {
        let ns = Namespace::new("Generic")
            .with_type(TypeMember::public("List"))
            .with_type(TypeMember::internal("ListDebugView"));

        assert!(ns.declares_public_type("List"));
        assert!(!ns.declares_public_type("ListDebugView")); // internal
        assert!(!ns.declares_public_type("Dictionary"));
    }

    #[test]
    fn test_declares_ignores_children() {
        let ns = Namespace::new("Collections")
            .with_child(Namespace::new("Generic").with_type(TypeMember::public("List")));

        assert!(!ns.declares_public_type("List"));
    }

    #[test]
    fn test_universe_builder() {
        let universe = SymbolUniverse::new()
            .with_library(Library::new("corelib", Namespace::root()))
            .with_library(Library::new("extlib", Namespace::root()));

        assert_eq!(universe.len(), 2);
        assert_eq!(universe.libraries()[0].name(), "corelib");
    }
}
