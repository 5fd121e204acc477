//! Capability objects the translator is handed at construction (§6 External
//! Interfaces). The translator never loads source files or walks an AST
//! itself; every query that needs that context goes through one of these
//! traits so the translator stays a pure function of (type, host state).

use crate::ids::{DeclId, FileId, NodeId, SignatureId, SymbolId, TypeId};
use crate::model::{Declaration, SourceFile, Symbol};
use crate::type_def::{IndexInfo, Signature, Type};

/// Which index signature (`[k: string]: V` vs `[k: number]: V`) is being
/// looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    String,
    Number,
}

/// The upstream semantic analyzer's query surface.
///
/// All accessors are infallible lookups by id (the ids the translator is
/// handed are assumed valid for the lifetime of one translation); the
/// `*_of_*` methods are the genuinely contextual operations that depend on
/// more than a type's own stored data.
pub trait TypeCheckerHost {
    fn symbol(&self, id: SymbolId) -> &Symbol;
    fn declaration(&self, id: DeclId) -> &Declaration;
    fn source_file(&self, id: FileId) -> &SourceFile;
    fn ty(&self, id: TypeId) -> &Type;
    fn signature(&self, id: SignatureId) -> &Signature;

    /// The fully-qualified dotted entity name for a symbol, as a left-to-right
    /// ordered list of the symbols carried by each segment. `None` when the
    /// symbol cannot be named at all (e.g. it is anonymous).
    fn entity_name_for_symbol(&self, symbol: SymbolId) -> Option<Vec<SymbolId>>;

    /// The enum type a literal type was widened from. `None` when the
    /// literal's base type has no symbol.
    fn base_type_of_literal(&self, ty: TypeId) -> Option<TypeId>;

    /// The type of a member symbol as seen from the reference site.
    fn type_of_symbol_at_location(&self, symbol: SymbolId, at: Option<NodeId>) -> TypeId;

    fn return_type_of_signature(&self, sig: SignatureId) -> TypeId;

    fn index_type_of_type(&self, ty: TypeId, kind: IndexKind) -> Option<IndexInfo>;

    /// The symbol a reference AST node resolves to (used when ensure-declared
    /// needs to inspect the reference site; unused by the core dispatch).
    fn symbol_at_location(&self, node: NodeId) -> Option<SymbolId>;

    /// Dereferences an import-alias symbol to the symbol it imports.
    fn aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId>;
}

/// Deterministic, injective transform from a module's filename to a global
/// identifier (C1 Name Mangler). Supplied by the annotator host and treated
/// as a black box by the translator.
pub trait NameMangler {
    fn mangle(&self, filename: &str) -> String;
}

/// Callback invoked before naming a non-type-parameter symbol outside externs
/// mode; may inject a forward-declare import and register a new alias in the
/// [`crate::alias_scope::AliasScope`]. Defaults to a no-op.
pub trait EnsureDeclared {
    fn ensure_declared(
        &mut self,
        scope: &mut crate::alias_scope::AliasScope,
        host: &dyn TypeCheckerHost,
        symbol: SymbolId,
    );
}

/// The default no-op `ensure-declared` callback (§6: "defaults to a no-op").
#[derive(Default)]
pub struct NoopEnsureDeclared;

impl EnsureDeclared for NoopEnsureDeclared {
    fn ensure_declared(
        &mut self,
        _scope: &mut crate::alias_scope::AliasScope,
        _host: &dyn TypeCheckerHost,
        _symbol: SymbolId,
    ) {
    }
}
