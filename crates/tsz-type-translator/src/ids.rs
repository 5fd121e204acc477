//! Opaque identity handles for the capabilities the translator consumes.
//!
//! The translator never owns a symbol table or type arena itself; it is handed
//! these ids by the upstream semantic analyzer (see [`crate::host`]) and treats
//! them as pointer-stable identities for the lifetime of one translation.

/// Identity of a semantic type object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const NONE: TypeId = TypeId(u32::MAX);

    #[must_use]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// Identity of a symbol (pointer equality in the upstream analyzer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolId(pub u32);

/// Identity of a declaration (an AST node carrying modifiers and a parent chain).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeclId(pub u32);

/// Identity of a source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileId(pub u32);

/// Identity of a call or construct signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignatureId(pub u32);

/// Reference AST node, used only for scope context at the reference site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);
