//! Symbol and declaration data as the translator needs to see it (§3 Data Model).

use crate::ids::{DeclId, FileId, SymbolId};

/// A source file, as far as the translator cares: where it lives and whether
/// it is itself a declaration (ambient) file.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub filename: String,
    pub is_declaration_file: bool,
    /// Whether this file carries top-level import/export syntax, making its
    /// declarations module-scoped rather than global (GLOSSARY: "External
    /// module").
    pub is_external_module: bool,
}

/// The kind of declaration a [`Declaration`] represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationKind {
    ModuleDeclaration,
    Class,
    Interface,
    Function,
    Signature,
    Other,
}

/// A module declaration's name: either an identifier (`namespace Foo {}`) or a
/// string literal (`declare module "foo" {}`, which makes it an ambient
/// external module).
#[derive(Clone, Debug)]
pub enum DeclName {
    Identifier(String),
    StringLiteral(String),
}

/// One parameter of a signature declaration.
#[derive(Clone, Debug)]
pub struct ParamDecl {
    pub name: String,
    pub optional: bool,
    pub rest: bool,
    pub ty: crate::ids::TypeId,
}

/// An AST declaration node.
#[derive(Clone, Debug)]
pub struct Declaration {
    pub source_file: FileId,
    pub modifier_flags: u32,
    pub kind: DeclarationKind,
    pub parent: Option<DeclId>,
    pub name: Option<DeclName>,
    /// True for declarations synthesized from a JSDoc comment rather than
    /// real syntax; signature translation requires a non-JSDoc declaration.
    pub is_jsdoc: bool,
    pub type_parameters: Vec<SymbolId>,
    pub this_parameter: Option<ParamDecl>,
    pub parameters: Vec<ParamDecl>,
}

impl Declaration {
    pub fn is_ambient(&self) -> bool {
        self.modifier_flags & crate::flags::modifier_flags::AMBIENT != 0
    }

    pub fn is_exported(&self) -> bool {
        self.modifier_flags & crate::flags::modifier_flags::EXPORT != 0
    }
}

/// A symbol: an identity with a kind, a set of declarations, and optionally a
/// parent (enclosing) symbol or an aliased (import target) symbol.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub flags: u32,
    pub declarations: Vec<DeclId>,
    pub parent: Option<SymbolId>,
    pub aliased_symbol: Option<SymbolId>,
}

impl Symbol {
    pub fn has_flags(&self, flags: u32) -> bool {
        (self.flags & flags) != 0
    }
}
