//! Translates resolved semantic type objects into target-dialect type
//! annotation strings.
//!
//! This crate is the Type Translator stage of a larger annotation pipeline:
//! it consumes opaque type/symbol/declaration identities from an upstream
//! semantic analyzer (via the [`host`] traits) and produces strings like
//! `?`, `!Foo<number>`, `(string|null)`, or `function(a: number): void`. It
//! does not parse, bind, check, or emit source text itself.
//!
//! The six cooperating components:
//! - [`mangle`] / [`host::NameMangler`] — filename to global identifier (C1)
//! - [`symbol_resolver`] — symbol to dotted textual name (C2)
//! - [`alias_scope`] — in-scope symbol renaming and the generic-blacklist (C3)
//! - [`translator`] — the recursive type-kind dispatch (C4)
//! - [`diagnostics`] — the non-fatal warning sink (C5)
//! - the `externs_mode` flag threaded through [`translator::Translator::new`] (C6)

pub mod alias_scope;
pub mod diagnostics;
pub mod flags;
pub mod host;
pub mod ids;
pub mod mangle;
pub mod model;
pub mod symbol_resolver;
#[cfg(test)]
mod test_support;
pub mod translator;
pub mod type_def;

pub use alias_scope::AliasScope;
pub use diagnostics::{DiagnosticSink, VecDiagnosticSink};
pub use host::{EnsureDeclared, IndexKind, NameMangler, NoopEnsureDeclared, TypeCheckerHost};
pub use mangle::DefaultMangler;
pub use symbol_resolver::PathBlacklist;
pub use translator::{Translator, UNKNOWN_SENTINEL};
