//! C2: walks a symbol's declarations, classifies them, and produces the
//! dotted textual name a reference site should use (§4.2).

use crate::alias_scope::AliasScope;
use crate::flags::symbol_flags;
use crate::host::{EnsureDeclared, TypeCheckerHost};
use crate::ids::{DeclId, SymbolId};
use crate::model::{Declaration, DeclName};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Set of fully-qualified source paths whose symbols always translate to `?`,
/// normalized to OS-neutral form at construction. Immutable for the lifetime
/// of a translator instance (§5).
#[derive(Clone, Debug, Default)]
pub struct PathBlacklist {
    paths: FxHashSet<String>,
}

fn normalize(path: &str) -> String {
    Path::new(path)
        .components()
        .collect::<PathBuf>()
        .to_string_lossy()
        .replace('\\', "/")
}

impl PathBlacklist {
    #[must_use]
    pub fn new(paths: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            paths: paths.into_iter().map(|p| normalize(p.as_ref())).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(&normalize(path))
    }
}

/// A declaration `d` is blacklisted iff *every* declaration of its symbol has
/// a (normalized) source-file path in the path blacklist.
#[must_use]
pub fn is_blacklisted(
    host: &dyn TypeCheckerHost,
    blacklist: &PathBlacklist,
    symbol: SymbolId,
) -> bool {
    let decls = &host.symbol(symbol).declarations;
    !decls.is_empty()
        && decls.iter().all(|&d| {
            let file = host.declaration(d).source_file;
            blacklist.contains(&host.source_file(file).filename)
        })
}

/// The three booleans §4.4.1 computes from a symbol's declarations.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclarationClassification {
    pub is_ambient: bool,
    pub is_in_namespace: bool,
    pub is_module: bool,
}

fn has_ambient_ancestor(host: &dyn TypeCheckerHost, decl: &Declaration) -> bool {
    if decl.is_ambient() {
        return true;
    }
    let mut parent = decl.parent;
    while let Some(p) = parent {
        let pd = host.declaration(p);
        if pd.is_ambient() {
            return true;
        }
        parent = pd.parent;
    }
    false
}

fn has_non_file_module_ancestor(host: &dyn TypeCheckerHost, decl: &Declaration) -> bool {
    let mut parent = decl.parent;
    while let Some(p) = parent {
        let pd = host.declaration(p);
        if pd.kind == crate::model::DeclarationKind::ModuleDeclaration {
            return true;
        }
        parent = pd.parent;
    }
    false
}

/// Classify every declaration of `symbol`, computing is-ambient,
/// is-in-namespace, and is-module (§4.4.1 step 3).
#[must_use]
pub fn classify_declarations(
    host: &dyn TypeCheckerHost,
    symbol: Option<SymbolId>,
) -> DeclarationClassification {
    let Some(symbol) = symbol else {
        return DeclarationClassification::default();
    };
    let mut out = DeclarationClassification::default();
    for &decl_id in &host.symbol(symbol).declarations {
        let decl = host.declaration(decl_id);
        if has_ambient_ancestor(host, decl) {
            out.is_ambient = true;
        }
        if has_non_file_module_ancestor(host, decl) {
            out.is_in_namespace = true;
        }
        if is_external_module_file(host, decl.source_file) {
            out.is_module = true;
        }
    }
    out
}

fn is_external_module_file(host: &dyn TypeCheckerHost, file: crate::ids::FileId) -> bool {
    host.source_file(file).is_external_module
}

fn enclosing_ambient_external_module(
    host: &dyn TypeCheckerHost,
    decl: &Declaration,
) -> Option<String> {
    let mut parent = decl.parent;
    while let Some(p) = parent {
        let pd = host.declaration(p);
        if pd.kind == crate::model::DeclarationKind::ModuleDeclaration {
            if let Some(DeclName::StringLiteral(name)) = &pd.name {
                return Some(name.clone());
            }
        }
        parent = pd.parent;
    }
    None
}

/// §4.2-prefix: decide whether a reference to `symbol` needs a mangled
/// module prefix, and if so produce it (including the trailing `.`).
fn mangle_prefix(
    host: &dyn TypeCheckerHost,
    mangler: &dyn crate::host::NameMangler,
    externs_mode: bool,
    symbol: SymbolId,
) -> String {
    let decls: Vec<DeclId> = host.symbol(symbol).declarations.clone();

    let any_top_level_external = decls.iter().any(|&d| {
        let decl = host.declaration(d);
        is_external_module_file(host, decl.source_file) && decl.parent.is_none()
    });
    let any_ambient_external_module_ancestor = decls
        .iter()
        .any(|&d| enclosing_ambient_external_module(host, host.declaration(d)).is_some());

    if !any_top_level_external && !any_ambient_external_module_ancestor {
        return String::new();
    }

    if !externs_mode {
        let all_local_ambient_exported = decls.iter().all(|&d| {
            let decl = host.declaration(d);
            decl.is_ambient() && decl.is_exported()
        });
        if !all_local_ambient_exported {
            return String::new();
        }
    }

    let filename = decls
        .iter()
        .find_map(|&d| enclosing_ambient_external_module(host, host.declaration(d)))
        .unwrap_or_else(|| {
            let first = decls[0];
            host.source_file(host.declaration(first).source_file)
                .filename
                .clone()
        });

    format!("{}.", mangler.mangle(&filename))
}

/// The fixed namespace prefix one collaborator uses to surface certain
/// globals; the translator consumes names with it stripped (§4.2 step 4).
const SENTINEL_NAMESPACE_PREFIX: &str = "\u{0ca0}_\u{0ca0}.clutz.";

fn strip_sentinel_namespace(name: &str) -> &str {
    name.strip_prefix(SENTINEL_NAMESPACE_PREFIX).unwrap_or(name)
}

/// C2 `symbol-to-string`: produce a dotted name for `symbol` relative to the
/// current reference site, or `None` when it cannot be named.
#[allow(clippy::too_many_arguments)]
pub fn symbol_to_string(
    host: &dyn TypeCheckerHost,
    mangler: &dyn crate::host::NameMangler,
    scope: &mut AliasScope,
    ensure_declared: &mut dyn EnsureDeclared,
    externs_mode: bool,
    symbol: SymbolId,
) -> Option<String> {
    if !externs_mode && !host.symbol(symbol).has_flags(symbol_flags::TYPE_PARAMETER) {
        ensure_declared.ensure_declared(scope, host, symbol);
    }

    let entity_name = host.entity_name_for_symbol(symbol)?;

    let mut text = String::new();
    for (i, &segment_symbol) in entity_name.iter().enumerate() {
        let resolved = host
            .aliased_symbol(segment_symbol)
            .filter(|_| host.symbol(segment_symbol).has_flags(symbol_flags::ALIAS))
            .unwrap_or(segment_symbol);

        if let Some(alias) = scope.get(resolved) {
            return Some(alias.to_string());
        }

        if i == 0 {
            text.push_str(&mangle_prefix(host, mangler, externs_mode, symbol));
        } else {
            text.push('.');
        }
        text.push_str(&host.symbol(segment_symbol).name);
    }

    Some(strip_sentinel_namespace(&text).to_string())
}

#[cfg(test)]
#[path = "../tests/symbol_resolver_tests.rs"]
mod tests;
