//! C3: a mutable symbol -> in-scope textual alias mapping (§4.3).

use crate::ids::{DeclId, SymbolId};
use crate::host::TypeCheckerHost;
use rustc_hash::FxHashMap;

/// The unknown-sentinel marker a symbol can be mapped to, meaning "emit `?`
/// instead of a name" (§3: "the blacklist sentinel `?`").
pub const BLACKLIST: &str = "?";

/// A plain mutable map from symbol identity to the textual alias that should
/// be used to reference it at the current emission site. Outlives individual
/// translator instances; shared within one source file's emission (§3, §5).
#[derive(Default, Debug, Clone)]
pub struct AliasScope {
    entries: FxHashMap<SymbolId, String>,
}

impl AliasScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last-writer-wins; insertion order is not observable.
    pub fn set(&mut self, symbol: SymbolId, alias: impl Into<String>) {
        self.entries.insert(symbol, alias.into());
    }

    #[must_use]
    pub fn get(&self, symbol: SymbolId) -> Option<&str> {
        self.entries.get(&symbol).map(String::as_str)
    }

    pub fn blacklist(&mut self, symbol: SymbolId) {
        self.set(symbol, BLACKLIST);
    }

    #[must_use]
    pub fn is_blacklisted(&self, symbol: SymbolId) -> bool {
        self.entries.get(&symbol).is_some_and(|a| a == BLACKLIST)
    }
}

/// For every generic type-parameter declaration among `decls`, map that
/// parameter's symbol to the blacklist sentinel. Reflects the target
/// dialect's lack of generic *function* types (§4.3).
///
/// Idempotent: blacklisting an already-blacklisted symbol is a no-op change
/// in observable state (§8 property 7).
pub fn blacklist_type_parameters(
    scope: &mut AliasScope,
    host: &dyn TypeCheckerHost,
    decls: &[DeclId],
) {
    for &decl in decls {
        for &param_symbol in &host.declaration(decl).type_parameters {
            scope.blacklist(param_symbol);
        }
    }
}

#[cfg(test)]
#[path = "../tests/alias_scope_tests.rs"]
mod tests;
