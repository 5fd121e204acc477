//! C4: recursive dispatch over type-kind variants producing target-dialect
//! strings (§4.4). A [`Translator`] is constructed once per emission context,
//! carries the recursion set and the externs-mode flag, and is discarded
//! after use (§3 Lifecycles) — nothing here is safe to reuse across
//! top-level reference sites without resetting `recursing`.

use crate::alias_scope::AliasScope;
use crate::diagnostics::{DiagnosticSink, codes};
use crate::flags::{object_flags, symbol_flags, type_flags};
use crate::host::{EnsureDeclared, NameMangler, TypeCheckerHost};
use crate::ids::{NodeId, SymbolId, TypeId};
use crate::symbol_resolver::{self, PathBlacklist};
use crate::type_def::TypeData;
use rustc_hash::FxHashSet;

/// The unknown/any sentinel emitted whenever a construct is inexpressible in
/// the target dialect.
pub const UNKNOWN_SENTINEL: &str = "?";

/// A single-use recursive translator for one reference site.
pub struct Translator<'a> {
    host: &'a dyn TypeCheckerHost,
    mangler: &'a dyn NameMangler,
    scope: &'a mut AliasScope,
    sink: &'a mut dyn DiagnosticSink,
    ensure_declared: &'a mut dyn EnsureDeclared,
    path_blacklist: PathBlacklist,
    reference_node: Option<NodeId>,
    externs_mode: bool,
    recursing: FxHashSet<TypeId>,
}

impl<'a> Translator<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        host: &'a dyn TypeCheckerHost,
        mangler: &'a dyn NameMangler,
        scope: &'a mut AliasScope,
        sink: &'a mut dyn DiagnosticSink,
        ensure_declared: &'a mut dyn EnsureDeclared,
        reference_node: Option<NodeId>,
        path_blacklist: PathBlacklist,
        externs_mode: bool,
    ) -> Self {
        Translator {
            host,
            mangler,
            scope,
            sink,
            ensure_declared,
            path_blacklist,
            reference_node,
            externs_mode,
            recursing: FxHashSet::default(),
        }
    }

    fn warn(&mut self, code: u32, message: impl Into<String>) {
        self.sink.warn(code, message.into());
    }

    /// C2 `symbol-to-string`, exposed as the translator's ancillary entry
    /// point (§6).
    pub fn symbol_to_string(&mut self, symbol: SymbolId) -> Option<String> {
        symbol_resolver::symbol_to_string(
            self.host,
            self.mangler,
            self.scope,
            self.ensure_declared,
            self.externs_mode,
            symbol,
        )
    }

    fn is_path_blacklisted(&self, symbol: SymbolId) -> bool {
        symbol_resolver::is_blacklisted(self.host, &self.path_blacklist, symbol)
    }

    /// The primary entry point. Always returns a string; never panics except
    /// on the two documented contract violations (§7 Structural errors).
    pub fn translate(&mut self, type_id: TypeId) -> String {
        let ty = self.host.ty(type_id).clone();

        // §4.4.1 step 1: the bare non-primitive `object` type.
        if ty.kind_flags() == type_flags::NON_PRIMITIVE {
            return "!Object".to_string();
        }

        // §4.4.1 step 2: recursion guard.
        if self.recursing.contains(&type_id) {
            return UNKNOWN_SENTINEL.to_string();
        }

        // §4.4.1 step 3-5.
        if let Some(symbol) = ty.symbol() {
            if self.is_path_blacklisted(symbol) {
                return UNKNOWN_SENTINEL.to_string();
            }
            let classification = symbol_resolver::classify_declarations(self.host, Some(symbol));
            if classification.is_in_namespace && !classification.is_ambient {
                return UNKNOWN_SENTINEL.to_string();
            }
            if self.externs_mode && classification.is_module && !classification.is_ambient {
                return UNKNOWN_SENTINEL.to_string();
            }
        }

        self.dispatch(type_id, &ty)
    }

    fn dispatch(&mut self, type_id: TypeId, ty: &crate::type_def::Type) -> String {
        let kind = ty.kind_flags();

        match kind {
            type_flags::ANY => return UNKNOWN_SENTINEL.to_string(),
            type_flags::UNKNOWN => return "*".to_string(),
            type_flags::STRING | type_flags::STRING_LITERAL => return "string".to_string(),
            type_flags::NUMBER | type_flags::NUMBER_LITERAL => return "number".to_string(),
            type_flags::BOOLEAN | type_flags::BOOLEAN_LITERAL => return "boolean".to_string(),
            type_flags::ES_SYMBOL | type_flags::UNIQUE_ES_SYMBOL => return "symbol".to_string(),
            type_flags::VOID => return "void".to_string(),
            type_flags::UNDEFINED => return "undefined".to_string(),
            type_flags::BIG_INT => {
                self.warn(codes::UNSUPPORTED_TYPE_CONSTRUCT, "type `bigint` has no target-dialect equivalent");
                return UNKNOWN_SENTINEL.to_string();
            }
            type_flags::NULL => return "null".to_string(),
            type_flags::NEVER => {
                self.warn(codes::NEVER_TYPE, "type `never` has no target-dialect equivalent");
                return UNKNOWN_SENTINEL.to_string();
            }
            type_flags::ENUM => {
                return match ty.symbol().and_then(|s| self.symbol_to_string(s)) {
                    Some(name) => name,
                    None => UNKNOWN_SENTINEL.to_string(),
                };
            }
            type_flags::TYPE_PARAMETER => return self.translate_type_parameter(ty),
            type_flags::OBJECT => return self.translate_object(type_id, ty),
            type_flags::UNION => return self.translate_union(ty),
            type_flags::CONDITIONAL
            | type_flags::SUBSTITUTION
            | type_flags::INTERSECTION
            | type_flags::INDEX
            | type_flags::INDEXED_ACCESS => {
                self.warn(
                    codes::UNSUPPORTED_TYPE_CONSTRUCT,
                    "conditional, substitution, intersection, index, and indexed-access types are not expressible in the target dialect",
                );
                return UNKNOWN_SENTINEL.to_string();
            }
            _ => {}
        }

        // Multi-bit fallback (§4.4.2): kinds that don't match a single
        // documented variant exactly are unions or enum-literals carrying
        // extra bits, or the input violates the contract.
        if kind & type_flags::UNION != 0 {
            return self.translate_union(ty);
        }
        if kind & type_flags::ENUM_LITERAL != 0 {
            return self.translate_enum_literal(type_id, ty);
        }

        unreachable!("type kind flags violate the input contract: {kind:#x}");
    }

    fn translate_type_parameter(&mut self, ty: &crate::type_def::Type) -> String {
        let TypeData::TypeParameter(tp) = &ty.data else {
            unreachable!("TYPE_PARAMETER kind without TypeParameter payload");
        };
        let bound_is_type_parameter = self.host.symbol(tp.symbol).has_flags(symbol_flags::TYPE_PARAMETER);
        let name = self
            .symbol_to_string(tp.symbol)
            .unwrap_or_else(|| UNKNOWN_SENTINEL.to_string());
        if bound_is_type_parameter { name } else { format!("!{name}") }
    }

    fn translate_union(&mut self, ty: &crate::type_def::Type) -> String {
        let TypeData::Union(u) = &ty.data else {
            unreachable!("UNION kind without Union payload");
        };
        let members: Vec<TypeId> = u.members.clone();
        let mut rendered: Vec<String> = Vec::new();
        for member in members {
            let member_str = self.translate(member);
            if !rendered.contains(&member_str) {
                rendered.push(member_str);
            }
        }
        if rendered.len() == 1 {
            rendered.into_iter().next().unwrap()
        } else {
            format!("({})", rendered.join("|"))
        }
    }

    fn translate_enum_literal(&mut self, type_id: TypeId, ty: &crate::type_def::Type) -> String {
        let TypeData::EnumLiteral(literal) = &ty.data else {
            unreachable!("ENUM_LITERAL kind without EnumLiteral payload");
        };
        let Some(literal_symbol) = literal.symbol else {
            return UNKNOWN_SENTINEL.to_string();
        };
        let base_type = self.host.base_type_of_literal(type_id).unwrap_or(literal.base_type);

        let resolved_symbol = if base_type.is_none() || base_type == type_id {
            self.host.symbol(literal_symbol).parent
        } else {
            match self.host.ty(base_type).symbol() {
                Some(s) => Some(s),
                None => return UNKNOWN_SENTINEL.to_string(),
            }
        };

        match resolved_symbol.and_then(|s| self.symbol_to_string(s)) {
            Some(name) => format!("!{name}"),
            None => UNKNOWN_SENTINEL.to_string(),
        }
    }

    fn translate_object(&mut self, type_id: TypeId, ty: &crate::type_def::Type) -> String {
        let TypeData::Object(obj) = &ty.data else {
            unreachable!("OBJECT kind without Object payload");
        };
        let flags = obj.object_flags;

        if flags & object_flags::CLASS != 0 {
            return self.translate_class(obj.symbol);
        }
        if flags & object_flags::INTERFACE != 0 {
            return self.translate_interface(obj.symbol);
        }
        if flags & object_flags::REFERENCE != 0 {
            return self.translate_reference(type_id);
        }
        if flags & object_flags::ANONYMOUS != 0 {
            return self.translate_anonymous(type_id, obj.anonymous.as_ref());
        }
        self.warn(
            codes::UNHANDLED_ANONYMOUS_SHAPE,
            "mapped, instantiated, and object-literal types are not expressible in the target dialect",
        );
        UNKNOWN_SENTINEL.to_string()
    }

    fn translate_class(&mut self, symbol: Option<SymbolId>) -> String {
        let Some(symbol) = symbol else {
            self.warn(codes::ANONYMOUS_SYMBOL, "class type has no symbol");
            return UNKNOWN_SENTINEL.to_string();
        };
        match self.symbol_to_string(symbol) {
            Some(name) => format!("!{name}"),
            None => UNKNOWN_SENTINEL.to_string(),
        }
    }

    fn translate_interface(&mut self, symbol: Option<SymbolId>) -> String {
        let Some(symbol) = symbol else {
            self.warn(codes::ANONYMOUS_SYMBOL, "interface type has no symbol");
            return UNKNOWN_SENTINEL.to_string();
        };
        if self.host.symbol(symbol).has_flags(symbol_flags::VALUE) && !self.is_builtin_provided(symbol) {
            self.warn(
                codes::TYPE_VALUE_CONFLICT,
                "symbol is both a type and a value outside the built-in library",
            );
            return UNKNOWN_SENTINEL.to_string();
        }
        match self.symbol_to_string(symbol) {
            Some(name) => format!("!{name}"),
            None => UNKNOWN_SENTINEL.to_string(),
        }
    }

    /// Whether `symbol` is one of the dialect's built-in provided types
    /// (declared in a lib file), exempt from the type/value conflict check
    /// because the target dialect's own externs declare the same dual
    /// nature (e.g. `Array` is both a type and a constructor).
    fn is_builtin_provided(&self, symbol: SymbolId) -> bool {
        let decls = &self.host.symbol(symbol).declarations;
        !decls.is_empty()
            && decls
                .iter()
                .all(|&d| self.host.source_file(self.host.declaration(d).source_file).is_declaration_file)
    }

    fn translate_reference(&mut self, type_id: TypeId) -> String {
        let ty = self.host.ty(type_id).clone();
        let TypeData::Object(obj) = &ty.data else {
            unreachable!("REFERENCE object without Object payload");
        };
        let Some(r) = &obj.reference else {
            unreachable!("REFERENCE flag set without a reference payload");
        };
        if self.has_tuple_flag(r.target) {
            return "!Array<?>".to_string();
        }
        if r.target == type_id {
            panic!("reference type {type_id:?} is self-referential");
        }

        let target_str = self.translate(r.target);
        if target_str == UNKNOWN_SENTINEL {
            return UNKNOWN_SENTINEL.to_string();
        }
        if r.type_arguments.is_empty() {
            return target_str;
        }
        let args: Vec<String> = r.type_arguments.iter().map(|&arg| self.translate(arg)).collect();
        format!("{target_str}<{}>", args.join(", "))
    }

    fn has_tuple_flag(&self, target: TypeId) -> bool {
        matches!(&self.host.ty(target).data, TypeData::Object(o) if o.object_flags & object_flags::TUPLE != 0)
    }

    fn translate_anonymous(&mut self, type_id: TypeId, anon: Option<&crate::type_def::AnonymousType>) -> String {
        let Some(anon) = anon.cloned() else {
            self.warn(codes::UNHANDLED_ANONYMOUS_SHAPE, "anonymous object type has no member data");
            return UNKNOWN_SENTINEL.to_string();
        };
        self.recursing.insert(type_id);
        // Intentionally never removed: a translator instance is single-use
        // and discarded after the top-level `translate()` call returns
        // (§4.4.6 Note). A caller that reuses one must reset `recursing`.
        self.translate_anonymous_inner(&anon)
    }

    fn translate_anonymous_inner(&mut self, anon: &crate::type_def::AnonymousType) -> String {
        if let Some(&ctor_id) = anon.construct_signatures.first() {
            let ctor = self.host.signature(ctor_id).clone();
            if ctor.declaration_is_jsdoc {
                self.warn(codes::GENERIC_CONSTRUCT_SIGNATURE, "construct signature has no real declaration");
                return UNKNOWN_SENTINEL.to_string();
            }
            return self.translate_construct_signature(&ctor);
        }

        let callable = !anon.call_signatures.is_empty();
        let indexable = anon.string_index.is_some() || anon.number_index.is_some();
        let mut fields: Vec<String> = Vec::new();
        for (name, &member_symbol) in &anon.members {
            if !is_valid_identifier_name(name) {
                self.warn(
                    codes::QUOTED_PROPERTY_NAME,
                    format!("property name `{name}` cannot be emitted unquoted"),
                );
                continue;
            }
            let member_type = self.host.type_of_symbol_at_location(member_symbol, self.reference_node);
            let translated = self.translate(member_type);
            fields.push(format!("{name}: {translated}"));
        }

        if fields.is_empty() {
            return match (callable, indexable) {
                (true, false) => self.translate_single_call_signature(anon),
                (false, true) => self.translate_index_signature(anon),
                (false, false) => "*".to_string(),
                (true, true) => {
                    self.warn(codes::UNHANDLED_ANONYMOUS_SHAPE, "anonymous type is both callable and indexable");
                    UNKNOWN_SENTINEL.to_string()
                }
            };
        }

        if !callable && !indexable {
            return format!("{{{}}}", fields.join(", "));
        }

        self.warn(
            codes::UNHANDLED_ANONYMOUS_SHAPE,
            "anonymous type combines named fields with a call or index signature",
        );
        UNKNOWN_SENTINEL.to_string()
    }

    fn translate_single_call_signature(&mut self, anon: &crate::type_def::AnonymousType) -> String {
        if anon.call_signatures.len() != 1 {
            self.warn(
                codes::UNHANDLED_ANONYMOUS_SHAPE,
                "callable anonymous type must have exactly one call signature",
            );
            return UNKNOWN_SENTINEL.to_string();
        }
        let sig = self.host.signature(anon.call_signatures[0]).clone();
        self.signature_to_string(&sig)
    }

    fn translate_index_signature(&mut self, anon: &crate::type_def::AnonymousType) -> String {
        if let Some(string_index) = &anon.string_index {
            let value = self.translate(string_index.value_type);
            return format!("!Object<string,{value}>");
        }
        if let Some(number_index) = &anon.number_index {
            let value = self.translate(number_index.value_type);
            return format!("!Object<number,{value}>");
        }
        self.warn(codes::UNHANDLED_ANONYMOUS_SHAPE, "indexable type declares no index signature value type");
        "!Object<?,?>".to_string()
    }

    fn translate_construct_signature(&mut self, ctor: &crate::type_def::Signature) -> String {
        for &tp in &ctor.type_parameters {
            self.scope.blacklist(tp);
        }
        let return_type = self.translate(ctor.return_type);
        let params = self.convert_parameters(&ctor.parameters);
        if params.is_empty() {
            format!("function(new: ({return_type})): ?")
        } else {
            format!("function(new: ({return_type}), {}): ?", params.join(", "))
        }
    }

    /// `signature-to-string` (§4.4.7).
    pub fn signature_to_string(&mut self, sig: &crate::type_def::Signature) -> String {
        if sig.declaration_is_jsdoc {
            self.warn(codes::MISSING_DECLARATION, "signature has no real declaration");
            return "Function".to_string();
        }
        for &tp in &sig.type_parameters {
            self.scope.blacklist(tp);
        }

        let mut parts: Vec<String> = Vec::new();
        let mut params = sig.parameters.clone();
        if let Some(this_symbol) = sig.this_parameter {
            let this_type = self.host.type_of_symbol_at_location(this_symbol, self.reference_node);
            if this_type.is_none() {
                self.warn(codes::MISSING_DECLARATION, "`this` parameter has no type annotation");
            } else {
                let translated = self.translate(this_type);
                parts.push(format!("this: ({translated})"));
            }
        } else if let Some(&first) = params.first()
            && self.host.symbol(first).name == "this"
        {
            params.remove(0);
        }

        parts.extend(self.convert_parameters(&params));
        let return_type = self.translate(sig.return_type);
        format!("function({}): {return_type}", parts.join(", "))
    }

    fn convert_parameters(&mut self, parameters: &[SymbolId]) -> Vec<String> {
        let mut out = Vec::new();
        for &param in parameters {
            let decl = self.param_declaration(param);
            let (optional, rest) = match &decl {
                Some(d) => (d.optional, d.rest),
                None => (false, false),
            };
            let param_type = self.host.type_of_symbol_at_location(param, self.reference_node);

            let mut rendered = if rest {
                let ty = self.host.ty(param_type).clone();
                match &ty.data {
                    TypeData::Object(obj) if obj.object_flags & object_flags::REFERENCE != 0 => {
                        let r = obj.reference.as_ref().expect("REFERENCE flag set without a reference payload");
                        let Some(&element) = r.type_arguments.first() else {
                            continue;
                        };
                        self.translate(element)
                    }
                    _ => {
                        self.warn(codes::UNRECOGNIZED_REST_TYPE, "rest parameter type is not a type reference");
                        "!Array<?>".to_string()
                    }
                }
            } else {
                self.translate(param_type)
            };

            if rest {
                rendered = format!("...{rendered}");
            }
            if optional {
                rendered.push('=');
            }
            out.push(rendered);
        }
        out
    }

    fn param_declaration(&self, param: SymbolId) -> Option<crate::model::ParamDecl> {
        let symbol = self.host.symbol(param);
        symbol.declarations.iter().find_map(|&d| {
            let decl = self.host.declaration(d);
            decl.parameters
                .iter()
                .find(|p| p.name == symbol.name)
                .cloned()
                .or_else(|| decl.this_parameter.clone())
        })
    }
}

fn is_valid_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "../tests/translator_tests.rs"]
mod tests;
