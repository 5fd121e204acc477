use super::*;
use crate::alias_scope::AliasScope;
use crate::flags::modifier_flags;
use crate::host::NoopEnsureDeclared;
use crate::mangle::DefaultMangler;
use crate::model::DeclarationKind;
use crate::test_support::MockHost;

#[test]
fn is_blacklisted_requires_every_declaration_to_match() {
    let mut host = MockHost::new();
    let blocked_file = host.add_file("gen/blocked.ts", false, true);
    let clean_file = host.add_file("src/clean.ts", false, true);
    let symbol = host.add_symbol("Foo", 0, None);
    let only_blocked = host.add_declaration(blocked_file, DeclarationKind::Class, None, 0, false, vec![]);
    host.attach_declaration(symbol, only_blocked);

    let blacklist = PathBlacklist::new(["gen/blocked.ts"]);
    assert!(is_blacklisted(&host, &blacklist, symbol));

    let mixed = host.add_symbol("Bar", 0, None);
    let decl_blocked = host.add_declaration(blocked_file, DeclarationKind::Class, None, 0, false, vec![]);
    let decl_clean = host.add_declaration(clean_file, DeclarationKind::Class, None, 0, false, vec![]);
    host.attach_declaration(mixed, decl_blocked);
    host.attach_declaration(mixed, decl_clean);
    assert!(!is_blacklisted(&host, &blacklist, mixed));
}

#[test]
fn is_blacklisted_is_false_for_symbol_without_declarations() {
    let mut host = MockHost::new();
    let symbol = host.add_symbol("Orphan", 0, None);
    let blacklist = PathBlacklist::new(Vec::<&str>::new());
    assert!(!is_blacklisted(&host, &blacklist, symbol));
}

#[test]
fn classify_declarations_detects_ambient_ancestor() {
    let mut host = MockHost::new();
    let file = host.add_file("lib.d.ts", true, false);
    let symbol = host.add_symbol("Foo", 0, None);
    let decl = host.add_declaration(file, DeclarationKind::Class, None, modifier_flags::AMBIENT, false, vec![]);
    host.attach_declaration(symbol, decl);

    let classification = classify_declarations(&host, Some(symbol));
    assert!(classification.is_ambient);
    assert!(!classification.is_in_namespace);
}

#[test]
fn classify_declarations_detects_namespace_ancestor() {
    let mut host = MockHost::new();
    let file = host.add_file("a.ts", false, false);
    let ns_symbol = host.add_symbol("NS", 0, None);
    let ns_decl = host.add_declaration(file, DeclarationKind::ModuleDeclaration, None, 0, false, vec![]);
    let symbol = host.add_symbol("Foo", 0, Some(ns_symbol));
    let decl = host.add_declaration(file, DeclarationKind::Class, Some(ns_decl), 0, false, vec![]);
    host.attach_declaration(symbol, decl);

    let classification = classify_declarations(&host, Some(symbol));
    assert!(classification.is_in_namespace);
    assert!(!classification.is_ambient);
}

#[test]
fn classify_declarations_detects_module_file() {
    let mut host = MockHost::new();
    let file = host.add_file("a.ts", false, true);
    let symbol = host.add_symbol("Foo", 0, None);
    let decl = host.add_declaration(file, DeclarationKind::Class, None, 0, false, vec![]);
    host.attach_declaration(symbol, decl);

    let classification = classify_declarations(&host, Some(symbol));
    assert!(classification.is_module);
}

#[test]
fn classify_declarations_of_no_symbol_is_all_false() {
    let host = MockHost::new();
    let classification = classify_declarations(&host, None);
    assert!(!classification.is_ambient);
    assert!(!classification.is_in_namespace);
    assert!(!classification.is_module);
}

#[test]
fn symbol_to_string_uses_plain_name_without_module_prefix() {
    let mut host = MockHost::new();
    let file = host.add_file("a.ts", false, false);
    let symbol = host.add_symbol("Foo", 0, None);
    let decl = host.add_declaration(file, DeclarationKind::Class, None, 0, false, vec![]);
    host.attach_declaration(symbol, decl);
    host.set_entity_name(symbol, vec![symbol]);

    let mangler = DefaultMangler;
    let mut scope = AliasScope::new();
    let mut ensure = NoopEnsureDeclared;
    let name = symbol_to_string(&host, &mangler, &mut scope, &mut ensure, false, symbol);
    assert_eq!(name.as_deref(), Some("Foo"));
}

#[test]
fn symbol_to_string_adds_module_prefix_in_externs_mode() {
    let mut host = MockHost::new();
    let file = host.add_file("a.ts", false, true);
    let symbol = host.add_symbol("Foo", 0, None);
    let decl = host.add_declaration(file, DeclarationKind::Class, None, 0, false, vec![]);
    host.attach_declaration(symbol, decl);
    host.set_entity_name(symbol, vec![symbol]);

    let mangler = DefaultMangler;
    let mut scope = AliasScope::new();
    let mut ensure = NoopEnsureDeclared;
    let name = symbol_to_string(&host, &mangler, &mut scope, &mut ensure, true, symbol).unwrap();
    assert_eq!(name, format!("{}.Foo", mangler.mangle("a.ts")));
}

#[test]
fn symbol_to_string_adds_module_prefix_for_ambient_exported_external() {
    let mut host = MockHost::new();
    let file = host.add_file("a.ts", false, true);
    let symbol = host.add_symbol("Foo", 0, None);
    let flags = modifier_flags::AMBIENT | modifier_flags::EXPORT;
    let decl = host.add_declaration(file, DeclarationKind::Class, None, flags, false, vec![]);
    host.attach_declaration(symbol, decl);
    host.set_entity_name(symbol, vec![symbol]);

    let mangler = DefaultMangler;
    let mut scope = AliasScope::new();
    let mut ensure = NoopEnsureDeclared;
    let name = symbol_to_string(&host, &mangler, &mut scope, &mut ensure, false, symbol).unwrap();
    assert_eq!(name, format!("{}.Foo", mangler.mangle("a.ts")));
}

#[test]
fn symbol_to_string_respects_alias_scope_short_circuit() {
    let mut host = MockHost::new();
    let file = host.add_file("a.ts", false, true);
    let symbol = host.add_symbol("Foo", 0, None);
    let decl = host.add_declaration(file, DeclarationKind::Class, None, 0, false, vec![]);
    host.attach_declaration(symbol, decl);
    host.set_entity_name(symbol, vec![symbol]);

    let mangler = DefaultMangler;
    let mut scope = AliasScope::new();
    scope.set(symbol, "module$aliased$Foo");
    let mut ensure = NoopEnsureDeclared;
    let name = symbol_to_string(&host, &mangler, &mut scope, &mut ensure, true, symbol).unwrap();
    assert_eq!(name, "module$aliased$Foo");
}
