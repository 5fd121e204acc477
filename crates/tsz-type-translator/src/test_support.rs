//! An in-memory [`TypeCheckerHost`] for tests. Every id-keyed query is
//! backed by a plain `Vec` indexed by the id's raw value; builder methods
//! append and hand back the freshly minted id.

use crate::host::{IndexKind, TypeCheckerHost};
use crate::ids::{DeclId, FileId, NodeId, SignatureId, SymbolId, TypeId};
use crate::model::{Declaration, DeclarationKind, ParamDecl, SourceFile, Symbol};
use crate::type_def::{IndexInfo, Signature, Type};
use std::collections::HashMap;

#[derive(Default)]
pub struct MockHost {
    files: Vec<SourceFile>,
    symbols: Vec<Symbol>,
    decls: Vec<Declaration>,
    types: Vec<Type>,
    signatures: Vec<Signature>,
    entity_names: HashMap<u32, Vec<SymbolId>>,
    base_type_of_literal: HashMap<u32, TypeId>,
    types_at_location: HashMap<u32, TypeId>,
    aliased: HashMap<u32, SymbolId>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, filename: &str, is_declaration_file: bool, is_external_module: bool) -> FileId {
        self.files.push(SourceFile {
            filename: filename.to_string(),
            is_declaration_file,
            is_external_module,
        });
        FileId((self.files.len() - 1) as u32)
    }

    pub fn add_symbol(&mut self, name: &str, flags: u32, parent: Option<SymbolId>) -> SymbolId {
        self.symbols.push(Symbol {
            name: name.to_string(),
            flags,
            declarations: Vec::new(),
            parent,
            aliased_symbol: None,
        });
        SymbolId((self.symbols.len() - 1) as u32)
    }

    pub fn set_aliased_symbol(&mut self, symbol: SymbolId, target: SymbolId) {
        self.symbols[symbol.0 as usize].aliased_symbol = Some(target);
        self.aliased.insert(symbol.0, target);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_declaration(
        &mut self,
        file: FileId,
        kind: DeclarationKind,
        parent: Option<DeclId>,
        modifier_flags: u32,
        is_jsdoc: bool,
        type_parameters: Vec<SymbolId>,
    ) -> DeclId {
        self.decls.push(Declaration {
            source_file: file,
            modifier_flags,
            kind,
            parent,
            name: None,
            is_jsdoc,
            type_parameters,
            this_parameter: None,
            parameters: Vec::new(),
        });
        DeclId((self.decls.len() - 1) as u32)
    }

    pub fn set_declaration_parameters(&mut self, decl: DeclId, parameters: Vec<ParamDecl>, this_parameter: Option<ParamDecl>) {
        let d = &mut self.decls[decl.0 as usize];
        d.parameters = parameters;
        d.this_parameter = this_parameter;
    }

    pub fn set_declaration_name(&mut self, decl: DeclId, name: crate::model::DeclName) {
        self.decls[decl.0 as usize].name = Some(name);
    }

    pub fn attach_declaration(&mut self, symbol: SymbolId, decl: DeclId) {
        self.symbols[symbol.0 as usize].declarations.push(decl);
    }

    pub fn add_type(&mut self, ty: Type) -> TypeId {
        self.types.push(ty);
        TypeId((self.types.len() - 1) as u32)
    }

    /// Overwrites a previously minted type id, used to build self-referential
    /// fixtures where the payload must name its own id.
    pub fn set_type(&mut self, id: TypeId, ty: Type) {
        self.types[id.0 as usize] = ty;
    }

    pub fn add_signature(&mut self, sig: Signature) -> SignatureId {
        self.signatures.push(sig);
        SignatureId((self.signatures.len() - 1) as u32)
    }

    pub fn set_entity_name(&mut self, symbol: SymbolId, segments: Vec<SymbolId>) {
        self.entity_names.insert(symbol.0, segments);
    }

    pub fn set_base_type_of_literal(&mut self, literal: TypeId, base: TypeId) {
        self.base_type_of_literal.insert(literal.0, base);
    }

    pub fn set_type_of_symbol(&mut self, symbol: SymbolId, ty: TypeId) {
        self.types_at_location.insert(symbol.0, ty);
    }
}

impl TypeCheckerHost for MockHost {
    fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    fn declaration(&self, id: DeclId) -> &Declaration {
        &self.decls[id.0 as usize]
    }

    fn source_file(&self, id: FileId) -> &SourceFile {
        &self.files[id.0 as usize]
    }

    fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.0 as usize]
    }

    fn signature(&self, id: SignatureId) -> &Signature {
        &self.signatures[id.0 as usize]
    }

    fn entity_name_for_symbol(&self, symbol: SymbolId) -> Option<Vec<SymbolId>> {
        self.entity_names.get(&symbol.0).cloned().or_else(|| Some(vec![symbol]))
    }

    fn base_type_of_literal(&self, ty: TypeId) -> Option<TypeId> {
        self.base_type_of_literal.get(&ty.0).copied()
    }

    fn type_of_symbol_at_location(&self, symbol: SymbolId, _at: Option<NodeId>) -> TypeId {
        self.types_at_location.get(&symbol.0).copied().unwrap_or(TypeId::NONE)
    }

    fn return_type_of_signature(&self, sig: SignatureId) -> TypeId {
        self.signatures[sig.0 as usize].return_type
    }

    fn index_type_of_type(&self, ty: TypeId, kind: IndexKind) -> Option<IndexInfo> {
        let TypeId(idx) = ty;
        let crate::type_def::TypeData::Object(obj) = &self.types[idx as usize].data else {
            return None;
        };
        let anon = obj.anonymous.as_ref()?;
        match kind {
            IndexKind::String => anon.string_index.clone(),
            IndexKind::Number => anon.number_index.clone(),
        }
    }

    fn symbol_at_location(&self, _node: NodeId) -> Option<SymbolId> {
        None
    }

    fn aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.aliased.get(&symbol.0).copied()
    }
}

/// A primitive type with no flags beyond `flags`, matching how the upstream
/// analyzer represents `string`, `number`, `any`, etc.
pub fn intrinsic(flags: u32) -> Type {
    Type {
        flags,
        data: crate::type_def::TypeData::Intrinsic(crate::type_def::IntrinsicType { flags }),
    }
}
