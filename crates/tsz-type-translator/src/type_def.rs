//! Type variants the translator must be able to render (§3 Data Model, §4.4).

use crate::flags::type_flags;
use crate::ids::{SignatureId, SymbolId, TypeId};
use indexmap::IndexMap;

/// An intrinsic/primitive type: any, unknown, string, number, boolean, void,
/// undefined, null, never, bigint, symbol, unique symbol, or non-primitive
/// `object`. Literal kinds reuse this shape with the corresponding `*_LITERAL`
/// flag bit set instead of the base flag, mirroring how the upstream type
/// system widens a literal to its base type for display.
#[derive(Clone, Debug)]
pub struct IntrinsicType {
    pub flags: u32,
}

/// The generic-instantiation payload of an object type whose `object_flags`
/// carries [`crate::flags::object_flags::REFERENCE`]: `Array<number>`, a
/// tuple, or a self-referential generic.
#[derive(Clone, Debug)]
pub struct TypeReference {
    pub target: TypeId,
    pub type_arguments: Vec<TypeId>,
}

/// A union type (`A | B | C`).
#[derive(Clone, Debug)]
pub struct UnionType {
    pub members: Vec<TypeId>,
}

/// A type parameter (`T` in `function f<T>()`).
#[derive(Clone, Debug)]
pub struct TypeParameterType {
    pub symbol: SymbolId,
}

/// An enum type used nominally (e.g. the type of `enum E { A }` itself).
#[derive(Clone, Debug)]
pub struct EnumType {
    pub symbol: Option<SymbolId>,
}

/// An enum member literal type (e.g. the type of the expression `E.A`).
#[derive(Clone, Debug)]
pub struct EnumLiteralType {
    pub symbol: Option<SymbolId>,
    /// The enum type this literal belongs to, or `TypeId::NONE` when the
    /// literal is degenerate (a single-member enum whose base type is itself).
    pub base_type: TypeId,
}

/// One call or construct signature.
#[derive(Clone, Debug)]
pub struct Signature {
    /// The signature's own declaration, when it is backed by real (non-JSDoc)
    /// syntax. `None` means "no declaration to translate against" and forces
    /// the JSDoc-declaration fallback in §4.4.7.
    pub declaration_is_jsdoc: bool,
    pub type_parameters: Vec<SymbolId>,
    pub this_parameter: Option<SymbolId>,
    pub parameters: Vec<SymbolId>,
    pub return_type: TypeId,
}

/// A string-index or number-index signature on an anonymous object type.
#[derive(Clone, Debug)]
pub struct IndexInfo {
    pub value_type: TypeId,
}

/// An anonymous structural object type: `{ a: number; b: string }`,
/// `(x: number) => string`, `{ [k: string]: Foo }`, etc.
#[derive(Clone, Debug, Default)]
pub struct AnonymousType {
    pub call_signatures: Vec<SignatureId>,
    pub construct_signatures: Vec<SignatureId>,
    /// Member name -> symbol whose type is looked up via
    /// `type_of_symbol_at_location` at translation time.
    pub members: IndexMap<String, SymbolId>,
    pub string_index: Option<IndexInfo>,
    pub number_index: Option<IndexInfo>,
}

/// A class, interface, type reference, anonymous structural type, mapped
/// type, instantiated type, or object-literal type (distinguished by
/// `object_flags`; `reference` is populated iff
/// [`crate::flags::object_flags::REFERENCE`] is set, `anonymous` iff
/// [`crate::flags::object_flags::ANONYMOUS`] is).
#[derive(Clone, Debug, Default)]
pub struct ObjectType {
    pub object_flags: u32,
    pub symbol: Option<SymbolId>,
    pub reference: Option<TypeReference>,
    pub anonymous: Option<AnonymousType>,
}

/// All type variants the translator can be asked to render.
#[derive(Clone, Debug)]
pub enum TypeData {
    Intrinsic(IntrinsicType),
    Object(Box<ObjectType>),
    Union(Box<UnionType>),
    TypeParameter(TypeParameterType),
    Enum(EnumType),
    EnumLiteral(Box<EnumLiteralType>),
    /// Conditional, substitution, intersection, index, or indexed-access
    /// types: all recoverable-warn-and-`?` per §4.4.2, so no payload is
    /// needed beyond the flag bits used to recognize them.
    Inexpressible,
}

/// A resolved semantic type object: its raw kind-flag bitfield plus whichever
/// variant payload that bitfield selects.
#[derive(Clone, Debug)]
pub struct Type {
    pub flags: u32,
    pub data: TypeData,
}

impl Type {
    /// The type-kind bitfield masked to the publicly documented variants
    /// (§4.4.2: "mask the type's kind bits to the set of publicly documented
    /// variants").
    #[must_use]
    pub fn kind_flags(&self) -> u32 {
        self.flags & type_flags::DOCUMENTED
    }

    #[must_use]
    pub fn has_flags(&self, flags: u32) -> bool {
        (self.flags & flags) != 0
    }

    /// The symbol associated with this type, if any (§3: "optionally an
    /// associated symbol").
    #[must_use]
    pub fn symbol(&self) -> Option<SymbolId> {
        match &self.data {
            TypeData::Object(o) => o.symbol,
            TypeData::TypeParameter(t) => Some(t.symbol),
            TypeData::Enum(e) => e.symbol,
            TypeData::EnumLiteral(e) => e.symbol,
            TypeData::Intrinsic(_) | TypeData::Union(_) | TypeData::Inexpressible => None,
        }
    }
}
