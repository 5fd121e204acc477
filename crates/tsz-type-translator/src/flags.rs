//! Kind-flag bitfields for the capabilities the translator dispatches on.
//!
//! Mirrors the source type system's `TypeFlags` / `ObjectFlags` bitfields:
//! a type carries one (or, for unions/enum-literals, more than one) of these
//! bits, plus for object kinds a second independent bitfield.

/// Flags that describe the kind of a type.
pub mod type_flags {
    pub const ANY: u32 = 1 << 0;
    pub const UNKNOWN: u32 = 1 << 1;
    pub const STRING: u32 = 1 << 2;
    pub const NUMBER: u32 = 1 << 3;
    pub const BOOLEAN: u32 = 1 << 4;
    pub const ENUM: u32 = 1 << 5;
    pub const BIG_INT: u32 = 1 << 6;

    pub const STRING_LITERAL: u32 = 1 << 7;
    pub const NUMBER_LITERAL: u32 = 1 << 8;
    pub const BOOLEAN_LITERAL: u32 = 1 << 9;
    pub const ENUM_LITERAL: u32 = 1 << 10;

    pub const ES_SYMBOL: u32 = 1 << 11;
    pub const UNIQUE_ES_SYMBOL: u32 = 1 << 12;

    pub const VOID: u32 = 1 << 13;
    pub const UNDEFINED: u32 = 1 << 14;
    pub const NULL: u32 = 1 << 15;
    pub const NEVER: u32 = 1 << 16;

    pub const TYPE_PARAMETER: u32 = 1 << 17;
    pub const OBJECT: u32 = 1 << 18;
    pub const UNION: u32 = 1 << 19;
    pub const INTERSECTION: u32 = 1 << 20;

    pub const INDEX: u32 = 1 << 21; // keyof T
    pub const INDEXED_ACCESS: u32 = 1 << 22; // T[K]
    pub const CONDITIONAL: u32 = 1 << 23; // T extends U ? X : Y
    pub const SUBSTITUTION: u32 = 1 << 24;

    pub const NON_PRIMITIVE: u32 = 1 << 25; // object

    /// Kinds the public dispatch table documents (see §4.4.2 primary dispatch).
    /// A type whose flags, once masked against this set, do not match exactly
    /// one documented variant falls through to the union/enum-literal multi-bit
    /// handling, or is a contract violation.
    pub const DOCUMENTED: u32 = ANY
        | UNKNOWN
        | STRING
        | STRING_LITERAL
        | NUMBER
        | NUMBER_LITERAL
        | BOOLEAN
        | BOOLEAN_LITERAL
        | ENUM
        | ENUM_LITERAL
        | ES_SYMBOL
        | UNIQUE_ES_SYMBOL
        | VOID
        | UNDEFINED
        | NULL
        | NEVER
        | TYPE_PARAMETER
        | OBJECT
        | UNION
        | INTERSECTION
        | INDEX
        | INDEXED_ACCESS
        | CONDITIONAL
        | SUBSTITUTION
        | NON_PRIMITIVE
        | BIG_INT;
}

/// Additional flags for object-kind types.
pub mod object_flags {
    pub const CLASS: u32 = 1 << 0;
    pub const INTERFACE: u32 = 1 << 1;
    pub const REFERENCE: u32 = 1 << 2;
    pub const TUPLE: u32 = 1 << 3;
    pub const ANONYMOUS: u32 = 1 << 4;
    pub const MAPPED: u32 = 1 << 5;
    pub const INSTANTIATED: u32 = 1 << 6;
    pub const OBJECT_LITERAL: u32 = 1 << 7;

    pub const CLASS_OR_INTERFACE: u32 = CLASS | INTERFACE;
}

/// Flags that describe the kind of a symbol.
pub mod symbol_flags {
    pub const VALUE: u32 = 1 << 0;
    pub const TYPE_PARAMETER: u32 = 1 << 1;
    pub const ALIAS: u32 = 1 << 2;
    pub const FUNCTION: u32 = 1 << 3;
    pub const METHOD: u32 = 1 << 4;
    pub const PROPERTY: u32 = 1 << 5;
    pub const ENUM_MEMBER: u32 = 1 << 6;
    pub const CLASS: u32 = 1 << 7;
    pub const INTERFACE: u32 = 1 << 8;
}

/// Combined modifier flags carried by a declaration.
pub mod modifier_flags {
    pub const NONE: u32 = 0;
    pub const AMBIENT: u32 = 1 << 0;
    pub const EXPORT: u32 = 1 << 1;
}
