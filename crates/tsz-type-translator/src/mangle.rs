//! C1 Name Mangler: a default, deterministic filename -> global-identifier
//! transform (§4.1). The translator only requires that whatever `NameMangler`
//! it is handed returns a string that is a legal leading identifier in the
//! target dialect; this is one reasonable implementation, not a contract.

use crate::host::NameMangler;
use std::fmt::Write as _;

/// Replaces every byte that cannot appear in a leading identifier position
/// with `_`, then appends a short disambiguating hash so that files which
/// collide after sanitization (e.g. `a/b.ts` and `a_b.ts`) still mangle to
/// distinct identifiers.
#[derive(Default, Debug, Clone, Copy)]
pub struct DefaultMangler;

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

impl NameMangler for DefaultMangler {
    fn mangle(&self, filename: &str) -> String {
        let mut out = String::with_capacity(filename.len() + 10);
        out.push_str("module$");
        for (i, c) in filename.chars().enumerate() {
            if c.is_ascii_alphanumeric() || c == '_' {
                out.push(c);
            } else if i == 0 && c == '$' {
                out.push(c);
            } else {
                out.push('_');
            }
        }
        let _ = write!(out, "${:08x}", fnv1a(filename.as_bytes()) & 0xffff_ffff);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mangle_is_deterministic() {
        let m = DefaultMangler;
        assert_eq!(m.mangle("a/b/c.ts"), m.mangle("a/b/c.ts"));
    }

    #[test]
    fn mangle_is_injective_for_colliding_sanitized_names() {
        let m = DefaultMangler;
        assert_ne!(m.mangle("a/b.ts"), m.mangle("a_b.ts"));
    }

    #[test]
    fn mangle_is_a_legal_leading_identifier() {
        let m = DefaultMangler;
        let mangled = m.mangle("weird file!@#.ts");
        let first = mangled.chars().next().unwrap();
        assert!(first.is_ascii_alphabetic() || first == '_' || first == '$');
    }
}
