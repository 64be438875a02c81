//! Primitive type registry and scalar coercion.
//!
//! Every primitive is an immutable descriptor carrying its display name and
//! a coercion rule. Descriptors are registered once in a static table and
//! looked up by name; named handles are provided for direct use.
//!
//! Integer coercion follows the clamp policy: an out-of-range input is
//! bounded to the nearest limit rather than rejected, so `value_from` always
//! produces a legal literal. Callers that need strict rejection check
//! [`Primitive::is_ok`] first.

use crate::error::{Error, Result};
use crate::value::{Raw, Value};

/// Coercion rule attached to a primitive type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Unsigned { bits: u32 },
    Signed { bits: u32 },
    Bool,
    Char,
    Str,
}

/// An immutable primitive type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    name: &'static str,
    rule: Rule,
}

pub const U8: Primitive = Primitive::new("u8", Rule::Unsigned { bits: 8 });
pub const U16: Primitive = Primitive::new("u16", Rule::Unsigned { bits: 16 });
pub const U32: Primitive = Primitive::new("u32", Rule::Unsigned { bits: 32 });
pub const U64: Primitive = Primitive::new("u64", Rule::Unsigned { bits: 64 });
pub const U128: Primitive = Primitive::new("u128", Rule::Unsigned { bits: 128 });
pub const I8: Primitive = Primitive::new("i8", Rule::Signed { bits: 8 });
pub const I16: Primitive = Primitive::new("i16", Rule::Signed { bits: 16 });
pub const I32: Primitive = Primitive::new("i32", Rule::Signed { bits: 32 });
pub const I64: Primitive = Primitive::new("i64", Rule::Signed { bits: 64 });
pub const I128: Primitive = Primitive::new("i128", Rule::Signed { bits: 128 });
pub const BOOL: Primitive = Primitive::new("bool", Rule::Bool);
pub const CHAR: Primitive = Primitive::new("char", Rule::Char);
pub const STR: Primitive = Primitive::new("str", Rule::Str);

static REGISTRY: &[Primitive] = &[
    U8, U16, U32, U64, U128, I8, I16, I32, I64, I128, BOOL, CHAR, STR,
];

/// Numeric view of a raw input, before clamping.
enum Num {
    Int(i128),
    UInt(u128),
}

fn numeric(raw: &Raw) -> Option<Num> {
    match raw {
        Raw::Int(v) => Some(Num::Int(*v)),
        Raw::UInt(v) => Some(Num::UInt(*v)),
        Raw::Str(s) => {
            let s = s.trim();
            if let Ok(v) = s.parse::<i128>() {
                Some(Num::Int(v))
            } else if let Ok(v) = s.parse::<u128>() {
                Some(Num::UInt(v))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn unsigned_max(bits: u32) -> u128 {
    if bits == 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

fn signed_bounds(bits: u32) -> (i128, i128) {
    if bits == 128 {
        (i128::MIN, i128::MAX)
    } else {
        (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1)
    }
}

impl Primitive {
    const fn new(name: &'static str, rule: Rule) -> Self {
        Self { name, rule }
    }

    /// Look a descriptor up by its registered name.
    pub fn lookup(name: &str) -> Option<Primitive> {
        REGISTRY.iter().copied().find(|p| p.name == name)
    }

    /// All registered descriptors, in registration order.
    pub fn all() -> &'static [Primitive] {
        REGISTRY
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Coerce a raw input into a literal for this type.
    ///
    /// Integer inputs outside the type's range are clamped to the nearest
    /// bound. Bool and char inputs that cannot be normalized fail with
    /// [`Error::Format`]; string coercion accepts any scalar.
    pub fn value_from(&self, raw: &Raw) -> Result<Value> {
        if let Raw::Ident(name) = raw {
            return Ok(Value::Ref(name.clone()));
        }
        match self.rule {
            Rule::Unsigned { bits } => self.coerce_unsigned(bits, raw),
            Rule::Signed { bits } => self.coerce_signed(bits, raw),
            Rule::Bool => self.coerce_bool(raw),
            Rule::Char => self.coerce_char(raw),
            Rule::Str => self.coerce_str(raw),
        }
    }

    /// Strict membership test: true when `value_from` would succeed without
    /// clamping or rejecting. A clamped integer is *not* ok.
    pub fn is_ok(&self, raw: &Raw) -> bool {
        if matches!(raw, Raw::Ident(_)) {
            return true;
        }
        match self.rule {
            Rule::Unsigned { bits } => match numeric(raw) {
                Some(Num::Int(v)) => v >= 0 && (v as u128) <= unsigned_max(bits),
                Some(Num::UInt(v)) => v <= unsigned_max(bits),
                None => false,
            },
            Rule::Signed { bits } => {
                let (min, max) = signed_bounds(bits);
                match numeric(raw) {
                    Some(Num::Int(v)) => v >= min && v <= max,
                    Some(Num::UInt(v)) => v <= max as u128,
                    None => false,
                }
            }
            _ => self.value_from(raw).is_ok(),
        }
    }

    fn coerce_unsigned(&self, bits: u32, raw: &Raw) -> Result<Value> {
        let max = unsigned_max(bits);
        let v = match numeric(raw).ok_or_else(|| self.format_error(raw))? {
            Num::Int(v) if v < 0 => 0,
            Num::Int(v) => (v as u128).min(max),
            Num::UInt(v) => v.min(max),
        };
        Ok(Value::UInt(v))
    }

    fn coerce_signed(&self, bits: u32, raw: &Raw) -> Result<Value> {
        let (min, max) = signed_bounds(bits);
        let v = match numeric(raw).ok_or_else(|| self.format_error(raw))? {
            Num::Int(v) => v.clamp(min, max),
            Num::UInt(v) if v > i128::MAX as u128 => max,
            Num::UInt(v) => (v as i128).clamp(min, max),
        };
        Ok(Value::Int(v))
    }

    fn coerce_bool(&self, raw: &Raw) -> Result<Value> {
        let v = match raw {
            Raw::Bool(b) => *b,
            Raw::Int(0) | Raw::UInt(0) => false,
            Raw::Int(1) | Raw::UInt(1) => true,
            Raw::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(self.format_error(raw)),
            },
            _ => return Err(self.format_error(raw)),
        };
        Ok(Value::Bool(v))
    }

    fn coerce_char(&self, raw: &Raw) -> Result<Value> {
        let v = match raw {
            Raw::Char(c) => Some(*c),
            Raw::Str(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    // Not a single scalar: read as a hexadecimal codepoint.
                    _ => {
                        let digits = s
                            .trim()
                            .trim_start_matches("0x")
                            .trim_start_matches("0X");
                        u32::from_str_radix(digits, 16)
                            .ok()
                            .and_then(char::from_u32)
                    }
                }
            }
            Raw::Int(v) => u32::try_from(*v).ok().and_then(char::from_u32),
            Raw::UInt(v) => u32::try_from(*v).ok().and_then(char::from_u32),
            _ => None,
        };
        v.map(Value::Char).ok_or_else(|| self.format_error(raw))
    }

    fn coerce_str(&self, raw: &Raw) -> Result<Value> {
        let v = match raw {
            Raw::Str(s) => s.clone(),
            Raw::Char(c) => c.to_string(),
            Raw::Bool(b) => b.to_string(),
            Raw::Int(v) => v.to_string(),
            Raw::UInt(v) => v.to_string(),
            _ => return Err(self.format_error(raw)),
        };
        Ok(Value::Str(v))
    }

    fn format_error(&self, raw: &Raw) -> Error {
        Error::Format {
            ty: self.name.to_string(),
            value: raw.to_string(),
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamp(ty: Primitive, raw: impl Into<Raw>) -> Value {
        ty.value_from(&raw.into()).unwrap()
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Primitive::lookup("u8"), Some(U8));
        assert_eq!(Primitive::lookup("i128"), Some(I128));
        assert_eq!(Primitive::lookup("str"), Some(STR));
        assert_eq!(Primitive::lookup("f32"), None);
    }

    #[test]
    fn test_u8_clamp() {
        assert_eq!(clamp(U8, 0), Value::UInt(0));
        assert_eq!(clamp(U8, 255), Value::UInt(255));
        assert_eq!(clamp(U8, 256), Value::UInt(255));
        assert_eq!(clamp(U8, -1), Value::UInt(0));
        assert_eq!(clamp(U8, -100), Value::UInt(0));
    }

    #[test]
    fn test_u8_is_ok() {
        assert!(U8.is_ok(&Raw::Int(0)));
        assert!(U8.is_ok(&Raw::Int(255)));
        assert!(!U8.is_ok(&Raw::Int(256)));
        assert!(!U8.is_ok(&Raw::Int(-1)));
        assert!(!U8.is_ok(&Raw::Str("text".into())));
    }

    #[test]
    fn test_i8_two_complement_bounds() {
        assert_eq!(clamp(I8, 127), Value::Int(127));
        assert_eq!(clamp(I8, 128), Value::Int(127));
        assert_eq!(clamp(I8, -128), Value::Int(-128));
        assert_eq!(clamp(I8, -129), Value::Int(-128));
        assert!(I8.is_ok(&Raw::Int(-128)));
        assert!(!I8.is_ok(&Raw::Int(-129)));
        assert!(!I8.is_ok(&Raw::Int(128)));
    }

    #[test]
    fn test_u16_i16() {
        assert_eq!(clamp(U16, 65535), Value::UInt(65535));
        assert_eq!(clamp(U16, 65536), Value::UInt(65535));
        assert_eq!(clamp(U16, -1), Value::UInt(0));
        assert_eq!(clamp(I16, 32767), Value::Int(32767));
        assert_eq!(clamp(I16, 32768), Value::Int(32767));
        assert_eq!(clamp(I16, -32768), Value::Int(-32768));
        assert_eq!(clamp(I16, -32769), Value::Int(-32768));
    }

    #[test]
    fn test_u32_i32() {
        assert_eq!(clamp(U32, 4294967295i64), Value::UInt(4294967295));
        assert_eq!(clamp(U32, 4294967296i64), Value::UInt(4294967295));
        assert_eq!(clamp(I32, 2147483648i64), Value::Int(2147483647));
        assert_eq!(clamp(I32, -2147483649i64), Value::Int(-2147483648));
    }

    #[test]
    fn test_u64_i64() {
        let umax = u64::MAX as u128;
        assert_eq!(clamp(U64, umax), Value::UInt(umax));
        assert_eq!(clamp(U64, umax + 1), Value::UInt(umax));
        assert!(!U64.is_ok(&Raw::UInt(umax + 1)));
        let imax = i64::MAX as i128;
        assert_eq!(clamp(I64, imax + 1), Value::Int(imax));
        assert_eq!(clamp(I64, i64::MIN as i128 - 1), Value::Int(i64::MIN as i128));
    }

    #[test]
    fn test_u128_i128() {
        assert_eq!(clamp(U128, u128::MAX), Value::UInt(u128::MAX));
        assert_eq!(clamp(U128, -1), Value::UInt(0));
        assert!(U128.is_ok(&Raw::UInt(u128::MAX)));
        assert_eq!(clamp(I128, u128::MAX), Value::Int(i128::MAX));
        assert!(!I128.is_ok(&Raw::UInt(u128::MAX)));
        assert_eq!(clamp(I128, i128::MIN), Value::Int(i128::MIN));
        assert!(I128.is_ok(&Raw::Int(i128::MIN)));
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(clamp(U8, "300"), Value::UInt(255));
        assert_eq!(clamp(I8, "-5"), Value::Int(-5));
        assert!(U8.is_ok(&Raw::Str("255".into())));
        assert!(!U8.is_ok(&Raw::Str("256".into())));
    }

    #[test]
    fn test_bool() {
        assert_eq!(clamp(BOOL, true), Value::Bool(true));
        assert_eq!(clamp(BOOL, "True"), Value::Bool(true));
        assert_eq!(clamp(BOOL, "FALSE"), Value::Bool(false));
        assert_eq!(clamp(BOOL, 1), Value::Bool(true));
        assert_eq!(clamp(BOOL, 0), Value::Bool(false));
        assert!(BOOL.value_from(&Raw::Str("yes".into())).is_err());
        assert!(BOOL.value_from(&Raw::Int(2)).is_err());
    }

    #[test]
    fn test_char() {
        assert_eq!(clamp(CHAR, 'c'), Value::Char('c'));
        assert_eq!(clamp(CHAR, "c"), Value::Char('c'));
        assert_eq!(clamp(CHAR, "1F600"), Value::Char('\u{1F600}'));
        assert_eq!(clamp(CHAR, "0x41"), Value::Char('A'));
        assert_eq!(clamp(CHAR, 0x41), Value::Char('A'));
    }

    #[test]
    fn test_char_rejects_surrogates_and_junk() {
        assert!(CHAR.value_from(&Raw::Int(0xD800)).is_err());
        assert!(CHAR.value_from(&Raw::Int(0xDFFF)).is_err());
        assert!(CHAR.value_from(&Raw::Int(0x110000)).is_err());
        assert!(CHAR.value_from(&Raw::Int(-1)).is_err());
        assert!(CHAR.value_from(&Raw::Str("not a char".into())).is_err());
        assert!(!CHAR.is_ok(&Raw::Int(0xD800)));
        // One past the surrogate range is a scalar again.
        assert_eq!(clamp(CHAR, 0xE000), Value::Char('\u{E000}'));
    }

    #[test]
    fn test_str_passthrough() {
        assert_eq!(clamp(STR, "anything"), Value::Str("anything".into()));
        assert_eq!(clamp(STR, 10), Value::Str("10".into()));
        assert_eq!(clamp(STR, 'c'), Value::Str("c".into()));
        assert!(STR.is_ok(&Raw::Str(String::new())));
        assert!(STR.value_from(&Raw::list([1, 2])).is_err());
    }

    #[test]
    fn test_ident_passes_through() {
        let v = U8.value_from(&Raw::Ident("other".into())).unwrap();
        assert_eq!(v, Value::Ref("other".into()));
        assert!(U8.is_ok(&Raw::Ident("other".into())));
    }
}
