//! Conversions between raw INI strings and typed values.
//!
//! Values are always stored as the raw text that was parsed or set. These traits
//! are applied at the accessor boundary: [`FromIniValue`] on every read and
//! [`ToIniValue`] on every write.

/// Spellings accepted as `true`, compared case-insensitively.
const TRUTHY: [&str; 2] = ["true", "yes"];

/// Spellings accepted as `false`, compared case-insensitively.
const FALSY: [&str; 2] = ["false", "no"];

/// A type that can be read from a raw INI value.
pub trait FromIniValue: Sized {
    /// Returns `None` if `raw` is not a valid rendering of `Self`.
    fn from_ini_value(raw: &str) -> Option<Self>;
}

/// A type that can be written as a raw INI value.
pub trait ToIniValue {
    /// The canonical text for `self`. Reading it back with [`FromIniValue`] must
    /// give an equal value.
    fn to_ini_value(&self) -> String;
}

impl FromIniValue for String {
    fn from_ini_value(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

impl ToIniValue for str {
    fn to_ini_value(&self) -> String {
        self.to_owned()
    }
}

impl ToIniValue for String {
    fn to_ini_value(&self) -> String {
        self.clone()
    }
}

impl FromIniValue for bool {
    fn from_ini_value(raw: &str) -> Option<Self> {
        if TRUTHY.iter().any(|word| raw.eq_ignore_ascii_case(word)) {
            Some(true)
        }
        else if FALSY.iter().any(|word| raw.eq_ignore_ascii_case(word)) {
            Some(false)
        }
        else {
            None
        }
    }
}

impl ToIniValue for bool {
    fn to_ini_value(&self) -> String {
        self.to_string()
    }
}

// Display for integers is plain decimal and for floats is the shortest text that
// parses back to the same value, so `5.0` is written as `5`.
macro_rules! impl_ini_value_via_str {
    ( $( $ty:ty ),* ) => {
        $(
            impl FromIniValue for $ty {
                fn from_ini_value(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }

            impl ToIniValue for $ty {
                fn to_ini_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_ini_value_via_str!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
