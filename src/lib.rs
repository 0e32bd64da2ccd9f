//! Read, query, edit and write INI files.
//!
//! A [`Dict`] maps section names to keys and raw string values. Keys that come
//! before the first `[section]` header live in the top-level section, which is
//! addressed with `""`. Values are converted when they are read or written, so
//! the same key can be read as a string, `bool`, `i64` or `f64`.
//!
//! ```
//! let mut dict = inidict::load_str("debug = yes\n\n[window]\nwidth = 800\n").unwrap();
//! assert_eq!(dict.get_bool("", "debug"), Some(true));
//! assert_eq!(dict.get_int("window", "width"), Some(800));
//!
//! dict.set_double("window", "scale", 1.5);
//! assert_eq!(dict.to_string(), "debug = yes\n\n[window]\nwidth = 800\nscale = 1.5\n\n");
//! ```
//!
//! `Dict` does no internal locking. Wrap it in a `Mutex` to share it between threads.

mod dict;
mod file;
mod item;
mod parse;
mod section;
mod value;

pub mod error;
pub use error::IniError;
pub use error::Result;
#[cfg(feature = "serde")]
pub use error::InvalidDictError;

pub use dict::Dict;
pub use file::{load, load_str, write};
pub use item::{Item, Prop};
pub use parse::{Parser, SyntaxError, SyntaxErrorKind};
pub use section::Section;
pub use value::{FromIniValue, ToIniValue};
