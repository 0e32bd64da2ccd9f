use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IniError {
    #[error("An IO error occurred: `{source}`")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("The INI file at `{path:?}` was not valid UTF-8.")]
    BadEncoding {
        path: PathBuf,
    },
    #[error(transparent)]
    Syntax(#[from] crate::SyntaxError),
}

pub type Result<T> = core::result::Result<T, IniError>;

/// Why serialized data could not be turned back into a [`crate::Dict`].
#[cfg(feature = "serde")]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDictError {
    #[error("The top-level section must not have a name, found `{0}`.")]
    NamedGlobalSection(String),
    #[error("A named section has an empty name.")]
    EmptySectionName,
    #[error("Section `{0}` appears more than once.")]
    DuplicateSection(String),
    #[error("Key `{key}` appears more than once in section `{section}`.")]
    DuplicateKey {
        section: String,
        key: String,
    },
}
