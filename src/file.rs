use std::{fs, path::Path};

use log::debug;

use crate::{Dict, IniError, Result};

/// Reads and parses the INI file at `path`.
///
/// A leading UTF-8 byte order mark is skipped. The error tells a file that could
/// not be read ([`IniError::Io`]) apart from one that could not be decoded or
/// parsed.
pub fn load<P>(path: P) -> Result<Dict>
where
    P: AsRef<Path>
{
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let (contents, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);

    if had_errors {
        return Err(IniError::BadEncoding {
            path: path.to_owned(),
        });
    }

    let dict = Dict::parse(&contents)?;
    debug!("Loaded {} section(s) from {path:?}", dict.sections().len());

    Ok(dict)
}

/// Parses INI text that is already in memory.
pub fn load_str(text: &str) -> Result<Dict> {
    Ok(Dict::parse(text)?)
}

/// Serializes `dict`, replacing the contents of the file at `path`.
pub fn write<P>(path: P, dict: &Dict) -> Result<()>
where
    P: AsRef<Path>
{
    let path = path.as_ref();
    fs::write(path, dict.to_string())?;
    debug!("Wrote {} section(s) to {path:?}", dict.sections().len());

    Ok(())
}
