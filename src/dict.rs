use std::{
    fmt,
    io,
    str::FromStr,
};

use log::{debug, trace};

use crate::{
    item::{Item, Prop},
    parse::{Parser, SyntaxError},
    section::Section,
    value::{FromIniValue, ToIniValue},
};

/// An INI file held in memory as sections of raw string values.
///
/// The top-level section (keys that appear before any header) is addressed
/// with the empty string. Named sections keep the order in which they were first
/// seen, and so do the keys within each section, which makes rendering
/// deterministic.
///
/// Lookups never fail: a missing section, a missing key and a value that does not
/// convert to the requested type all give `None`. Mutations never fail either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDict"))]
pub struct Dict {
    global_section: Section,
    sections: Vec<Section>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses INI text. The first malformed line aborts the whole parse.
    pub fn parse(text: &str) -> Result<Self, SyntaxError> {
        let mut dict = Self::new();
        let mut current_section = "";

        for item in Parser::new(text) {
            match item {
                Item::Section(name) => {
                    trace!("Opening section `{name}`");
                    dict.append_section(name);
                    current_section = name;
                },
                Item::Property(Prop { key, value }) => {
                    dict.append_section(current_section).set(key, value.to_owned());
                },
                Item::Comment(_) | Item::Blank => (),
                Item::Error(err) => {
                    debug!("Rejecting INI text at line {}: {}", err.line, err.kind);
                    return Err(err);
                },
            }
        }

        Ok(dict)
    }

    /// The section called `name`. The top-level section (`""`) is always
    /// present, even when it has no keys.
    pub fn section(&self, name: &str) -> Option<&Section> {
        if name.is_empty() {
            Some(&self.global_section)
        }
        else {
            self.sections.iter().find(|section| section.name() == name)
        }
    }

    /// Returns the section called `name`, creating it if it doesn't exist.
    fn append_section(&mut self, name: &str) -> &mut Section {
        if name.is_empty() {
            return &mut self.global_section;
        }

        match self.sections.iter().position(|section| section.name() == name) {
            Some(index) => &mut self.sections[index],
            None => {
                let index = self.sections.len();
                self.sections.push(Section::new(name));
                &mut self.sections[index]
            },
        }
    }

    /// Names of all sections that hold at least one key. The top-level section
    /// is listed first, as `""`, when it has keys.
    pub fn sections(&self) -> Vec<&str> {
        std::iter::once(&self.global_section)
            .chain(&self.sections)
            .filter(|section| !section.is_empty())
            .map(Section::name)
            .collect()
    }

    /// Whether `name` would be listed by [`Dict::sections`].
    pub fn has_section(&self, name: &str) -> bool {
        self.section(name)
            .is_some_and(|section| !section.is_empty())
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.section(section)
            .is_some_and(|section| section.has(key))
    }

    /// Keys of `section` in insertion order, or nothing if it doesn't exist.
    pub fn keys(&self, section: &str) -> Vec<&str> {
        self.section(section)
            .map_or_else(Vec::new, |section| section.keys().collect())
    }

    /// Whether there are no keys in any section.
    pub fn is_empty(&self) -> bool {
        self.global_section.is_empty()
            && self.sections.iter().all(Section::is_empty)
    }

    pub fn get<T: FromIniValue>(&self, section: &str, key: &str) -> Option<T> {
        self.get_string(section, key)
            .and_then(T::from_ini_value)
    }

    /// The raw value of `key`. A key-only line gives `Some("")`.
    pub fn get_string(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Reads `true`/`yes` and `false`/`no`, ignoring case.
    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        self.get(section, key)
    }

    pub fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        self.get(section, key)
    }

    pub fn get_double(&self, section: &str, key: &str) -> Option<f64> {
        self.get(section, key)
    }

    /// Stores the canonical text of `value`, creating the section if needed.
    ///
    /// The section name, key and value are trimmed the same way the parser trims
    /// them. A key that still can't be written as `key = value` (empty, holding
    /// `=` or a line break, or starting with `[`, `;` or `#`) is stored and can be
    /// read back, but is left out of [`fmt::Display`] output.
    pub fn set<T: ToIniValue + ?Sized>(&mut self, section: &str, key: &str, value: &T) {
        let value = value.to_ini_value();
        self.append_section(section.trim()).set(key.trim(), value.trim().to_owned());
    }

    pub fn set_string(&mut self, section: &str, key: &str, value: &str) {
        self.set(section, key, value);
    }

    pub fn set_bool(&mut self, section: &str, key: &str, value: bool) {
        self.set(section, key, &value);
    }

    pub fn set_int(&mut self, section: &str, key: &str, value: i64) {
        self.set(section, key, &value);
    }

    pub fn set_double(&mut self, section: &str, key: &str, value: f64) {
        self.set(section, key, &value);
    }

    /// Removes `key` from `section`. Does nothing if either is missing.
    ///
    /// A named section is dropped along with its last key.
    pub fn delete(&mut self, section: &str, key: &str) {
        if section.is_empty() {
            self.global_section.remove(key);
            return;
        }

        let Some(index) = self.sections.iter().position(|s| s.name() == section) else {
            return;
        };
        self.sections[index].remove(key);
        if self.sections[index].is_empty() {
            self.sections.remove(index);
        }
    }

    /// Removes a whole section. Removing `""` clears the top-level keys.
    pub fn remove_section(&mut self, name: &str) {
        if name.is_empty() {
            self.global_section = Section::new_global();
        }
        else {
            self.sections.retain(|section| section.name() != name);
        }
    }

    /// Renames `from` to `to`, replacing any existing section called `to`.
    ///
    /// The top-level section can't be renamed and nothing can be renamed to it,
    /// so either name being empty is a no-op, as is a missing `from`.
    pub fn rename_section(&mut self, from: &str, to: &str) {
        if from.is_empty() || to.is_empty() || from == to || self.section(from).is_none() {
            return;
        }

        self.remove_section(to);
        if let Some(section) = self.sections.iter_mut().find(|section| section.name() == from) {
            section.set_name(to);
        }
    }

    /// Serializes into `writer` in the same form as [`fmt::Display`].
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl FromStr for Dict {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the top-level keys followed by a blank line (always present), then
/// each named section that has a writable key.
impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.global_section)?;
        for section in self.sections.iter().filter(|section| section.is_writable()) {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDict {
    global_section: Section,
    sections: Vec<Section>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDict> for Dict {
    type Error = crate::error::InvalidDictError;

    fn try_from(raw: RawDict) -> Result<Self, Self::Error> {
        use std::collections::HashSet;
        use crate::error::InvalidDictError;

        let RawDict { global_section, sections } = raw;
        if !global_section.name().is_empty() {
            return Err(InvalidDictError::NamedGlobalSection(global_section.name().to_owned()));
        }

        let mut names = HashSet::new();
        for section in &sections {
            if section.name().is_empty() {
                return Err(InvalidDictError::EmptySectionName);
            }
            if !names.insert(section.name()) {
                return Err(InvalidDictError::DuplicateSection(section.name().to_owned()));
            }
        }

        for section in std::iter::once(&global_section).chain(&sections) {
            let mut keys = HashSet::new();
            if let Some(key) = section.keys().find(|key| !keys.insert(*key)) {
                return Err(InvalidDictError::DuplicateKey {
                    section: section.name().to_owned(),
                    key: key.to_owned(),
                });
            }
        }

        Ok(Self { global_section, sections })
    }
}
