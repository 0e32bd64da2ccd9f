use std::fmt;

/// A key and its raw, unconverted value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    /// Whether `key = value` parses back to this same key and value.
    ///
    /// Setters accept anything, so a key can be empty, contain `=` or a line
    /// break, or start like a header or comment. Such properties stay readable in
    /// memory but are left out when rendering.
    pub fn is_writable(&self) -> bool {
        !self.key.is_empty()
            && self.key.trim() == self.key
            && !self.key.starts_with(['[', ';', '#'])
            && !self.key.contains(['=', '\r', '\n'])
            && self.value.trim() == self.value
            && !self.value.contains(['\r', '\n'])
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// A named group of properties with unique keys, kept in insertion order.
///
/// The top-level section is the one whose name is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    name: String,
    props: Vec<Property>,
}

impl Section {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            props: Vec::new(),
        }
    }

    pub(crate) fn new_global() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, to_name: &str) {
        self.name = to_name.to_owned();
    }

    /// Whether `[name]` parses back to a header for this same name. The
    /// top-level section has no header and is always writable.
    pub(crate) fn is_writable(&self) -> bool {
        self.name.trim() == self.name
            && !self.name.contains(['\r', '\n'])
            && self.props.iter().any(Property::is_writable)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    fn find_prop(&self, key: &str) -> Option<&Property> {
        self.props.iter().find(|prop| prop.key == key)
    }

    fn find_prop_mut(&mut self, key: &str) -> Option<&mut Property> {
        self.props.iter_mut().find(|prop| prop.key == key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.find_prop(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.find_prop(key)
            .map(|prop| prop.value.as_str())
    }

    /// Overwrites the value of `key` in place, or appends it if it is new.
    pub(crate) fn set(&mut self, key: &str, value: String) {
        if let Some(prop) = self.find_prop_mut(key) {
            prop.value = value;
        }
        else {
            self.props.push(Property {
                key: key.to_owned(),
                value,
            });
        }
    }

    /// Removes `key`, returning its value if it was present.
    pub(crate) fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.props.iter().position(|prop| prop.key == key)?;
        Some(self.props.remove(index).value)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.iter().map(|prop| prop.key.as_str())
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|prop| (prop.key.as_str(), prop.value.as_str()))
    }
}

/// Writes the header (unless this is the top-level section), one `key = value`
/// line per writable property, and a trailing blank line.
impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            writeln!(f, "[{}]", self.name)?;
        }
        for prop in self.props.iter().filter(|prop| prop.is_writable()) {
            writeln!(f, "{prop}")?;
        }
        writeln!(f)
    }
}
