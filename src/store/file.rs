use std::fmt;
use std::str::FromStr;

use super::format::{self, ParseError};

/// An INI-style file: named sections, each holding an ordered list of key/value entries.
///
/// Section names compare case-insensitively, keys compare case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    sections: Vec<Section>,
    trailing_comments: Vec<String>,
}

impl ConfigFile {
    /// A file with no sections.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.is_named(name))
    }

    /// Returns the named section, appending an empty one when it does not exist yet.
    pub fn section_or_insert(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|section| section.is_named(name)) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };

        &mut self.sections[index]
    }

    pub fn trailing_comments(&self) -> &[String] {
        &self.trailing_comments
    }

    pub(crate) fn set_trailing_comments(&mut self, comments: Vec<String>) {
        self.trailing_comments = comments;
    }
}

impl FromStr for ConfigFile {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        format::parse(input)
    }
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::render(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    comments: Vec<String>,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) indent: String,
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) comments: Vec<String>,
}

impl Entry {
    /// Entries under a valueless key (e.g. `s3 =`) keep their indent and are kept verbatim.
    /// The parser drops the indent of every other entry.
    pub(crate) fn is_nested(&self) -> bool {
        !self.indent.is_empty()
    }
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.top_level()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Updates the value in place, or appends the key when absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|entry| !entry.is_nested() && entry.key == key)
        {
            Some(entry) => entry.value = value,
            None => self.entries.push(Entry {
                indent: String::new(),
                key: key.to_string(),
                value,
                comments: Vec::new(),
            }),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self
            .entries
            .iter()
            .position(|entry| !entry.is_nested() && entry.key == key)?;
        Some(self.entries.remove(index).value)
    }

    /// Sets `key` when `value` is present, removes it otherwise.
    pub fn set_or_remove(&mut self, key: &str, value: Option<String>) {
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.remove(key);
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.top_level().map(|entry| entry.key.as_str())
    }

    fn top_level(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| !entry.is_nested())
    }

    pub(crate) fn comments(&self) -> &[String] {
        &self.comments
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn push_comments(&mut self, comments: Vec<String>) {
        self.comments.extend(comments);
    }

    pub(crate) fn push_entry(&mut self, entry: Entry) {
        if !entry.is_nested() {
            if let Some(existing) = self
                .entries
                .iter_mut()
                .find(|existing| !existing.is_nested() && existing.key == entry.key)
            {
                existing.value = entry.value;
                existing.comments.extend(entry.comments);
                return;
            }
        }

        self.entries.push(entry);
    }
}
