//! Core types for the string table.
//! The formats parse into and render from these.

use std::collections::{BTreeMap, btree_map};

/// One entry in the master string table.
///
/// Plain entries carry only a `signature`; function entries additionally carry
/// `keywords` and `description` metadata (empty strings when absent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionString {
    /// Numeric ID, the unique key within the table.
    pub id: u64,
    /// Primary display text, e.g. a function signature.
    pub signature: String,
    /// Optional search keywords.
    pub keywords: String,
    /// Optional free-text description.
    pub description: String,
}

impl FunctionString {
    pub fn new(
        id: u64,
        signature: impl Into<String>,
        keywords: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        FunctionString {
            id,
            signature: signature.into(),
            keywords: keywords.into(),
            description: description.into(),
        }
    }

    /// True when this entry carries keyword/description metadata.
    pub fn is_function(&self) -> bool {
        !self.keywords.is_empty() || !self.description.is_empty()
    }

    /// The text placed inside the quoted Windows resource string.
    ///
    /// Function entries append `|keywords|description`, with the description
    /// escaped for the Windows resource compiler: `"` doubled to `""` and `@`
    /// prefixed with a backslash.
    pub fn windows_text(&self) -> String {
        let mut line = self.signature.clone();
        if self.is_function() {
            line.push('|');
            line.push_str(&self.keywords);
            line.push('|');
            line.push_str(&self.description.replace('"', "\"\"").replace('@', "\\@"));
        }
        line
    }

    /// The text placed inside the quoted Linux map entry. No escaping.
    pub fn linux_text(&self) -> &str {
        &self.signature
    }
}

/// The master table, keyed by numeric ID.
///
/// Iteration order is ascending ID, so generated output is deterministic across
/// runs. Inserting an existing ID overwrites it; when the source file repeats an
/// ID, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: BTreeMap<u64, FunctionString>,
}

impl StringTable {
    pub fn new() -> Self {
        StringTable::default()
    }

    pub fn insert(&mut self, entry: FunctionString) {
        self.entries.insert(entry.id, entry);
    }

    pub fn get(&self, id: u64) -> Option<&FunctionString> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending ID order.
    pub fn iter(&self) -> btree_map::Values<'_, u64, FunctionString> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a StringTable {
    type Item = &'a FunctionString;
    type IntoIter = btree_map::Values<'a, u64, FunctionString>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<FunctionString> for StringTable {
    fn from_iter<T: IntoIterator<Item = FunctionString>>(iter: T) -> Self {
        let mut table = StringTable::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

/// Result of extracting a numeric ID from free-form text.
///
/// The extraction strips every non-digit character and parses the remainder.
/// `NoDigits` makes the "nothing numeric here" case an explicit branch instead
/// of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdToken {
    Digits(u64),
    NoDigits,
}

impl IdToken {
    /// Extracts an ID from `text` by discarding every non-digit character.
    ///
    /// A digit run too long for `u64` is treated as `NoDigits`; real IDs are
    /// nowhere near that range.
    pub fn extract(text: &str) -> IdToken {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return IdToken::NoDigits;
        }
        match digits.parse::<u64>() {
            Ok(id) => IdToken::Digits(id),
            Err(_) => IdToken::NoDigits,
        }
    }

    /// The extracted ID, with `NoDigits` collapsing to 0.
    ///
    /// The source reader uses this to keep the historical tolerance of keys
    /// without any digits mapping to table entry 0.
    pub fn value(&self) -> u64 {
        match self {
            IdToken::Digits(id) => *id,
            IdToken::NoDigits => 0,
        }
    }
}
