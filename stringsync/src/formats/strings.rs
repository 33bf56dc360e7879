//! Reader for the macOS `.strings` master file.
//!
//! The file is the source of truth for the whole string table. Keys embed the
//! numeric ID; values carry the signature, optionally followed by `|keywords|description`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{
    error::Error,
    traits::Parser,
    types::{FunctionString, IdToken, StringTable},
};

/// A parsed macOS `.strings` file, entries in document order.
///
/// Convert to [`StringTable`] for keyed access; the conversion folds repeated
/// IDs last-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub entries: Vec<FunctionString>,
}

impl Format {
    /// Parses one `"key" = "value";` line, or `None` for anything else.
    ///
    /// Header lines, comments, and blank lines all fail the single-`=` split
    /// and are skipped; that tolerance is part of the format.
    fn parse_line(line: &str) -> Option<FunctionString> {
        let (key, value) = line.split_once('=')?;

        let id = IdToken::extract(key).value();

        // Trailing decoration on the value: newline, then `;`, then `"`.
        let value = value.trim_end_matches(['\n', '\r']);
        let value = value.strip_suffix(';').unwrap_or(value);
        let value = value.strip_suffix('"').unwrap_or(value);

        let mut parts = value.splitn(3, '|');

        let signature = parts.next().unwrap_or_default().trim();
        let signature = signature.strip_prefix('"').unwrap_or(signature);

        // Both extra fields present means a function entry.
        let (keywords, description) = match (parts.next(), parts.next()) {
            (Some(keywords), Some(description)) => (keywords.trim(), description.trim()),
            _ => ("", ""),
        };

        Some(FunctionString::new(id, signature, keywords, description))
    }
}

impl Parser for Format {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(entry) = Format::parse_line(&line) {
                entries.push(entry);
            }
        }
        Ok(Format { entries })
    }

    /// Not a writer format: the `.strings` file is only ever read.
    fn to_writer<W: std::io::Write>(&self, _writer: W) -> Result<(), Error> {
        Err(Error::UnsupportedOperation(
            "the .strings master file is read-only input".to_string(),
        ))
    }

    /// Override default file reading to tolerate a BOM on the master file.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }
}

impl From<Format> for StringTable {
    fn from(value: Format) -> Self {
        value.entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_entry() {
        let content = "\"0042\" = \"mySig\";\n";
        let parsed = Format::from_str(content).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        let entry = &parsed.entries[0];
        assert_eq!(entry.id, 42);
        assert_eq!(entry.signature, "mySig");
        assert_eq!(entry.keywords, "");
        assert_eq!(entry.description, "");
        assert!(!entry.is_function());
    }

    #[test]
    fn test_parse_function_entry() {
        let content = "\"102\" = \"BE_Version | version plugin | Returns the version.\";\n";
        let parsed = Format::from_str(content).unwrap();
        let entry = &parsed.entries[0];
        assert_eq!(entry.id, 102);
        assert_eq!(entry.signature, "BE_Version");
        assert_eq!(entry.keywords, "version plugin");
        assert_eq!(entry.description, "Returns the version.");
        assert!(entry.is_function());
    }

    #[test]
    fn test_description_may_contain_equals() {
        let content = "\"7\" = \"BE_Set | set | Sets a = b.\";\n";
        let parsed = Format::from_str(content).unwrap();
        let entry = &parsed.entries[0];
        assert_eq!(entry.id, 7);
        assert_eq!(entry.description, "Sets a = b.");
    }

    #[test]
    fn test_malformed_and_comment_lines_are_skipped() {
        let content = "\
/* header comment */

\"10\" = \"GoodOne\";
just some text without the delimiter
\"11\" = \"GoodTwo\";
";
        let parsed = Format::from_str(content).unwrap();
        // The block comment has no `=`, so only the two real entries survive.
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.entries[0].signature, "GoodOne");
        assert_eq!(parsed.entries[1].signature, "GoodTwo");
    }

    #[test]
    fn test_key_without_digits_becomes_id_zero() {
        let content = "\"version\" = \"Placeholder\";\n";
        let parsed = Format::from_str(content).unwrap();
        assert_eq!(parsed.entries[0].id, 0);
        assert_eq!(parsed.entries[0].signature, "Placeholder");
    }

    #[test]
    fn test_last_occurrence_of_an_id_wins() {
        let content = "\"5\" = \"First\";\n\"0005\" = \"Second\";\n";
        let table: StringTable = Format::from_str(content).unwrap().into();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(5).unwrap().signature, "Second");
    }

    #[test]
    fn test_pipe_split_caps_at_three_pieces() {
        let content = "\"9\" = \"Sig | kw | first | second\";\n";
        let parsed = Format::from_str(content).unwrap();
        let entry = &parsed.entries[0];
        assert_eq!(entry.keywords, "kw");
        // Everything past the second pipe belongs to the description.
        assert_eq!(entry.description, "first | second");
    }
}
