//! Updater for the Windows resource script (`.rc`).
//!
//! The file is stored as UTF-16LE. Only string-table lines whose ID appears in
//! the master table are rewritten; comments and non-entry lines pass through
//! byte-for-byte, and entries whose ID has left the master table are dropped.

use std::fs;
use std::path::Path;

use encoding_rs::UTF_16LE;

use crate::{
    error::Error,
    traits::Parser,
    types::{IdToken, StringTable},
};

const UTF_16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// One line of the resource script, with its original terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A `//` comment line, never touched.
    Comment(String),
    /// Any other line, tagged with the ID extracted from the text before the
    /// first `"`.
    Candidate { token: IdToken, raw: String },
}

impl Line {
    fn raw(&self) -> &str {
        match self {
            Line::Comment(raw) => raw,
            Line::Candidate { raw, .. } => raw,
        }
    }

    fn classify(raw: String) -> Line {
        if raw.starts_with("//") {
            return Line::Comment(raw);
        }
        let id_field = raw.split('"').next().unwrap_or_default();
        Line::Candidate {
            token: IdToken::extract(id_field),
            raw,
        }
    }
}

/// Outcome counts from one [`Format::sync`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Entry lines rewritten from the master table.
    pub rewritten: usize,
    /// Stale entry lines removed (ID no longer in the table).
    pub dropped: usize,
    /// Non-entry lines preserved verbatim.
    pub preserved: usize,
    /// Comment lines copied through.
    pub comments: usize,
}

/// A parsed Windows resource script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub lines: Vec<Line>,
    /// Whether the file carried a UTF-16LE BOM; the rewrite keeps it.
    bom: bool,
}

impl Format {
    /// Produces the synchronized script plus a report of what happened.
    ///
    /// Lookup uses the token's collapsed value, so an entry line without digits
    /// can still match a table entry at ID 0. A positive ID missing from the
    /// table marks a removed function and drops the line; anything else is not
    /// a string-table entry and survives untouched.
    pub fn sync(&self, table: &StringTable) -> (Format, Report) {
        let mut report = Report::default();
        let mut lines = Vec::with_capacity(self.lines.len());

        for line in &self.lines {
            match line {
                Line::Comment(raw) => {
                    report.comments += 1;
                    lines.push(Line::Comment(raw.clone()));
                }
                Line::Candidate { token, raw } => {
                    let id = token.value();
                    if let Some(entry) = table.get(id) {
                        report.rewritten += 1;
                        lines.push(Line::Candidate {
                            token: *token,
                            raw: format!("    {:<21}\"{}\"\r\n", id, entry.windows_text()),
                        });
                    } else if matches!(token, IdToken::Digits(n) if *n > 0) {
                        report.dropped += 1;
                    } else {
                        report.preserved += 1;
                        lines.push(Line::Candidate {
                            token: *token,
                            raw: raw.clone(),
                        });
                    }
                }
            }
        }

        (Format { lines, bom: self.bom }, report)
    }

    /// The full script text, terminators included.
    pub fn text(&self) -> String {
        self.lines.iter().map(Line::raw).collect()
    }

    /// Splits text into lines, keeping each line's own terminator so untouched
    /// lines round-trip exactly.
    fn split_keeping_terminators(text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut start = 0;
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                lines.push(text[start..=i].to_string());
                start = i + 1;
            }
        }
        if start < text.len() {
            lines.push(text[start..].to_string());
        }
        lines
    }
}

impl Parser for Format {
    /// Parses already-decoded text; file access goes through [`Parser::read_from`],
    /// which handles the UTF-16LE decoding.
    fn from_reader<R: std::io::BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let lines = Format::split_keeping_terminators(&text)
            .into_iter()
            .map(Line::classify)
            .collect();

        Ok(Format { lines, bom: false })
    }

    /// Encodes back to UTF-16LE, restoring the BOM when the input had one.
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let text = self.text();
        let mut bytes = Vec::with_capacity(text.len() * 2 + 2);
        if self.bom {
            bytes.extend_from_slice(&UTF_16LE_BOM);
        }
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        writer.write_all(&bytes).map_err(Error::Io)
    }

    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let bytes = fs::read(path)?;
        let bom = bytes.starts_with(&UTF_16LE_BOM);
        let (decoded, _, _) = UTF_16LE.decode(&bytes);
        let mut format = Self::from_str(&decoded)?;
        format.bom = bom;
        Ok(format)
    }
}
