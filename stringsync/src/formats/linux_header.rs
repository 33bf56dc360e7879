//! Generator for the Linux function-strings header.
//!
//! Unlike the Windows side, this file is regenerated from scratch on every run:
//! a copyright banner, one `{ id, "signature" },` map entry per record, and a
//! reserved trailing entry carrying the plug-in version. Downstream C++ code
//! includes the result directly, so the emitted shape is a compatibility
//! contract.

use std::fs;
use std::path::Path;

use indoc::indoc;
use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::Error, types::StringTable};

/// First year the generated banner was shipped with. When the current year is
/// later, the banner shows a `start-current` range.
pub const COPYRIGHT_START_YEAR: i32 = 2018;

lazy_static! {
    static ref VERSION_DEFINE_REGEX: Regex =
        Regex::new(r"define\s+VERSION_STRING").expect("static regex");
    static ref VERSION_TOKEN_REGEX: Regex =
        Regex::new(r"[0-9][0-9a-z.]*").expect("static regex");
}

/// Extracts the dotted version token from the plug-in version header.
///
/// Looks for the `#define VERSION_STRING "x.y.z"` line and takes the first
/// numeric-and-lowercase token after the macro name. A missing file or token
/// is fatal; generating a header with a corrupted version string helps nobody.
pub fn read_version<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    for line in content.lines() {
        if let Some(found) = VERSION_DEFINE_REGEX.find(line)
            && let Some(token) = VERSION_TOKEN_REGEX.find(&line[found.end()..])
        {
            return Ok(token.as_str().to_string());
        }
    }

    Err(Error::version_not_found(path.display().to_string()))
}

/// Include guard derived from the output file name: `BELinuxFunctionStrings.h`
/// becomes `BELINUXFUNCTIONSTRINGS_H`.
fn include_guard(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn copyright_years(start: i32, current: i32) -> String {
    if current == start {
        start.to_string()
    } else {
        format!("{start}-{current}")
    }
}

/// Renders the complete header.
///
/// `current_year` is injected rather than read from the clock so the output is
/// a pure function of its inputs; callers pass `chrono::Local::now().year()`.
pub fn render(
    table: &StringTable,
    version: &str,
    plugin: &str,
    file_name: &str,
    current_year: i32,
) -> String {
    let guard = include_guard(file_name);
    let years = copyright_years(COPYRIGHT_START_YEAR, current_year);

    let mut out = format!(
        indoc! {"
            /*
             {file}
             {plugin} Plug-In

             Copyright {years} Goya. All rights reserved.
             For conditions of distribution and use please see the copyright notice
             in the main plug-in source.

             IMPORTANT: this file is automatically generated! Do not edit by hand.

             */

        "},
        file = file_name,
        plugin = plugin,
        years = years,
    );

    out.push_str(&format!(
        "\n#if !defined({guard})\n\t#define {guard}\n\n#include \"{plugin}PluginGlobalDefines.h\"\n\n#include <map>\n#include <string>\n\nconst std::map<unsigned long, std::string> function_strings = {{\n\n"
    ));

    for entry in table {
        out.push_str(&format!("\t{{ {}, \"{}\" }},\n", entry.id, entry.linux_text()));
    }

    out.push_str(&format!(
        "\t{{ PLUGIN_DESCRIPTION_STRING_ID, \"Version: {version}\\n\\nThis plug-in provides additional functionality for {plugin}.\" }}\n"
    ));
    out.push_str(&format!("\n}};\n\n#endif // {guard}\n\n"));

    out
}
