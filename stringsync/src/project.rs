//! Project layout and the one-shot sync pipeline.
//!
//! All paths derive from a single project root plus the plug-in name, matching
//! the fixed layout the build scripts expect. The pipeline runs strictly
//! sequentially: read the master table, update the Windows script, regenerate
//! the Linux header.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};

use crate::{
    error::Error,
    formats::{linux_header, rc, strings},
    traits::Parser,
    types::StringTable,
};

/// The four files one sync run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Plug-in name, the stem of every derived file name.
    pub plugin: String,
    /// macOS `.strings` master file (input).
    pub strings: PathBuf,
    /// Windows resource script (updated in place).
    pub rc: PathBuf,
    /// Linux function-strings header (regenerated).
    pub linux_header: PathBuf,
    /// Header defining `VERSION_STRING` (input).
    pub version_header: PathBuf,
}

impl ProjectPaths {
    /// Derives the standard layout for `plugin` under `root`.
    pub fn from_root<P: AsRef<Path>>(root: P, plugin: &str) -> Self {
        let root = root.as_ref();
        ProjectPaths {
            plugin: plugin.to_string(),
            strings: root
                .join("Resources")
                .join("en.lproj")
                .join(format!("{plugin}.strings")),
            rc: root.join("Resources").join(format!("{plugin}.rc")),
            linux_header: root
                .join("Source")
                .join("linux")
                .join(format!("{plugin}LinuxFunctionStrings.h")),
            version_header: root
                .join("Source")
                .join(format!("{plugin}PluginVersion.h")),
        }
    }

    /// Infers the plug-in name from the lone `.strings` file under
    /// `Resources/en.lproj/`, keeping the historical single-argument
    /// invocation. Zero or several candidates is an error.
    pub fn discover<P: AsRef<Path>>(root: P) -> Result<Self, Error> {
        let root = root.as_ref();
        let lproj = root.join("Resources").join("en.lproj");

        let mut candidates = Vec::new();
        for entry in fs::read_dir(&lproj)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "strings")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                candidates.push(stem.to_string());
            }
        }
        candidates.sort();

        match candidates.len() {
            0 => Err(Error::NoStringsFile(lproj.display().to_string())),
            1 => Ok(ProjectPaths::from_root(root, &candidates[0])),
            _ => Err(Error::AmbiguousStringsFile {
                dir: lproj.display().to_string(),
                candidates,
            }),
        }
    }

    /// File name of the Linux header, used for its banner and include guard.
    fn linux_header_name(&self) -> String {
        self.linux_header
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}LinuxFunctionStrings.h", self.plugin))
    }
}

/// What one run did, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    /// Entries loaded from the master table.
    pub functions: usize,
    /// Outcome counts for the Windows script.
    pub windows: rc::Report,
    /// Map entries emitted into the Linux header (excluding the reserved
    /// version entry).
    pub linux_entries: usize,
    /// Version string extracted from the version header.
    pub version: String,
}

/// Runs the full pipeline over `paths`.
///
/// With `dry_run` set, everything is parsed and rendered but nothing is
/// written, so a failing run still reports what it would have done.
pub fn sync_project(paths: &ProjectPaths, dry_run: bool) -> Result<SyncSummary, Error> {
    let table: StringTable = strings::Format::read_from(&paths.strings)?.into();

    let (synced_rc, windows) = rc::Format::read_from(&paths.rc)?.sync(&table);

    let version = linux_header::read_version(&paths.version_header)?;
    let header = linux_header::render(
        &table,
        &version,
        &paths.plugin,
        &paths.linux_header_name(),
        Local::now().year(),
    );

    if !dry_run {
        synced_rc.write_to(&paths.rc)?;
        if let Some(parent) = paths.linux_header.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&paths.linux_header, header)?;
    }

    Ok(SyncSummary {
        functions: table.len(),
        windows,
        linux_entries: table.len(),
        version,
    })
}
