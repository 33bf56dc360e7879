use serde_json::json;
use stringsync::{ProjectPaths, SyncSummary, sync_project};

use crate::validation::{validate_directory_path, validate_output_path};

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub project_dir: String,
    pub plugin: Option<String>,
    pub dry_run: bool,
    pub report_json: Option<String>,
}

fn write_report(path: &str, options: &SyncOptions, paths: &ProjectPaths, summary: &SyncSummary) -> Result<(), String> {
    let payload = json!({
        "project_dir": options.project_dir,
        "plugin": paths.plugin,
        "dry_run": options.dry_run,
        "version": summary.version,
        "files": {
            "strings": paths.strings.display().to_string(),
            "rc": paths.rc.display().to_string(),
            "linux_header": paths.linux_header.display().to_string(),
            "version_header": paths.version_header.display().to_string(),
        },
        "summary": {
            "functions": summary.functions,
            "windows_rewritten": summary.windows.rewritten,
            "windows_dropped_stale": summary.windows.dropped,
            "windows_preserved": summary.windows.preserved,
            "windows_comments": summary.windows.comments,
            "linux_entries": summary.linux_entries,
        },
    });

    let text = serde_json::to_string_pretty(&payload)
        .map_err(|e| format!("Failed to serialize report JSON: {}", e))?;
    std::fs::write(path, text).map_err(|e| format!("Failed to write report JSON '{}': {}", path, e))
}

pub fn run_sync_command(opts: SyncOptions) -> Result<(), String> {
    validate_directory_path(&opts.project_dir)?;
    if let Some(report_path) = &opts.report_json {
        validate_output_path(report_path)?;
    }

    let paths = match &opts.plugin {
        Some(plugin) => ProjectPaths::from_root(&opts.project_dir, plugin),
        None => ProjectPaths::discover(&opts.project_dir)
            .map_err(|e| format!("Failed to locate plug-in files: {}", e))?,
    };

    let summary = sync_project(&paths, opts.dry_run)
        .map_err(|e| format!("Sync failed for '{}': {}", paths.plugin, e))?;

    println!("Plug-in: {}", paths.plugin);
    println!("Version: {}", summary.version);
    println!("Functions in master table: {}", summary.functions);
    println!("Windows lines rewritten: {}", summary.windows.rewritten);
    println!("Windows stale lines dropped: {}", summary.windows.dropped);
    println!("Windows lines preserved: {}", summary.windows.preserved);
    println!("Linux map entries written: {}", summary.linux_entries);

    if let Some(report_path) = &opts.report_json {
        write_report(report_path, &opts, &paths, &summary)?;
        println!("Report JSON written: {}", report_path);
    }

    if opts.dry_run {
        println!("Dry-run mode: no files were written");
        return Ok(());
    }

    println!("✅ Sync complete: {}", paths.rc.display());
    Ok(())
}
