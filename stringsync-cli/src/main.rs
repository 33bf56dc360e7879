mod sync;
mod validation;
mod view;

use clap::{Parser, Subcommand};
use stringsync::{StringTable, traits::Parser as _};

use crate::sync::{SyncOptions, run_sync_command};
use crate::view::print_table;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate the Windows and Linux string tables from the macOS one.
    Sync {
        /// The plug-in project directory (the one containing Resources/ and Source/)
        project_dir: String,

        /// Plug-in name; inferred from Resources/en.lproj/*.strings when omitted
        #[arg(short, long)]
        plugin: Option<String>,

        /// Parse and report without writing any file
        #[arg(long)]
        dry_run: bool,

        /// Write a JSON report of the run to this path
        #[arg(long)]
        report_json: Option<String>,
    },

    /// View the master string table parsed from a .strings file.
    View {
        /// The .strings file to inspect
        input: String,

        /// Display full descriptions without truncation
        #[arg(long)]
        full: bool,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Sync {
            project_dir,
            plugin,
            dry_run,
            report_json,
        } => run_sync_command(SyncOptions {
            project_dir,
            plugin,
            dry_run,
            report_json,
        }),
        Commands::View { input, full } => {
            validation::validate_file_path(&input).and_then(|_| {
                let table: StringTable = stringsync::formats::StringsFormat::read_from(&input)
                    .map_err(|e| format!("Failed to read '{}': {}", input, e))?
                    .into();
                print_table(&table, full);
                Ok(())
            })
        }
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
