mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "takeoff",
    version,
    about = "Component takeoff from precast construction drawings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract component codes and level counts from a drawing PDF
    Extract(commands::extract::ExtractArgs),
    /// Parse an already-extracted text blob (file, or - for stdin)
    Scan {
        /// Path to a text file, or - for stdin
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the deduplicated records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show recent entries from an audit log
    History {
        /// Path to the SQLite audit log
        #[arg(long = "db", value_name = "FILE", default_value = "takeoff.db")]
        db: PathBuf,

        /// Number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Scan {
            input_file,
            output,
            out,
        } => commands::scan::run(input_file, &output, out),
        Commands::History { db, limit } => commands::history::run(&db, limit),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
