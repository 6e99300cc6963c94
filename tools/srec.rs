//! srec - session recap generator CLI.
//!
//! Renders `.srec` recap documents and companion files to disk, with a
//! short console preview. Inputs come from named options, a RON spec
//! file, or both (options override spec fields).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use srec::core::companion::render_companion;
use srec::core::recap::render_recap;
use srec::schema::companion::CompanionSpec;
use srec::schema::recap::RecapSpec;

const PREVIEW_LINES: usize = 12;

#[derive(Parser)]
#[command(name = "srec")]
#[command(version, about = "Session recap generator", long_about = None)]
#[command(after_help = "EXAMPLES:
    srec recap --title 'Day 3' --motif 'friendship residue' -o day3.srec
    srec recap --spec day3.ron --convergence 0.94 -o day3.srec
    srec companion --title 'Day 3' --provenance hash123 -o day3.txt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a .srec recap document
    Recap(RecapArgs),
    /// Render a companion bulk/poetic document
    Companion(CompanionArgs),
}

#[derive(Args)]
struct RecapArgs {
    /// Session title
    #[arg(long)]
    title: Option<String>,

    /// Key motif (repeatable, order preserved)
    #[arg(long = "motif", value_name = "MOTIF")]
    motifs: Vec<String>,

    /// Final η score
    #[arg(long)]
    convergence: Option<f64>,

    /// Seed text for the PIE vector
    #[arg(long)]
    seed: Option<String>,

    /// RON spec file to start from
    #[arg(long, value_name = "FILE")]
    spec: Option<PathBuf>,

    /// Output path
    #[arg(short, long)]
    output: PathBuf,

    /// Suppress the console preview
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args)]
struct CompanionArgs {
    /// Linked recap title
    #[arg(long)]
    title: Option<String>,

    /// Bulk data line (repeatable)
    #[arg(long = "bulk", value_name = "LINE")]
    bulk_lists: Vec<String>,

    /// Formula line (repeatable)
    #[arg(long = "formula", value_name = "LINE")]
    formulas: Vec<String>,

    /// Relation line (repeatable)
    #[arg(long = "relation", value_name = "LINE")]
    relations: Vec<String>,

    /// Poetic stanza (repeatable)
    #[arg(long = "stanza", value_name = "LINE")]
    stanzas: Vec<String>,

    /// Provenance note or hash
    #[arg(long)]
    provenance: Option<String>,

    /// RON spec file to start from
    #[arg(long, value_name = "FILE")]
    spec: Option<PathBuf>,

    /// Output path
    #[arg(short, long)]
    output: PathBuf,

    /// Suppress the console preview
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Recap(args) => run_recap(args),
        Command::Companion(args) => run_companion(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_recap(args: RecapArgs) -> Result<(), String> {
    let mut spec = match args.spec {
        Some(ref path) => RecapSpec::load_from_ron(path).map_err(|e| e.to_string())?,
        None => RecapSpec::default(),
    };

    if args.title.is_some() {
        spec.title = args.title;
    }
    if !args.motifs.is_empty() {
        spec.motifs = Some(args.motifs);
    }
    if args.convergence.is_some() {
        spec.convergence = args.convergence;
    }
    if args.seed.is_some() {
        spec.seed = args.seed;
    }

    let document = render_recap(&spec);
    write_document(&args.output, &document, args.quiet)
}

fn run_companion(args: CompanionArgs) -> Result<(), String> {
    let mut spec = match args.spec {
        Some(ref path) => CompanionSpec::load_from_ron(path).map_err(|e| e.to_string())?,
        None => CompanionSpec::default(),
    };

    if let Some(title) = args.title {
        spec.title = title;
    }
    if spec.title.is_empty() {
        return Err("companion requires --title (or a spec file with one)".to_string());
    }
    if !args.bulk_lists.is_empty() {
        spec.bulk_lists = args.bulk_lists;
    }
    if !args.formulas.is_empty() {
        spec.formulas = args.formulas;
    }
    if !args.relations.is_empty() {
        spec.relations = args.relations;
    }
    if !args.stanzas.is_empty() {
        spec.stanzas = args.stanzas;
    }
    if args.provenance.is_some() {
        spec.provenance = args.provenance;
    }

    let document = render_companion(&spec);
    write_document(&args.output, &document, args.quiet)
}

fn write_document(output: &Path, document: &str, quiet: bool) -> Result<(), String> {
    std::fs::write(output, document).map_err(|e| e.to_string())?;

    if !quiet {
        for line in document.lines().take(PREVIEW_LINES) {
            println!("{line}");
        }
        if document.lines().count() > PREVIEW_LINES {
            println!("...");
        }
        println!();
        println!("Wrote {}", output.display());
    }
    Ok(())
}
