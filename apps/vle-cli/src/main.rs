use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vle_core::Real;
use vle_data::{SourceTables, convert, smolen::OUTPUT_FILE, smolen_1991, tables};
use vle_store::{StoreResult, digest, load_dataset, write_dataset};

#[derive(Parser)]
#[command(name = "vle-cli")]
#[command(about = "Convert tabulated VLE measurements into PTXY datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert source tables and write the dataset file (default command)
    Convert {
        /// YAML/JSON table file; the embedded Smolen (1991) tables when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output JSON path
        #[arg(long, default_value = OUTPUT_FILE)]
        output: PathBuf,
        /// BibTeX key stamped on every data point
        #[arg(long)]
        bibtex: Option<String>,
    },
    /// Show point counts and pressure ranges per temperature
    Summary {
        /// YAML/JSON table file; the embedded tables when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Load an existing dataset file and report suspicious points
    Inspect {
        /// Path to the dataset JSON file
        path: PathBuf,
    },
    /// Print the SHA-256 of the dataset bytes that `convert` would write
    Digest {
        /// YAML/JSON table file; the embedded tables when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// BibTeX key stamped on every data point
        #[arg(long)]
        bibtex: Option<String>,
    },
}

fn main() -> StoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => cmd_convert(None, Path::new(OUTPUT_FILE), None),
        Some(Commands::Convert {
            input,
            output,
            bibtex,
        }) => cmd_convert(input.as_deref(), &output, bibtex),
        Some(Commands::Summary { input }) => cmd_summary(input.as_deref()),
        Some(Commands::Inspect { path }) => cmd_inspect(&path),
        Some(Commands::Digest { input, bibtex }) => cmd_digest(input.as_deref(), bibtex),
    }
}

fn source_tables(input: Option<&Path>, bibtex: Option<String>) -> StoreResult<SourceTables> {
    let tables = match input {
        Some(path) => tables::load(path)?,
        None => {
            tracing::debug!("using embedded Smolen (1991) tables");
            smolen_1991()
        }
    };
    Ok(tables.with_bibtex(bibtex))
}

fn cmd_convert(input: Option<&Path>, output: &Path, bibtex: Option<String>) -> StoreResult<()> {
    let tables = source_tables(input, bibtex)?;
    let dataset = convert(&tables)?;
    write_dataset(output, &dataset)?;
    println!(
        "✓ Wrote {} points ({} / {}) to {}",
        dataset.len(),
        dataset.names()[0],
        dataset.names()[1],
        output.display()
    );
    Ok(())
}

fn cmd_summary(input: Option<&Path>) -> StoreResult<()> {
    let tables = source_tables(input, None)?;
    let dataset = convert(&tables)?;

    println!("Components: {} / {}", dataset.names()[0], dataset.names()[1]);
    println!("Source unit: {}", tables.pressure_unit);
    let isotherms: Vec<String> = tables
        .temperatures()
        .iter()
        .map(|t| format!("{t:.2}"))
        .collect();
    println!("Isotherms (K): {}", isotherms.join(", "));
    if let Some(reference) = &tables.reference {
        println!("Reference: {reference}");
    }
    println!();
    println!("{:>10}  {:>6}  {:>14}  {:>14}", "T (K)", "points", "p min (Pa)", "p max (Pa)");
    for row in dataset.summary() {
        println!(
            "{:>10.2}  {:>6}  {:>14.1}  {:>14.1}",
            row.temperature_k, row.points, row.p_min_pa, row.p_max_pa
        );
    }
    println!("{:>10}  {:>6}", "total", dataset.len());
    Ok(())
}

fn cmd_inspect(path: &Path) -> StoreResult<()> {
    let dataset = load_dataset(path)?;
    let findings = dataset.check();
    let temperatures: Vec<Real> = dataset.summary().iter().map(|s| s.temperature_k).collect();

    println!(
        "{}: {} points at {} temperatures ({} / {})",
        path.display(),
        dataset.len(),
        temperatures.len(),
        dataset.names()[0],
        dataset.names()[1]
    );
    if findings.is_empty() {
        println!("✓ No issues found");
    } else {
        println!("{} issue(s):", findings.len());
        for finding in findings {
            println!("  {finding}");
        }
    }
    Ok(())
}

fn cmd_digest(input: Option<&Path>, bibtex: Option<String>) -> StoreResult<()> {
    let tables = source_tables(input, bibtex)?;
    let dataset = convert(&tables)?;
    println!("{}", digest(&dataset)?);
    Ok(())
}
