use hanzi_data::chaizi_parser;
use hanzi_data::char_base;
use hanzi_data::config;
use hanzi_data::data_check;
use hanzi_data::hanzi_to_db;
use hanzi_data::merge::{self, CharRecord};

use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use rusqlite::{Connection, backup};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "Hanzi Data Tool")]
#[command(version = "0.1.0")]
#[command(about = "Merges a character dictionary with character decompositions (chaizi)", long_about = None)]
struct Cli {
    /// Character dictionary, comma separated JSON objects
    #[arg(long, default_value = config::CHAR_BASE_PATH)]
    char_base: PathBuf,

    /// Decompositions, one character per line, fields separated by tabs
    #[arg(long, default_value = config::CHAIZI_PATH)]
    chaizi: PathBuf,

    /// Output as .json file
    #[arg(short, long, default_value = config::OUTPUT_PATH)]
    output: PathBuf,

    /// Additional output as .db file (sqlite)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Check the merged data and report problems (does not change the output)
    #[arg(long)]
    check: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(cli: &Cli) -> anyhow::Result<Vec<CharRecord>> {
    tracing::debug!(path = %cli.char_base.display(), "reading character dictionary");
    let mut file = File::open(&cli.char_base).with_context(|| format!(
        "Could not open character dictionary {}",
        cli.char_base.display()
    ))?;
    let char_base = char_base::read_char_base(&mut file)
        .with_context(|| format!("Could not read {}", cli.char_base.display()))?;

    tracing::debug!(path = %cli.chaizi.display(), "reading decompositions");
    let mut file = File::open(&cli.chaizi).with_context(|| format!(
        "Could not open decomposition file {}",
        cli.chaizi.display()
    ))?;
    let chaizi_map = chaizi_parser::read_chaizi(&mut file)
        .with_context(|| format!("Could not read {}", cli.chaizi.display()))?;

    Ok(merge::merge_hanzi(char_base, &chaizi_map)?)
}

fn write_db(records: &[CharRecord], path_out: &Path) -> anyhow::Result<()> {
    let mut conn = Connection::open_in_memory()?;
    let tx = conn.transaction()?;
    let num_hanzi = hanzi_to_db::hanzi_to_db(&tx, records)?;
    tx.commit()?;

    let mut db_out = Connection::open(path_out).with_context(|| format!(
        "Could not create output file {}",
        path_out.display()
    ))?;
    let backup = backup::Backup::new(&conn, &mut db_out)?;
    backup.run_to_completion(4000, Duration::new(0, 0), None)?;
    tracing::info!(records = num_hanzi, path = %path_out.display(), "wrote sqlite database");
    Ok(())
}

fn write_output(records: &[CharRecord], cli: &Cli) -> anyhow::Result<()> {
    let file_out = File::create(&cli.output).with_context(|| format!(
        "Could not create output file {}",
        cli.output.display()
    ))?;
    let mut writer_out = BufWriter::new(file_out);
    merge::write_hanzi_data(&mut writer_out, records)
        .with_context(|| format!("Could not write {}", cli.output.display()))?;
    tracing::info!(records = records.len(), path = %cli.output.display(), "wrote merged records");

    if let Some(path_out) = &cli.db {
        write_db(records, path_out)?;
    }
    Ok(())
}

/// Absolute path without symlinks or "./" parts, for files which may not exist yet only the parent directory
/// is resolved
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

fn check_paths(cli: &Cli) -> anyhow::Result<()> {
    let char_base = resolve_path(&cli.char_base);
    let chaizi = resolve_path(&cli.chaizi);
    let output = resolve_path(&cli.output);
    if output == char_base || output == chaizi {
        bail!("Input file and output file must be different");
    }
    if let Some(path_db) = &cli.db {
        let db = resolve_path(path_db);
        if db == output || db == char_base || db == chaizi {
            bail!("The sqlite output file must differ from all other files");
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    check_paths(&cli)?;

    let records = read_input(&cli)?;

    if cli.check {
        let errors = data_check::check_records(&records)?;
        for err in &errors {
            tracing::warn!("{err}");
        }
        tracing::warn!(problems = errors.len(), "data check finished");
    }

    write_output(&records, &cli)?;

    println!(
        "Done! Processed {} hanzi records, saved to {}",
        records.len(),
        cli.output.display()
    );
    Ok(())
}
