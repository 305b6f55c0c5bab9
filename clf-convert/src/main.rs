use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use clf_core::{write_csv, write_json, ClfFile};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "clf-convert",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert binary CLF (.CF1/.CF2) loudspeaker files to JSON and CSV",
    long_about = None,
)]
struct Cli {
    /// Путь к входному .CF1/.CF2 файлу
    input: PathBuf,
    /// Путь к выходному JSON (по умолчанию: <input>.json)
    #[arg(long)]
    json: Option<PathBuf>,
    /// Путь к выходному CSV (по умолчанию: <input>.csv)
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Не писать JSON
    #[arg(long)]
    no_json: bool,
    /// Не писать CSV направленности
    #[arg(long)]
    no_csv: bool,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet { "error" } else { "info" };

    env_logger::Builder::new()
        .filter_level(level.parse().unwrap())
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let file = match File::open(&cli.input) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to open {:?}: {e}", cli.input);
            std::process::exit(1);
        }
    };

    // Декодируем полностью до создания каких-либо выходных файлов:
    // при ошибке не остаётся частичного JSON/CSV
    let mut reader = BufReader::new(file);
    let decoded = match ClfFile::decode(&mut reader) {
        Ok(d) => d,
        Err(e) => {
            error!("Decode failed: {e}");
            std::process::exit(1);
        }
    };

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  Format       : {}", decoded.header.file_info.id.name());
    info!("  Model        : {}", decoded.header.model_name);
    info!("  Manufacturer : {}", decoded.header.manufacturer);
    info!(
        "  Balloon      : {} bands × {} rot × {} arc",
        decoded.balloon.n_bands, decoded.balloon.n_rot, decoded.balloon.n_arc
    );
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if !cli.no_json {
        let path = cli
            .json
            .clone()
            .unwrap_or_else(|| cli.input.with_extension("json"));
        if let Err(e) = export_json(&decoded, &path) {
            error!("JSON export failed: {e}");
            std::process::exit(1);
        }
        info!("✓ JSON written: {path:?}");
    }

    if !cli.no_csv {
        let path = cli
            .csv
            .clone()
            .unwrap_or_else(|| cli.input.with_extension("csv"));
        if let Err(e) = export_csv(&decoded, &path) {
            error!("CSV export failed: {e}");
            std::process::exit(1);
        }
        info!("✓ CSV written: {path:?}");
    }

    info!("✓ Conversion complete");
}

fn export_json(decoded: &ClfFile, path: &PathBuf) -> clf_types::ClfResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_json(decoded, &mut out)?;
    out.flush()?;
    Ok(())
}

fn export_csv(decoded: &ClfFile, path: &PathBuf) -> clf_types::ClfResult<()> {
    let out = BufWriter::new(File::create(path)?);
    write_csv(&decoded.balloon, out)
}
