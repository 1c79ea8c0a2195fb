use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use crystal_symmetry::catalog::{
    point_groups, regenerate_point_groups, regenerate_space_groups, space_groups, CatalogRow,
};
use crystal_symmetry::Query;
use env_logger::Env;
use log::info;

#[derive(Parser)]
#[command(name = "symmetry-catalog")]
#[command(about = "Maintain and inspect the bundled point and space group catalogs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the catalog JSON files from the Hall symbol tables
    Regenerate {
        /// Output directory
        #[arg(short, long, default_value = "data")]
        output: PathBuf,
    },
    /// Look up a group and print its operations
    Show {
        /// Number, Hermann-Mauguin or Hall symbol
        key: String,

        /// Search the point group catalog instead of the space groups
        #[arg(short, long)]
        point_group: bool,

        /// Read the key as a group number rather than a symbol
        #[arg(short, long)]
        number: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting symmetry-catalog v{}", crystal_symmetry::VERSION);

    match cli.command {
        Commands::Regenerate { output } => regenerate(output),
        Commands::Show {
            key,
            point_group,
            number,
        } => show(&key, point_group, number),
    }
}

fn regenerate(output: PathBuf) -> anyhow::Result<()> {
    fs::create_dir_all(&output)
        .with_context(|| format!("cannot create {}", output.display()))?;
    for (file, catalog) in [
        ("point_groups.json", regenerate_point_groups()?),
        ("space_groups.json", regenerate_space_groups()?),
    ] {
        let path = output.join(file);
        fs::write(&path, catalog.to_json()?)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!("Wrote {} rows to {}", catalog.len(), path.display());
    }
    Ok(())
}

fn show(key: &str, point_group: bool, number: bool) -> anyhow::Result<()> {
    let catalog = if point_group { point_groups() } else { space_groups() };
    let query = if number {
        let number: u32 = key
            .trim()
            .parse()
            .with_context(|| format!("{key:?} is not a group number"))?;
        Query::key(number)
    } else {
        Query::key(key)
    };
    let lookup = catalog
        .get(&query)
        .with_context(|| format!("no {} entry matches {query}", catalog.kind()))?;
    print_row(&lookup);
    Ok(())
}

fn print_row(row: &CatalogRow) {
    let group = &row.group;
    println!("{} (#{})  Hall: {}", row.hm, row.n_c, row.hall);
    println!(
        "order {}  {}  centrosymmetric: {}  polar: {}  enantiomorphic: {}",
        group.order(),
        group.system(),
        group.is_centrosymmetric(),
        group.is_polar(),
        group.is_enantiomorphic()
    );
    for (index, operation) in group.operations().iter().enumerate() {
        println!("{:>4}  {:<24} {}", index + 1, operation.code(), operation.name());
    }
}
